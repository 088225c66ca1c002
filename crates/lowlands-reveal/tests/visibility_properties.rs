//! Visibility Properties Tests
//!
//! Property tests for the one-shot latch and observer: the seen flag only
//! ever moves forward, each subscription is released exactly once, and
//! independent containers never influence each other.

use lowlands_reveal::{
    ObserverPhase, Presentation, RevealProfile, RevealTiming, Subscription, Threshold,
    TransitionPhase, VisibilityLatch, VisibilityObserver,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

struct CountingSubscription {
    releases: Rc<Cell<u32>>,
}

impl Subscription for CountingSubscription {
    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

fn observer(threshold: Threshold) -> (VisibilityObserver<CountingSubscription>, Rc<Cell<u32>>) {
    let releases = Rc::new(Cell::new(0));
    let mut observer = VisibilityObserver::new(threshold);
    observer.bind(CountingSubscription {
        releases: releases.clone(),
    });
    (observer, releases)
}

fn arbitrary_threshold() -> impl Strategy<Value = Threshold> {
    (0.0f64..=1.0).prop_map(|f| Threshold::new(f).expect("strategy stays in range"))
}

fn arbitrary_ratios() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, 0..40)
}

proptest! {
    /// Once seen, always seen; and seen iff some prefix ratio qualified.
    #[test]
    fn prop_latch_is_monotonic(threshold in arbitrary_threshold(), ratios in arbitrary_ratios()) {
        let mut latch = VisibilityLatch::new(threshold);
        let mut seen_before = false;

        for (i, ratio) in ratios.iter().enumerate() {
            latch.offer(*ratio);
            prop_assert!(
                !seen_before || latch.has_been_seen(),
                "latch reverted at event {}", i
            );
            seen_before = latch.has_been_seen();

            let expected = ratios[..=i].iter().any(|r| threshold.is_met_by(*r));
            prop_assert_eq!(latch.has_been_seen(), expected);
        }
    }

    /// Exactly one delivery reports the flip, and the subscription is
    /// released exactly once over the observer's whole life.
    #[test]
    fn prop_observer_releases_once(threshold in arbitrary_threshold(), ratios in arbitrary_ratios()) {
        let (mut obs, releases) = observer(threshold);
        let flips = ratios.iter().filter(|r| obs.deliver(**r)).count();

        prop_assert!(flips <= 1);
        prop_assert_eq!(flips == 1, obs.has_been_seen());
        if obs.has_been_seen() {
            prop_assert_eq!(releases.get(), 1);
            prop_assert_eq!(obs.phase(), ObserverPhase::Triggered);
        } else {
            prop_assert_eq!(releases.get(), 0);
        }

        drop(obs);
        prop_assert_eq!(releases.get(), 1);
    }

    /// Two containers fed an arbitrary interleaving end up exactly where they
    /// would have if each had been fed alone.
    #[test]
    fn prop_containers_are_independent(
        a_threshold in arbitrary_threshold(),
        b_threshold in arbitrary_threshold(),
        events in prop::collection::vec((any::<bool>(), 0.0f64..=1.0), 0..60),
    ) {
        let (mut a, a_releases) = observer(a_threshold);
        let (mut b, b_releases) = observer(b_threshold);
        let mut a_solo = VisibilityLatch::new(a_threshold);
        let mut b_solo = VisibilityLatch::new(b_threshold);

        for (to_a, ratio) in &events {
            if *to_a {
                a.deliver(*ratio);
                a_solo.offer(*ratio);
            } else {
                b.deliver(*ratio);
                b_solo.offer(*ratio);
            }
        }

        prop_assert_eq!(a.has_been_seen(), a_solo.has_been_seen());
        prop_assert_eq!(b.has_been_seen(), b_solo.has_been_seen());
        prop_assert_eq!(a_releases.get(), u32::from(a.has_been_seen()));
        prop_assert_eq!(b_releases.get(), u32::from(b.has_been_seen()));
    }
}

#[test]
fn test_card_reveals_after_delay() {
    let threshold = Threshold::new(0.1).expect("valid threshold");
    let (mut card, _) = observer(threshold);
    let timing = RevealTiming::new(300, RevealProfile::CARD.transition_ms, 48);

    assert_eq!(Presentation::from_seen(card.has_been_seen()), Presentation::Hidden);
    assert!(card.deliver(0.5));
    assert_eq!(Presentation::from_seen(card.has_been_seen()), Presentation::Revealed);

    assert_eq!(timing.phase_at(150.0), TransitionPhase::Waiting);
    assert_eq!(timing.phase_at(300.0), TransitionPhase::Waiting);
    assert!(matches!(
        timing.phase_at(301.0),
        TransitionPhase::Animating { .. }
    ));
}

#[test]
fn test_below_threshold_stays_hidden() {
    let (mut card, releases) = observer(Threshold::new(0.5).expect("valid threshold"));
    assert!(!card.deliver(0.2));
    assert_eq!(Presentation::from_seen(card.has_been_seen()), Presentation::Hidden);
    assert!(card.is_observing());
    assert_eq!(releases.get(), 0);
}

#[test]
fn test_unmount_before_visible_releases_and_ignores_late_events() {
    let (mut section, releases) = observer(RevealProfile::SECTION.threshold);
    section.detach();
    assert_eq!(releases.get(), 1);
    assert!(!section.deliver(1.0));
    assert!(!section.has_been_seen());
    drop(section);
    assert_eq!(releases.get(), 1);
}
