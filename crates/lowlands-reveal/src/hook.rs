//! Leptos integration: a per-component `use_on_screen` hook

use crate::dom::DomSubscription;
use crate::latch::Threshold;
use crate::observer::VisibilityObserver;
use leptos::html::Div;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

type SharedObserver = Rc<RefCell<VisibilityObserver<DomSubscription>>>;

/// Observe `target` once it mounts and report whether it has ever been on
/// screen at `threshold` or more.
///
/// Each call owns a private observer. It is released on the first qualifying
/// intersection or when the calling component is cleaned up, whichever comes
/// first. A ref that never resolves leaves the signal `false`.
pub fn use_on_screen(target: NodeRef<Div>, threshold: Threshold) -> ReadSignal<bool> {
    let (has_been_seen, set_has_been_seen) = signal(false);
    let slot = StoredValue::new_local(None::<SharedObserver>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if slot.with_value(Option::is_some) {
            return;
        }

        let observer: SharedObserver = Rc::new(RefCell::new(VisibilityObserver::new(threshold)));
        let weak = Rc::downgrade(&observer);
        let subscription = DomSubscription::observe(&element, threshold, move |ratio| {
            let Some(observer) = weak.upgrade() else {
                return;
            };
            let Ok(mut observer) = observer.try_borrow_mut() else {
                return;
            };
            if observer.deliver(ratio) {
                set_has_been_seen.set(true);
            }
        });

        match subscription {
            Ok(subscription) => {
                observer.borrow_mut().bind(subscription);
                slot.set_value(Some(observer));
            }
            Err(e) => {
                log::warn!("visibility observer unavailable, content stays hidden: {e}");
            }
        }
    });

    on_cleanup(move || {
        slot.update_value(|observer| {
            if let Some(observer) = observer.take() {
                observer.borrow_mut().detach();
            }
        });
    });

    has_been_seen
}
