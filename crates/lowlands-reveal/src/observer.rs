//! # Visibility Observer
//!
//! Couples a [`VisibilityLatch`] to the platform subscription that feeds it.
//! The subscription only lives while the latch is pending: the first
//! qualifying ratio releases it, and so does detaching or dropping the
//! observer before that happens.

use crate::latch::{LatchOutcome, Threshold, VisibilityLatch};

/// A live registration with a viewport-intersection facility.
///
/// `release` must stop further deliveries. It may be called from inside a
/// delivery, so implementations should not free the callback itself there.
pub trait Subscription {
    /// Stop observing.
    fn release(&mut self);
}

/// Observer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverPhase {
    /// No region bound yet.
    Unbound,
    /// Bound and waiting for a qualifying intersection.
    Pending,
    /// Fired once; subscription released.
    Triggered,
    /// Detached before firing; subscription released.
    Cancelled,
}

/// One-shot visibility observer owning a single subscription.
pub struct VisibilityObserver<S: Subscription> {
    latch: VisibilityLatch,
    subscription: Option<S>,
    phase: ObserverPhase,
}

impl<S: Subscription> VisibilityObserver<S> {
    /// Create an unbound observer.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            latch: VisibilityLatch::new(threshold),
            subscription: None,
            phase: ObserverPhase::Unbound,
        }
    }

    /// Hand over the subscription for the bound region.
    ///
    /// Ignored unless the observer is still unbound; a second region would
    /// break the one-subscription-per-container rule.
    pub fn bind(&mut self, mut subscription: S) {
        if self.phase != ObserverPhase::Unbound {
            log::warn!("visibility observer already bound, releasing extra subscription");
            subscription.release();
            return;
        }
        self.subscription = Some(subscription);
        self.phase = ObserverPhase::Pending;
    }

    /// Deliver one intersection ratio. Returns `true` only for the delivery
    /// that flipped the state to seen.
    pub fn deliver(&mut self, ratio: f64) -> bool {
        if self.phase != ObserverPhase::Pending {
            return false;
        }
        match self.latch.offer(ratio) {
            LatchOutcome::Triggered => {
                self.release();
                self.phase = ObserverPhase::Triggered;
                true
            }
            LatchOutcome::BelowThreshold | LatchOutcome::AlreadyTriggered => false,
        }
    }

    /// The region left the display tree.
    pub fn detach(&mut self) {
        match self.phase {
            ObserverPhase::Unbound | ObserverPhase::Pending => {
                self.release();
                self.phase = ObserverPhase::Cancelled;
            }
            ObserverPhase::Triggered | ObserverPhase::Cancelled => {}
        }
    }

    /// The `has_been_seen` flag.
    pub fn has_been_seen(&self) -> bool {
        self.latch.has_been_seen()
    }

    /// Whether a subscription is still live.
    pub fn is_observing(&self) -> bool {
        self.phase == ObserverPhase::Pending
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ObserverPhase {
        self.phase
    }

    /// Configured threshold.
    pub fn threshold(&self) -> Threshold {
        self.latch.threshold()
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.as_mut() {
            subscription.release();
        }
    }
}

impl<S: Subscription> Drop for VisibilityObserver<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
