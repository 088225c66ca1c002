//! # Lowlands Reveal
//!
//! Scroll-triggered, one-shot visibility for the Lowlands presentation.
//!
//! Every animated container owns a [`VisibilityObserver`]: a latch that flips
//! from unseen to seen the first time its region crosses a threshold, plus
//! the platform subscription feeding it. The subscription is released on that
//! first flip or on teardown, whichever comes first.
//!
//! The latch, observer and timing types are platform-free and tested
//! natively. [`dom::DomSubscription`] binds them to the browser's
//! `IntersectionObserver`, and the `leptos` feature adds `use_on_screen`.

pub mod dom;
pub mod error;
pub mod latch;
pub mod logging;
pub mod observer;
pub mod reveal;

#[cfg(feature = "leptos")]
pub mod hook;

pub use error::{RevealError, RevealResult};
pub use latch::{LatchOutcome, LatchPhase, Threshold, VisibilityLatch};
pub use logging::init_runtime;
pub use observer::{ObserverPhase, Subscription, VisibilityObserver};
pub use reveal::{Presentation, RevealProfile, RevealTiming, TransitionPhase};

#[cfg(feature = "leptos")]
pub use hook::use_on_screen;
