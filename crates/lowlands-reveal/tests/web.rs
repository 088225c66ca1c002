//! Browser tests for the `IntersectionObserver` binding.
//!
//! Run with `wasm-pack test --headless --firefox crates/lowlands-reveal`.

#![cfg(target_arch = "wasm32")]

use lowlands_reveal::dom::DomSubscription;
use lowlands_reveal::{Subscription, Threshold, VisibilityObserver};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mounted_div() -> web_sys::Element {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document");
    let div = document.create_element("div").expect("create div");
    document
        .body()
        .expect("document body")
        .append_child(&div)
        .expect("append div");
    div
}

#[wasm_bindgen_test]
fn observe_and_release_is_idempotent() {
    let target = mounted_div();
    let mut subscription =
        DomSubscription::observe(&target, Threshold::ANY, |_| {}).expect("observer created");
    assert!(!subscription.is_released());

    subscription.release();
    subscription.release();
    assert!(subscription.is_released());
}

#[wasm_bindgen_test]
fn dropping_pending_observer_disconnects() {
    let target = mounted_div();
    let threshold = Threshold::new(0.1).expect("valid threshold");
    let subscription = DomSubscription::observe(&target, threshold, |_| {}).expect("observer created");

    let mut observer = VisibilityObserver::new(threshold);
    observer.bind(subscription);
    assert!(observer.is_observing());

    target.remove();
    observer.detach();
    assert!(!observer.is_observing());
    assert!(!observer.has_been_seen());
}
