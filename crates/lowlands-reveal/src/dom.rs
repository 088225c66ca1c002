//! Browser `IntersectionObserver` binding

use crate::error::RevealResult;
use crate::latch::Threshold;
use crate::observer::Subscription;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A private `IntersectionObserver` watching exactly one element.
///
/// The JS callback is owned here and freed on drop, never on release, since
/// release usually runs from inside that callback.
pub struct DomSubscription {
    observer: IntersectionObserver,
    target: Element,
    released: bool,
    _callback: EntriesCallback,
}

impl DomSubscription {
    /// Start observing `target`, forwarding each entry's intersection ratio.
    ///
    /// Entries that are not intersecting are forwarded as `0.0`.
    pub fn observe<F>(target: &Element, threshold: Threshold, mut on_ratio: F) -> RevealResult<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_ratio(entry_ratio(&entry));
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.fraction()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            target: target.clone(),
            released: false,
            _callback: callback,
        })
    }

    /// Whether the JS observer has been disconnected.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Subscription for DomSubscription {
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
        self.released = true;
    }
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

fn entry_ratio(entry: &IntersectionObserverEntry) -> f64 {
    if entry.is_intersecting() {
        // Edge-adjacent targets intersect with a zero ratio.
        entry.intersection_ratio().max(f64::MIN_POSITIVE)
    } else {
        0.0
    }
}
