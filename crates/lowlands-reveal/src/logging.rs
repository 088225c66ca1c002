//! Logging infrastructure for the browser build

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the panic hook and route the `log` facade to the browser console.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_runtime(level: log::Level) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(level));
        log::debug!("reveal runtime initialized at {level}");
    });
}
