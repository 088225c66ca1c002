//! Great Lakes – St. Lawrence Lowlands presentation, client-side rendered.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
pub mod config;

use app::App;

/// WASM entry point: logging, then mount.
#[wasm_bindgen(start)]
pub fn start() {
    lowlands_reveal::init_runtime(log::Level::Info);

    log::info!("Lowlands presentation initializing...");

    mount_to_body(App);

    log::info!("Lowlands presentation mounted successfully");
}
