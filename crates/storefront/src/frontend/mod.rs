//! Leptos frontend (client-side rendered).

pub mod app;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    vitrine_observability::tracing::init(&vitrine_observability::LogConfig::browser());

    leptos::mount_to_body(app::App);
}
