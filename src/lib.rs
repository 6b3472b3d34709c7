//! Envirie landing page
//!
//! Interactive marketing page for the Envirie climate engagement platform,
//! built with Leptos and WebAssembly. `core` holds the interaction state
//! machines, `ui` renders them.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
