//! AuthGate - Sign-up / sign-in frontend
//!
//! A small client-side authentication UI: two form screens that validate
//! user input and forward it to a remote API, built with Leptos and
//! WebAssembly.

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
