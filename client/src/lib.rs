//! # poet-web
//!
//! Leptos + WASM front end for the poem generation and storage service.
//!
//! This crate contains the page, components, signal-backed state and the
//! browser adapters (`fetch`, `localStorage`, `matchMedia`, native dialogs)
//! that plug into the `poems` core.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
