//! # client
//!
//! Leptos + WASM binding layer for the `authgate` session gate.
//!
//! This crate renders the login page and the protected root page, and wires
//! `authgate`'s logic to the browser: `localStorage` for the session,
//! `fetch` for the login request, and `location.replace` for redirects.
//! Everything browser-specific sits behind the `csr` feature so the rest
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    leptos::mount::mount_to_body(app::App);
}
