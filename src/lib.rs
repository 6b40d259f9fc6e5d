//! # admin-console
//!
//! Leptos + WASM client for the admin console: token storage, the
//! authenticated HTTP client, the auth endpoints, role/permission data, the
//! session state machine and the route guards that sit on top of them.
//!
//! Browser glue is behind the `csr` feature. Without it the storage,
//! navigation and transport adapters are inert, so everything else builds and
//! tests natively.

pub mod access;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod test_utils;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
