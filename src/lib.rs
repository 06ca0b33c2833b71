//! # lockbox
//!
//! Leptos + WASM client shell for a personal vault: a guarded router, a
//! session store persisted to `localStorage`, and the vault pages.
//!
//! The session, guard, and routing logic is plain Rust and runs natively in
//! tests. Browser bindings sit behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;
pub mod storage;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
