//! # docnav
//!
//! Leptos + WASM front end for a static documentation site, built around a
//! scroll-synchronized table-of-contents navigator and a persisted light/dark
//! theme toggle.
//!
//! The navigator core (`state`) is plain Rust over an injected
//! [`adapter::DocumentAdapter`], so it runs unchanged in the browser
//! (`hydrate`), during server rendering (`ssr`), and in unit tests. `pages`
//! and `components` bridge it into Leptos signals.

pub mod adapter;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
