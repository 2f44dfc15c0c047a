//! # fessor-client
//!
//! Leptos + WASM frontend for Fessor, a platform where teachers turn incident
//! notes into generated school reports.
//!
//! This crate contains the pages, components, session state, and the REST
//! client for the Fessor backend. It is compiled twice: with `ssr` for the
//! Axum host and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
