//! # client
//!
//! Leptos + WASM front end for the VERITAS news verifier.
//!
//! This crate contains the routed pages, the site chrome, the verification
//! form with its request state machine, and the browser-side HTTP helpers.
//! The gateway renders it with the `ssr` feature; the browser bundle is
//! built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: attach the reactive runtime to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
