//! # review-client
//!
//! Leptos + WASM front end for the code review service.
//!
//! The crate owns the browser-side session (who is signed in, persisted to
//! `localStorage`), the route guard that keeps protected views behind that
//! session, and the auth pages that hand backend-issued profiles to the
//! session store. Code analysis and review data live in the backend service.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
