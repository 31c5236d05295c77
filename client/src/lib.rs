//! # client
//!
//! Leptos + WASM frontend for the GoBarber scheduling product: sign in,
//! sign up, password recovery/reset, profile editing, and toast feedback.
//!
//! ARCHITECTURE
//! ============
//! `state` holds plain, natively testable models (session store, toast queue),
//! `util` wraps them in reactive context handles and holds pure helpers
//! (validation, route guard), `net` talks to the remote REST API, and
//! `pages`/`components` are thin view glue over those services.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
