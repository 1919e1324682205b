//! # estate-portal
//!
//! Leptos + WASM frontend for a multilingual industrial real-estate portal.
//!
//! Every page lives under a locale prefix (`/en`, `/ru`, `/uz`); paths without
//! a valid one are redirected to the default locale. Visitors can shortlist up
//! to four listings for side-by-side comparison; the shortlist survives reloads
//! through browser storage.
//!
//! The comparison core (`services::comparison`, `state::comparison`,
//! `util::storage`) and the locale helpers (`util::locale`, `util::locale_nav`)
//! carry no browser dependency and are tested natively.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
