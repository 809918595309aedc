//! # client
//!
//! Leptos + WASM frontend for the RealEstate sign-in flow.
//!
//! The login page collects credentials, posts them to the authentication
//! backend, hands the issued session to the `AuthState` context and reports
//! the outcome through toast notifications.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
