//! # client
//!
//! Leptos frontend for the academy site: pages, components, reactive state,
//! the light/dark theme subsystem, and REST helpers for the deployment
//! backend.
//!
//! Built with `ssr` for server rendering and with `hydrate` for the browser
//! bundle, whose entry point is [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    // Re-apply in case the inline script was blocked (CSP, disabled inline JS).
    let theme = util::pre_paint::apply_pre_paint(&util::storage::BrowserStorage, &util::document::DocumentSurface);
    log::debug!("pre-paint theme: {theme}");

    leptos::mount::hydrate_body(app::App);
}
