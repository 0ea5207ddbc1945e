//! # client
//!
//! Leptos + WASM frontend for the Ichiraku Ramen ordering site.
//!
//! Pages, components, and reactive state live here; every persistence rule is
//! delegated to the `shop` crate, with [`util::storage::BrowserStorage`]
//! plugging `localStorage` into it. The `ssr` feature renders the shell on the
//! host, `hydrate` takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
