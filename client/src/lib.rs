//! # gframe-ui
//!
//! Leptos + WASM frontend for the gframe admin site: public pages, a login
//! form, and an admin shell with a sidebar menu and nested routes.
//!
//! This crate contains pages, components, the session store, the
//! notification queue, and the request wrappers that normalize the server's
//! `{code, data, msg}` envelope. It is rendered on the server (`ssr`) and
//! hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
