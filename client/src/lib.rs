//! # client
//!
//! Leptos + WASM frontend for the ticket system. Pages, components,
//! reactive auth state, and the REST client live here; the `domain` crate
//! supplies the role hierarchy and ticket vocabulary shared with the
//! server.
//!
//! Built with Trunk and served as static files by the `server` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
