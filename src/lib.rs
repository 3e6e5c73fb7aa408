//! # portfolio
//!
//! Leptos + WASM single-page portfolio site. Biographical data lives in a
//! static data module and is rendered as a sequence of sections, each
//! wrapped in a scroll/mount reveal animation component.
//!
//! The site is fully static: there is no backend, no router, and no
//! persistence beyond the dark-mode preference in `localStorage`.
//! Browser-only code is gated behind the `csr` feature so native builds
//! (and `cargo test`) compile the pure logic with stubs.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
