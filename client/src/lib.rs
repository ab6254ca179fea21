//! Browser front end for the portfolio site.
//!
//! Built as a `cdylib` for the browser with the `csr` feature; without it the
//! crate compiles natively so components and helpers can be unit tested.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
