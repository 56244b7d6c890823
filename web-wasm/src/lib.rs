//! Wine Catalog Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod config;
mod navigation;
mod pages;
mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    config::report_configuration();
    leptos::mount::mount_to_body(app::App);
}
