//! 議員候補者名簿 Webアプリ (Leptos + WASM)

mod app;
mod components;
mod console_writer;
mod photo_store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_writer::init(tracing_subscriber::filter::LevelFilter::DEBUG);
    leptos::mount::mount_to_body(app::App);
}
