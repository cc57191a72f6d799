//! Artificer's Handbook Web App (Leptos + WASM)

mod app;
mod components;
mod timer;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!("Artificer's Handbook booting");
    leptos::mount::mount_to_body(app::App);
}
