use leptos::prelude::*;

pub mod api;
pub mod components;
pub mod types;

pub use components::form;

use components::playground::Playground;

#[component]
pub fn App() -> impl IntoView {
    view! { <Playground /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
