#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod dom;
pub mod links;
pub mod parallax;
pub mod scroll;
pub mod section;
pub mod styles;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    leptos::mount::hydrate_body(App);
}
