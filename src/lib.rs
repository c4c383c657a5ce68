#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod portfolio;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("should be able to init logger");
    leptos::mount::hydrate_body(App);
}
