pub mod app;
pub mod components;
pub mod models;
pub mod motion;
pub mod pages;

#[cfg(any(test, feature = "ssr"))]
pub mod config;
#[cfg(any(test, feature = "ssr"))]
pub mod render;

#[cfg(feature = "ssr")]
pub mod export;
#[cfg(feature = "ssr")]
pub mod logging;
#[cfg(feature = "ssr")]
pub mod server;

// Re-export for convenience
pub use app::App;
#[cfg(any(test, feature = "ssr"))]
pub use render::{render_document, render_page};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
