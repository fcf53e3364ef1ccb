//! NovaBots Web Frontend
//!
//! Leptos-based WASM landing page with an animated particle backdrop.

mod app;
mod backdrop;
mod components;
mod pages;

pub use app::App;
pub use backdrop::{BrowserHost, CanvasOverlay, ParticleBackdrop, ResizeListener};

use leptos::prelude::*;
use novabots_core::{BotCatalog, BuildMode, StaticCatalog};
use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if BuildMode::current().is_development() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);

    let catalog = StaticCatalog::new();
    let bots = catalog.bots();
    tracing::debug!(catalog = catalog.name(), bots = bots.len(), "loaded bot catalog");

    leptos::mount::mount_to_body(move || view! { <App bots=bots /> });
}
