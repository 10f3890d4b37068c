use gloo::events::EventListener;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::Document;
use yew_router::prelude::*;

use crate::api::ApiHandle;
use crate::components::club_grid::{ClubGrid, ClubGridProps};
use crate::config::Config;

pub mod api;
pub mod components;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod bindings {
    pub mod team_search;
    pub mod watched;
}


/// Server routes the page navigates to
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/calendar")]
    Calendar,
}

/// Attaches every behaviour whose anchor exists on the current page.
pub fn enhance_page(document: &Document, api: &ApiHandle) {
    if let Some(grid) = document.get_element_by_id(Config::CLUB_GRID_ID) {
        debug!("Mounting club grid into #{}", Config::CLUB_GRID_ID);
        grid.set_inner_html("");
        yew::Renderer::<ClubGrid>::with_root_and_props(grid, ClubGridProps { api: api.clone() })
            .render();
    }

    match bindings::watched::bind_all(document, api) {
        Ok(count) => debug!("{} watched toggles ready", count),
        Err(e) => error!("Failed to bind watched toggles: {}", e),
    }

    match bindings::team_search::bind(document, api, Config::search_debounce_ms()) {
        Some(binding) => binding.forget(),
        None => debug!("No team search on this page"),
    }
}

#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    info!("Initializing page behaviour...");
    let document = gloo::utils::document();
    let api = ApiHandle::default();

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            enhance_page(&target, &api);
        })
        .forget();
    } else {
        enhance_page(&document, &api);
    }

    info!("Page behaviour attached");
    Ok(())
}

// Entry point Trunk calls once the module is loaded
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    run_app()
}
