use gloo::events::EventListener;
use log::{debug, error};
use shared::watched::{
    toggle, ToggleOutcome, CHECKBOX_SELECTOR, EXTERNAL_ID_ATTR, MATCH_CONTAINER_SELECTOR,
    TOGGLE_FAILED, WATCHED_CLASS,
};
use shared::Result;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlInputElement};

use crate::api::ApiHandle;
use crate::dom::{self, js_error};

/// Binds every watched checkbox on the page. Returns how many were bound.
pub fn bind_all(document: &Document, api: &ApiHandle) -> Result<u32> {
    let boxes = document
        .query_selector_all(CHECKBOX_SELECTOR)
        .map_err(|e| js_error("Failed to query watched checkboxes", e))?;

    let mut bound = 0;
    for index in 0..boxes.length() {
        let Some(checkbox) = boxes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        bind(&checkbox, api.clone()).forget();
        bound += 1;
    }
    debug!("Bound {} watched checkboxes", bound);
    Ok(bound)
}

/// Binds one checkbox; the returned listener unbinds it when dropped.
pub fn bind(checkbox: &HtmlInputElement, api: ApiHandle) -> EventListener {
    let target = checkbox.clone();
    EventListener::new(checkbox, "change", move |_| {
        let Some(external_id) = target.get_attribute(EXTERNAL_ID_ATTR) else {
            return;
        };
        let checked_now = target.checked();
        let checkbox = target.clone();
        let api = api.clone();

        spawn_local(async move {
            match toggle(&*api, &external_id, checked_now).await {
                ToggleOutcome::Applied { watched } => apply_watched(&checkbox, watched),
                ToggleOutcome::Reverted { checked } => {
                    checkbox.set_checked(checked);
                    dom::alert(TOGGLE_FAILED);
                }
            }
        });
    })
}

fn apply_watched(checkbox: &HtmlInputElement, watched: bool) {
    match checkbox.closest(MATCH_CONTAINER_SELECTOR) {
        Ok(Some(container)) => {
            if let Err(e) = container.class_list().toggle_with_force(WATCHED_CLASS, watched) {
                error!("{}", js_error("Failed to update match container", e));
            }
        }
        Ok(None) => debug!("Watched checkbox has no match container"),
        Err(e) => error!("{}", js_error("Invalid match container selector", e)),
    }
}
