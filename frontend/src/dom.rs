//! Small helpers for the parts of the page that are enhanced in place rather than
//! rendered by Yew.

use shared::{CalendarError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

pub fn js_error(context: &str, value: JsValue) -> CalendarError {
    CalendarError::Dom(format!("{}: {:?}", context, value))
}

pub fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

/// Creates a `<div>` with the given class and optional text content.
pub fn div(document: &Document, class: &str, text: Option<&str>) -> Result<HtmlElement> {
    let element = document
        .create_element("div")
        .map_err(|e| js_error("Failed to create div", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CalendarError::Dom("div is not an HtmlElement".to_string()))?;
    element.set_class_name(class);
    if let Some(text) = text {
        element.set_text_content(Some(text));
    }
    Ok(element)
}

/// Blocking browser alert
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Full-page navigation
pub fn navigate(path: &str) -> Result<()> {
    gloo::utils::window()
        .location()
        .set_href(path)
        .map_err(|e| js_error("Navigation failed", e))
}
