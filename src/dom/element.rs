// ============================================================================
// ELEMENT HELPERS - lookups and small mutations on the live document
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Remove every child of `element`
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Current `location.hash`, empty when unavailable
pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Write `location.hash` only when it differs, so no extra hashchange fires
pub fn set_hash(hash: &str) -> Result<(), JsValue> {
    if current_hash() == hash {
        return Ok(());
    }
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_hash(hash)
}

/// Blocking browser confirmation dialog; false when it cannot be shown
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
