// Small building blocks shared by several screens

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_input, text_element, ElementBuilder};

/// Labelled input whose every keystroke goes to `on_value`.
/// No re-render is triggered, so focus and caret stay put.
pub fn input_field<F>(label: &str, input_type: &str, id: &str, value: &str, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .value(value)
        .build();
    on_input(&input, on_value)?;

    labelled(label, id, input)
}

pub fn textarea_field<F>(label: &str, id: &str, value: &str, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let area = ElementBuilder::new("textarea")?
        .class("form-input")
        .id(id)?
        .attr("rows", "3")?
        .value(value)
        .build();
    on_input(&area, on_value)?;

    labelled(label, id, area)
}

pub fn labelled(label: &str, id: &str, control: Element) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?
        .class("form-label")
        .attr("for", id)?
        .text(label)
        .build();
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(control)?
        .build())
}

pub fn submit_button(text: &str, busy_text: &str, busy: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", busy)?
        .text(if busy { busy_text } else { text })
        .build())
}

pub fn button(class: &str, text: &str, disabled: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .flag("disabled", disabled)?
        .text(text)
        .build())
}

/// Red inline message; empty placeholder when there is none
pub fn error_banner(message: Option<&str>) -> Result<Element, JsValue> {
    match message {
        Some(text) => Ok(ElementBuilder::new("div")?
            .class("alert alert-error")
            .attr("role", "alert")?
            .text(text)
            .build()),
        None => Ok(ElementBuilder::new("div")?.class("alert-slot").build()),
    }
}

pub fn notice_banner(message: &str) -> Result<Element, JsValue> {
    text_element("div", "alert alert-success", message)
}

/// Plain hash link; the hashchange listener does the navigation
pub fn route_link(text: &str, hash: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class("link")
        .attr("href", hash)?
        .text(text)
        .build())
}

/// Footer with the legal pages, shown on every screen
pub fn legal_footer() -> Result<Element, JsValue> {
    use crate::state::Route;
    ElementBuilder::new("footer")?
        .class("legal-footer")
        .child(route_link("Privacy", &Route::Privacy.to_hash())?)?
        .child(route_link("Terms", &Route::Terms.to_hash())?)?
        .child(route_link("Security", &Route::Security.to_hash())?)
        .map(ElementBuilder::build)
}
