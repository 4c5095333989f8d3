// ============================================================================
// AUTH VIEWS - screens shown while signed out
// ============================================================================

pub mod forgot_password_view;
pub mod login_view;
pub mod register_view;
pub mod reset_password_view;

pub use forgot_password_view::render_forgot_password;
pub use login_view::render_login;
pub use register_view::render_register;
pub use reset_password_view::render_reset_password;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::views::shared::legal_footer;

/// Centered card with the product header above `body`
fn auth_shell(title: &str, subtitle: &str, body: Element) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("auth-header")
        .child(text_element("div", "auth-logo", "B2B")?)?
        .child(text_element("h1", "auth-title", title)?)?
        .child(text_element("p", "auth-subtitle", subtitle)?)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("auth-card")
        .child(header)?
        .child(body)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("auth-screen")
        .child(card)?
        .child(legal_footer()?)?
        .build())
}
