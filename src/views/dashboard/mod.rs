// ============================================================================
// DASHBOARD - sidebar | transaction list | details, plus the edit modal
// ============================================================================

pub mod details_panel;
pub mod main_panel;
pub mod sidebar;
pub mod transaction_card;
pub mod transaction_modal;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let mut layout = ElementBuilder::new("div")?
        .class("dashboard")
        .child(sidebar::render_sidebar(state)?)?
        .child(main_panel::render_main_panel(state)?)?
        .child(details_panel::render_details_panel(state)?)?;

    if let Some(mode) = state.dashboard.modal_mode() {
        layout = layout.child(transaction_modal::render_transaction_modal(state, mode)?)?;
    }

    Ok(layout.build())
}
