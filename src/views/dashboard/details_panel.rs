// ============================================================================
// DETAILS PANEL - selected transaction, status workflow, edit and delete
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{confirm, on_change, on_click, text_element, ElementBuilder};
use crate::models::{Transaction, TransactionStatus};
use crate::state::AppState;
use crate::utils::format::{format_date, format_datetime};
use crate::viewmodels::DashboardViewModel;
use crate::views::shared::{button, error_banner, labelled};

const DELETE_PROMPT: &str = "Are you sure you want to delete this transaction?";

pub fn render_details_panel(state: &AppState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("aside")?.class("details-panel");

    let Some(tx) = state.dashboard.selected() else {
        return Ok(panel
            .child(text_element("p", "details-empty", "Select a transaction to view details")?)?
            .build());
    };

    let vm = DashboardViewModel::new(state.clone());
    let busy = state.dashboard.is_busy();

    let close = button("btn btn-icon", "✕", false)?;
    {
        let vm = vm.clone();
        on_click(&close, move |_| vm.select(None))?;
    }
    let header = ElementBuilder::new("div")?
        .class("details-header")
        .child(text_element("h3", "", "Transaction Details")?)?
        .child(close)?
        .build();

    let body = ElementBuilder::new("div")?
        .class("details-body")
        .child(error_banner(state.dashboard.action_error.borrow().as_deref())?)?
        .child(section("Transaction ID", &tx.transaction_id)?)?
        .child(product_section(&tx)?)?
        .child(parties_section(&tx)?)?
        .child(financial_section(&tx)?)?;
    let body = optional_sections(body, &tx)?
        .child(status_select(&tx, busy, &vm)?)?
        .child(actions(&tx, busy, &vm)?)?
        .build();

    Ok(panel.child(header)?.child(body)?.build())
}

fn section(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("details-section")
        .child(text_element("p", "details-label", label)?)?
        .child(text_element("p", "details-value", value)?)?
        .build())
}

fn product_section(tx: &Transaction) -> Result<Element, JsValue> {
    let mut product = ElementBuilder::new("div")?
        .class("details-section")
        .child(text_element("p", "details-label", "Product")?)?
        .child(text_element("p", "details-value strong", &tx.product_name)?)?;
    if let Some(description) = tx.product_description.as_deref().filter(|d| !d.is_empty()) {
        product = product.child(text_element("p", "details-note", description)?)?;
    }
    Ok(product.build())
}

fn parties_section(tx: &Transaction) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("details-grid")
        .child(section("Buyer", &tx.buyer_company)?)?
        .child(section("Seller", &tx.seller_company)?)?
        .build())
}

fn financial_section(tx: &Transaction) -> Result<Element, JsValue> {
    let row = |label: &str, value: &str| -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("div")?
            .class("details-row")
            .child(text_element("span", "details-label", label)?)?
            .child(text_element("span", "details-value", value)?)?
            .build())
    };

    Ok(ElementBuilder::new("div")?
        .class("details-section financial")
        .child(text_element("p", "details-label", "Financial Details")?)?
        .child(row("Quantity:", &tx.quantity.to_string())?)?
        .child(row("Unit Price:", &tx.display_unit_price())?)?
        .child(row("Total:", &tx.display_total())?)?
        .build())
}

fn optional_sections(mut body: ElementBuilder, tx: &Transaction) -> Result<ElementBuilder, JsValue> {
    if let Some(terms) = tx.payment_terms.as_deref().filter(|t| !t.is_empty()) {
        body = body.child(section("Payment Terms", terms)?)?;
    }
    if let Some(date) = tx.delivery_date.as_ref() {
        body = body.child(section("Delivery Date", &format_date(date))?)?;
    }
    if let Some(notes) = tx.notes.as_deref().filter(|n| !n.is_empty()) {
        body = body.child(section("Notes", notes)?)?;
    }
    if let Some(insights) = tx.ai_insights.as_deref().filter(|i| !i.is_empty()) {
        body = body.child(
            ElementBuilder::new("div")?
                .class("details-section ai-insights")
                .child(text_element("p", "details-label", "✨ AI Insights")?)?
                .child(text_element("p", "details-value", insights)?)?
                .build(),
        )?;
    }
    if let Some(updated) = tx.updated_at.as_ref() {
        body = body.child(text_element("p", "details-meta", &format!("Last updated {}", format_datetime(updated)))?)?;
    }
    Ok(body)
}

fn status_select(tx: &Transaction, busy: bool, vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let options = TransactionStatus::ALL
        .iter()
        .map(|status| -> Result<Element, JsValue> {
            Ok(ElementBuilder::new("option")?
                .attr("value", status.as_str())?
                .flag("selected", *status == tx.status)?
                .text(&status.as_str().replace('_', " "))
                .build())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id("details-status")?
        .flag("disabled", busy)?
        .children(options)?
        .value(tx.status.as_str())
        .build();

    let vm = vm.clone();
    let id = tx.id;
    let current = tx.status;
    on_change(&select, move |value| {
        let Ok(status) = value.parse::<TransactionStatus>() else {
            log::warn!("⚠️ [DASHBOARD] Ignoring unknown status '{}'", value);
            return;
        };
        if status == current {
            return;
        }
        let vm = vm.clone();
        spawn_local(async move { vm.update_status(id, status).await });
    })?;

    labelled("Update Status", "details-status", select)
}

fn actions(tx: &Transaction, busy: bool, vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let edit = button("btn btn-secondary", "Edit", busy)?;
    {
        let vm = vm.clone();
        let id = tx.id;
        on_click(&edit, move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.open_edit(id).await });
        })?;
    }

    let delete = button("btn btn-danger", "Delete", busy)?;
    {
        let vm = vm.clone();
        let id = tx.id;
        on_click(&delete, move |_| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            let vm = vm.clone();
            spawn_local(async move { vm.delete(id).await });
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("details-actions")
        .child(edit)?
        .child(delete)?
        .build())
}
