// ============================================================================
// TRANSACTION MODAL - create and edit share one form
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_change, on_click, on_submit, text_element, ElementBuilder};
use crate::state::{AppState, ModalMode, TransactionForm};
use crate::utils::constants::SUPPORTED_CURRENCIES;
use crate::viewmodels::DashboardViewModel;
use crate::views::shared::{button, error_banner, input_field, labelled, submit_button, textarea_field};

type Setter = fn(&mut TransactionForm, String);

fn field(
    draft: &Rc<RefCell<TransactionForm>>,
    label: &str,
    input_type: &str,
    id: &str,
    value: &str,
    set: Setter,
) -> Result<Element, JsValue> {
    let draft = draft.clone();
    input_field(label, input_type, id, value, move |text| set(&mut draft.borrow_mut(), text))
}

fn row(left: Element, right: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("form-row").child(left)?.child(right)?.build())
}

pub fn render_transaction_modal(state: &AppState, mode: ModalMode) -> Result<Element, JsValue> {
    let vm = DashboardViewModel::new(state.clone());
    let cell = &state.dashboard.draft;
    let draft = cell.borrow().clone();
    let busy = state.dashboard.is_busy();

    let (title, submit_text, busy_text) = match mode {
        ModalMode::Create => ("New Transaction", "Create Transaction", "Creating..."),
        ModalMode::Edit(_) => ("Edit Transaction", "Save Changes", "Saving..."),
    };

    let close = button("btn btn-icon", "✕", false)?;
    {
        let vm = vm.clone();
        on_click(&close, move |_| vm.close_modal())?;
    }
    let header = ElementBuilder::new("div")?
        .class("modal-header")
        .child(text_element("h2", "", title)?)?
        .child(close)?
        .build();

    let description = {
        let target = cell.clone();
        textarea_field("Product description", "tx-description", &draft.product_description, move |v| {
            target.borrow_mut().product_description = v;
        })?
    };
    let notes = {
        let target = cell.clone();
        textarea_field("Notes", "tx-notes", &draft.notes, move |v| {
            target.borrow_mut().notes = v;
        })?
    };

    let cancel = button("btn btn-secondary", "Cancel", busy)?;
    {
        let vm = vm.clone();
        on_click(&cancel, move |_| vm.close_modal())?;
    }
    let footer = ElementBuilder::new("div")?
        .class("modal-actions")
        .child(cancel)?
        .child(submit_button(submit_text, busy_text, busy)?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("modal-form")
        .attr("novalidate", "")?
        .child(error_banner(state.dashboard.form_error.borrow().as_deref())?)?
        .child(row(
            field(cell, "Buyer company", "text", "tx-buyer", &draft.buyer_company, |d, v| d.buyer_company = v)?,
            field(cell, "Seller company", "text", "tx-seller", &draft.seller_company, |d, v| d.seller_company = v)?,
        )?)?
        .child(field(cell, "Product name", "text", "tx-product", &draft.product_name, |d, v| d.product_name = v)?)?
        .child(description)?
        .child(row(
            field(cell, "Quantity", "number", "tx-quantity", &draft.quantity, |d, v| d.quantity = v)?,
            field(cell, "Unit price", "text", "tx-unit-price", &draft.unit_price, |d, v| d.unit_price = v)?,
        )?)?
        .child(row(
            currency_select(cell, &draft.currency)?,
            field(cell, "Delivery date", "date", "tx-delivery", &draft.delivery_date, |d, v| d.delivery_date = v)?,
        )?)?
        .child(field(cell, "Payment terms", "text", "tx-terms", &draft.payment_terms, |d, v| d.payment_terms = v)?)?
        .child(notes)?
        .child(footer)?
        .build();

    {
        let state = state.clone();
        on_submit(&form, move || {
            if state.dashboard.is_busy() {
                return;
            }
            let vm = DashboardViewModel::new(state.clone());
            spawn_local(async move {
                vm.save().await;
            });
        })?;
    }

    let dialog = ElementBuilder::new("div")?
        .class("modal")
        .attr("role", "dialog")?
        .attr("aria-modal", "true")?
        .child(header)?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?.class("modal-backdrop").child(dialog)?.build())
}

fn currency_select(draft: &Rc<RefCell<TransactionForm>>, current: &str) -> Result<Element, JsValue> {
    let options = SUPPORTED_CURRENCIES
        .iter()
        .map(|code| -> Result<Element, JsValue> {
            Ok(ElementBuilder::new("option")?
                .attr("value", code)?
                .flag("selected", *code == current)?
                .text(code)
                .build())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id("tx-currency")?
        .children(options)?
        .value(current)
        .build();

    let draft = draft.clone();
    on_change(&select, move |value| draft.borrow_mut().currency = value)?;

    labelled("Currency", "tx-currency", select)
}
