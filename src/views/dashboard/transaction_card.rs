// One row of the transaction list

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_element, ElementBuilder};
use crate::models::Transaction;
use crate::utils::format::{format_date, short_reference};
use crate::viewmodels::DashboardViewModel;

pub fn render_transaction_card(tx: &Transaction, selected: bool, vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let class = if selected { "transaction-card selected" } else { "transaction-card" };

    let header = ElementBuilder::new("div")?
        .class("card-header")
        .child(text_element("span", "card-reference", &short_reference(&tx.transaction_id))?)?
        .child(text_element("span", tx.status.badge_class(), tx.status.as_str())?)?
        .build();

    let parties = format!("{} → {}", tx.seller_company, tx.buyer_company);
    let mut footer = ElementBuilder::new("div")?
        .class("card-footer")
        .child(text_element("span", "card-total", &tx.display_total())?)?;
    if let Some(created) = tx.created_at.as_ref() {
        footer = footer.child(text_element("span", "card-date", &format_date(created))?)?;
    }

    let card = ElementBuilder::new("div")?
        .class(class)
        .attr("data-id", &tx.id.to_string())?
        .child(header)?
        .child(text_element("h3", "card-product", &tx.product_name)?)?
        .child(text_element("p", "card-parties", &parties)?)?
        .child(footer.build())?
        .build();

    let vm = vm.clone();
    let id = tx.id;
    on_click(&card, move |_| vm.select(Some(id)))?;

    Ok(card)
}
