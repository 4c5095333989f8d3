// ============================================================================
// MAIN PANEL - title, search, counters and the transaction list
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_click, on_input, text_element, ElementBuilder};
use crate::state::{AppState, ListState};
use crate::viewmodels::DashboardViewModel;
use crate::views::shared::button;

use super::transaction_card::render_transaction_card;

/// Kept stable so App can restore focus after a re-render
pub const SEARCH_INPUT_ID: &str = "transaction-search";

pub fn render_main_panel(state: &AppState) -> Result<Element, JsValue> {
    let vm = DashboardViewModel::new(state.clone());

    let refresh = button("btn btn-icon", "⟳", state.dashboard.is_loading())?;
    refresh.set_attribute("title", "Refresh")?;
    {
        let vm = vm.clone();
        on_click(&refresh, move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.reload().await });
        })?;
    }
    let title = ElementBuilder::new("div")?
        .class("panel-title")
        .child(text_element("h2", "", "Transactions")?)?
        .child(refresh)?
        .build();

    let search = ElementBuilder::new("input")?
        .class("form-input search-input")
        .id(SEARCH_INPUT_ID)?
        .attr("type", "search")?
        .attr("placeholder", "Search transactions...")?
        .value(&state.dashboard.search_query.borrow())
        .build();
    {
        let vm = vm.clone();
        on_input(&search, move |query| vm.set_search_query(query))?;
    }

    let counts = state.dashboard.counts();
    let stats = ElementBuilder::new("div")?
        .class("stats")
        .child(stat("Total", counts.total)?)?
        .child(stat("Completed", counts.completed)?)?
        .child(stat("Pending", counts.pending)?)?
        .build();

    let header = ElementBuilder::new("div")?
        .class("panel-header")
        .child(title)?
        .child(search)?
        .child(stats)?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("main-panel")
        .child(header)?
        .child(render_list(state, &vm)?)?
        .build())
}

fn stat(label: &str, value: usize) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("stat")
        .child(text_element("p", "stat-label", label)?)?
        .child(text_element("p", "stat-value", &value.to_string())?)?
        .build())
}

fn render_list(state: &AppState, vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?.class("transaction-list");
    let dashboard = &state.dashboard;

    let snapshot = dashboard.list.borrow().clone();
    let list = match snapshot {
        ListState::Loading => list.child(
            ElementBuilder::new("div")?
                .class("list-placeholder loading")
                .child(text_element("div", "spinner", "")?)?
                .child(text_element("p", "", "Loading transactions...")?)?
                .build(),
        )?,
        ListState::Error(message) => {
            let retry = button("btn btn-secondary", "Retry", false)?;
            let vm = vm.clone();
            on_click(&retry, move |_| {
                let vm = vm.clone();
                spawn_local(async move { vm.reload().await });
            })?;
            list.child(
                ElementBuilder::new("div")?
                    .class("list-placeholder error")
                    .child(text_element("p", "", &message)?)?
                    .child(retry)?
                    .build(),
            )?
        }
        ListState::Loaded(_) => {
            let visible = dashboard.filtered();
            if visible.is_empty() {
                let text = if dashboard.search_query.borrow().trim().is_empty() {
                    "No transactions yet"
                } else {
                    "No transactions found"
                };
                list.child(text_element("div", "list-placeholder", text)?)?
            } else {
                let selected = *dashboard.selected_id.borrow();
                let cards = visible
                    .iter()
                    .map(|tx| render_transaction_card(tx, selected == Some(tx.id), vm))
                    .collect::<Result<Vec<_>, _>>()?;
                list.children(cards)?
            }
        }
    };

    Ok(list.build())
}
