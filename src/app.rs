// ============================================================================
// APP - owns the state and the #app root, re-renders on change
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::dom::{append_child, clear_children, current_hash, document, get_element_by_id, set_hash};
use crate::state::{AppState, Route};
use crate::viewmodels::DashboardViewModel;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;
        let state = AppState::new();

        // Many notifications in one tick collapse into a single render
        let scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Resolve the initial hash and kick off the first list load
    pub fn start(&self) {
        log::info!("🚀 [APP] Starting on {}", current_hash());
        // restored session: the route is already Dashboard, so no transition fires
        let restored = self.state.current_route() == Route::Dashboard;
        self.follow_hash();
        if restored && self.state.current_route() == Route::Dashboard {
            self.load_dashboard();
        }
    }

    /// Route to whatever `location.hash` now says (guard applied)
    pub fn follow_hash(&self) {
        let requested = Route::from_hash(&current_hash());
        let previous = self.state.current_route();
        let resolved = self.state.navigate(requested);

        if resolved == Route::Dashboard && previous != Route::Dashboard {
            self.load_dashboard();
        }
    }

    fn load_dashboard(&self) {
        let vm = DashboardViewModel::new(self.state.clone());
        spawn_local(async move { vm.reload().await });
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let focused = focused_id();

        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;

        set_hash(&self.state.current_route().to_hash())?;

        if let Some(id) = focused {
            restore_focus(&id);
        }
        Ok(())
    }
}

/// Id of the element holding focus before the tree is replaced
fn focused_id() -> Option<String> {
    let active = document()?.active_element()?;
    let id = active.id();
    (!id.is_empty()).then_some(id)
}

fn restore_focus(id: &str) {
    let Some(element) = get_element_by_id(id) else { return };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let _ = input.focus();
        let end = input.value().len() as u32;
        // not supported by every input type (email, number)
        let _ = input.set_selection_range(end, end);
    } else if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}
