// Reset-password screen, reached from the emailed `#/reset-password?token=..` link

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{error_banner, input_field, notice_banner, route_link, submit_button};

use super::auth_shell;

pub fn render_reset_password(state: &AppState, token: &str) -> Result<Element, JsValue> {
    let auth = &state.auth;
    let draft = auth.reset.borrow().clone();
    let busy = auth.is_submitting();

    let mut form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .child(error_banner(auth.error.borrow().as_deref())?)?;

    if token.is_empty() {
        form = form.child(error_banner(Some("This reset link is missing its token. Request a new one."))?)?;
    }

    let done = auth.notice.borrow().clone();
    if let Some(notice) = done.as_deref() {
        form = form
            .child(notice_banner(notice)?)?
            .child(route_link("Go to sign in", &Route::Login.to_hash())?)?;
    } else {
        let password = {
            let reset = auth.reset.clone();
            input_field("New password", "password", "reset-password", &draft.password, move |value| {
                reset.borrow_mut().password = value;
            })?
        };
        let confirm = {
            let reset = auth.reset.clone();
            input_field("Confirm new password", "password", "reset-confirm", &draft.confirm_password, move |value| {
                reset.borrow_mut().confirm_password = value;
            })?
        };
        form = form
            .child(password)?
            .child(confirm)?
            .child(submit_button("Update password", "Updating...", busy || token.is_empty())?)?;
    }
    let form = form.build();

    {
        let state = state.clone();
        on_submit(&form, move || {
            if state.auth.is_submitting() {
                return;
            }
            let vm = SessionViewModel::new(state.clone());
            spawn_local(async move {
                vm.reset_password().await;
            });
        })?;
    }

    auth_shell("Choose a new password", "Enter it twice to confirm", form)
}
