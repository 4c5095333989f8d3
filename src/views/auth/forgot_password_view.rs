// Forgot-password screen: asks for an email, shows the backend's reply

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{error_banner, input_field, notice_banner, route_link, submit_button};

use super::auth_shell;

pub fn render_forgot_password(state: &AppState) -> Result<Element, JsValue> {
    let auth = &state.auth;
    let email = auth.forgot.borrow().email.clone();
    let busy = auth.is_submitting();

    let email_field = {
        let forgot = auth.forgot.clone();
        input_field("Email", "email", "forgot-email", &email, move |value| {
            forgot.borrow_mut().email = value;
        })?
    };

    let mut form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .child(error_banner(auth.error.borrow().as_deref())?)?;
    if let Some(notice) = auth.notice.borrow().as_deref() {
        form = form.child(notice_banner(notice)?)?;
    }
    let form = form
        .child(email_field)?
        .child(submit_button("Send reset link", "Sending...", busy)?)?
        .build();

    {
        let state = state.clone();
        on_submit(&form, move || {
            if state.auth.is_submitting() {
                return;
            }
            let vm = SessionViewModel::new(state.clone());
            spawn_local(async move {
                vm.forgot_password().await;
            });
        })?;
    }

    let footer = ElementBuilder::new("p")?
        .class("auth-switch")
        .child(route_link("Back to sign in", &Route::Login.to_hash())?)?
        .build();

    let body = ElementBuilder::new("div")?.child(form)?.child(footer)?.build();

    auth_shell("Reset your password", "We'll email you a reset link", body)
}
