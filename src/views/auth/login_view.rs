// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{error_banner, input_field, route_link, submit_button};

use super::auth_shell;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let auth = &state.auth;
    let draft = auth.login.borrow().clone();
    let busy = auth.is_submitting();

    let username = {
        let login = auth.login.clone();
        input_field("Username", "text", "login-username", &draft.username, move |value| {
            login.borrow_mut().username = value;
        })?
    };
    let password = {
        let login = auth.login.clone();
        input_field("Password", "password", "login-password", &draft.password, move |value| {
            login.borrow_mut().password = value;
        })?
    };

    let forgot = ElementBuilder::new("div")?
        .class("auth-aside")
        .child(route_link("Forgot password?", &Route::ForgotPassword.to_hash())?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .child(error_banner(auth.error.borrow().as_deref())?)?
        .child(username)?
        .child(password)?
        .child(forgot)?
        .child(submit_button("Sign in", "Signing in...", busy)?)?
        .build();

    {
        let state = state.clone();
        on_submit(&form, move || {
            if state.auth.is_submitting() {
                return;
            }
            let vm = SessionViewModel::new(state.clone());
            spawn_local(async move {
                vm.login().await;
            });
        })?;
    }

    let footer = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Don't have an account? ")
        .child(route_link("Create one", &Route::Register.to_hash())?)?
        .build();

    let body = ElementBuilder::new("div")?
        .child(form)?
        .child(footer)?
        .build();

    auth_shell("Welcome back", "Sign in to manage your transactions", body)
}
