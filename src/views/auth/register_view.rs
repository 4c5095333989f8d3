// ============================================================================
// REGISTER VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_submit, ElementBuilder};
use crate::state::{AppState, RegisterForm, Route};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{error_banner, input_field, route_link, submit_button};

use super::auth_shell;

type Setter = fn(&mut RegisterForm, String);

fn field(
    form: &Rc<RefCell<RegisterForm>>,
    label: &str,
    input_type: &str,
    id: &str,
    value: &str,
    set: Setter,
) -> Result<Element, JsValue> {
    let form = form.clone();
    input_field(label, input_type, id, value, move |text| set(&mut form.borrow_mut(), text))
}

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let auth = &state.auth;
    let cell = &auth.register;
    let draft = cell.borrow().clone();
    let busy = auth.is_submitting();

    let names = ElementBuilder::new("div")?
        .class("form-row")
        .child(field(cell, "First name", "text", "register-first-name", &draft.first_name, |f, v| f.first_name = v)?)?
        .child(field(cell, "Last name", "text", "register-last-name", &draft.last_name, |f, v| f.last_name = v)?)?
        .build();

    let passwords = ElementBuilder::new("div")?
        .class("form-row")
        .child(field(cell, "Password", "password", "register-password", &draft.password, |f, v| f.password = v)?)?
        .child(field(cell, "Confirm password", "password", "register-confirm", &draft.confirm_password, |f, v| f.confirm_password = v)?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .attr("novalidate", "")?
        .child(error_banner(auth.error.borrow().as_deref())?)?
        .child(names)?
        .child(field(cell, "Username", "text", "register-username", &draft.username, |f, v| f.username = v)?)?
        .child(field(cell, "Email", "email", "register-email", &draft.email, |f, v| f.email = v)?)?
        .child(field(cell, "Company (optional)", "text", "register-company", &draft.company_name, |f, v| f.company_name = v)?)?
        .child(field(cell, "Phone (optional)", "tel", "register-phone", &draft.phone_number, |f, v| f.phone_number = v)?)?
        .child(passwords)?
        .child(submit_button("Create account", "Creating account...", busy)?)?
        .build();

    {
        let state = state.clone();
        on_submit(&form, move || {
            if state.auth.is_submitting() {
                return;
            }
            let vm = SessionViewModel::new(state.clone());
            spawn_local(async move {
                vm.register().await;
            });
        })?;
    }

    let footer = ElementBuilder::new("p")?
        .class("auth-switch")
        .text("Already have an account? ")
        .child(route_link("Sign in", &Route::Login.to_hash())?)?
        .build();

    let body = ElementBuilder::new("div")?.child(form)?.child(footer)?.build();

    auth_shell("Create your account", "Start managing B2B transactions", body)
}
