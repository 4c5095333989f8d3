// Left rail: brand, navigation, signed-in user, logout

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_element, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{DashboardViewModel, SessionViewModel};
use crate::views::shared::{button, legal_footer, route_link};

pub fn render_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let new_button = button("btn btn-primary sidebar-new", "+ New", state.dashboard.is_busy())?;
    {
        let vm = DashboardViewModel::new(state.clone());
        on_click(&new_button, move |_| vm.open_create())?;
    }

    let nav = ElementBuilder::new("nav")?
        .class("sidebar-nav")
        .child(
            ElementBuilder::new("a")?
                .class("sidebar-link active")
                .attr("href", &Route::Dashboard.to_hash())?
                .text("Dashboard")
                .build(),
        )?
        .child(new_button)?
        .build();

    let mut user_box = ElementBuilder::new("div")?.class("sidebar-user");
    if let Some(user) = state.session.user() {
        user_box = user_box.child(text_element("p", "sidebar-user-name", &user.display_name())?)?;
        if let Some(company) = user.company_name.as_deref() {
            user_box = user_box.child(text_element("p", "sidebar-user-company", company)?)?;
        }
        user_box = user_box.child(text_element("p", "sidebar-user-email", &user.email)?)?;
    }

    let logout = button("btn btn-ghost sidebar-logout", "Logout", false)?;
    {
        let vm = SessionViewModel::new(state.clone());
        on_click(&logout, move |_| vm.logout())?;
    }

    Ok(ElementBuilder::new("aside")?
        .class("sidebar")
        .child(
            ElementBuilder::new("div")?
                .class("sidebar-brand")
                .child(route_link("B2B Portal", &Route::Dashboard.to_hash())?)?
                .build(),
        )?
        .child(nav)?
        .child(user_box.build())?
        .child(logout)?
        .child(legal_footer()?)?
        .build())
}
