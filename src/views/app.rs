// ============================================================================
// APP VIEW - picks the screen for the current route
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::{AppState, Route};
use crate::views::auth::{render_forgot_password, render_login, render_register, render_reset_password};
use crate::views::dashboard::render_dashboard;
use crate::views::legal::{render_legal, LegalPage};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    // the guard already ran in navigate(); this only picks the screen
    match state.current_route() {
        Route::Login => render_login(state),
        Route::Register => render_register(state),
        Route::ForgotPassword => render_forgot_password(state),
        Route::ResetPassword { token } => render_reset_password(state, &token),
        Route::Dashboard => render_dashboard(state),
        Route::Privacy => render_legal(state, LegalPage::Privacy),
        Route::Terms => render_legal(state, LegalPage::Terms),
        Route::Security => render_legal(state, LegalPage::Security),
    }
}
