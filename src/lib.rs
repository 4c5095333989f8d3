// ============================================================================
// B2B PORTAL - WEB CLIENT (PURE RUST + MVVM)
// ============================================================================
// - Views: functions that build DOM from state (no logic)
// - ViewModels: user flows, write results into state
// - Services: HTTP only
// - State: Rc<RefCell> cells + change subscribers
// - Models: DTOs shared with the backend
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Some(level) = CONFIG.log_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 B2B Portal ({}) → {}", CONFIG.environment, CONFIG.api_url());
    if !CONFIG.is_production() {
        log::debug!("🔧 [CONFIG] {:?}", *CONFIG);
    }

    let app = App::new()?;
    app.start();
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Registered once; back/forward and link clicks all arrive here
    dom::on_window("hashchange", || {
        APP.with(|cell| {
            if let Some(app) = cell.borrow().as_ref() {
                app.follow_hash();
            }
        });
    })?;

    Ok(())
}

/// Full re-render of the current route
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RENDER] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RENDER] App not initialised"),
    });
}
