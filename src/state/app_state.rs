// ============================================================================
// APP STATE - the context object every view and viewmodel receives
// ============================================================================
// Owns the session, the API client, the per-screen states and the current
// route. Subscribers are notified after every change; App batches those
// notifications into one re-render.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::AppError;
use crate::services::{ApiClient, HttpTransport};
use crate::state::{AuthState, DashboardState, Route, SessionStore};
use crate::utils::storage::{default_store, KeyValueStore};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub api: ApiClient,
    pub auth: AuthState,
    pub dashboard: DashboardState,
    pub route: Rc<RefCell<Route>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Browser wiring: localStorage (or memory fallback) and fetch
    pub fn new() -> Self {
        let session = SessionStore::hydrate(default_store());
        let api = ApiClient::browser(session.token_source());
        Self::assemble(session, api)
    }

    pub fn with_parts(storage: Rc<dyn KeyValueStore>, transport: Rc<dyn HttpTransport>, base_url: &str) -> Self {
        let session = SessionStore::hydrate(storage);
        let api = ApiClient::new(transport, base_url, session.token_source());
        Self::assemble(session, api)
    }

    fn assemble(session: SessionStore, api: ApiClient) -> Self {
        let route = Route::Login.resolve(session.is_authenticated());
        Self {
            session,
            api,
            auth: AuthState::new(),
            dashboard: DashboardState::new(),
            route: Rc::new(RefCell::new(route)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Go to `route`, or wherever the guard sends it instead
    pub fn navigate(&self, route: Route) -> Route {
        let resolved = route.resolve(self.session.is_authenticated());
        if resolved != *self.route.borrow() {
            log::info!("🧭 [ROUTER] {} → {}", self.route.borrow().to_hash(), resolved.to_hash());
            self.auth.clear_feedback();
            *self.route.borrow_mut() = resolved.clone();
        }
        self.notify_subscribers();
        resolved
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        // clone first: a callback may subscribe or notify again
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Sign out locally and return to the login screen
    pub fn end_session(&self) {
        self.session.logout();
        self.dashboard.reset();
        self.auth.reset();
        self.navigate(Route::Login);
    }

    /// Single funnel for failed operations. A rejected token ends the
    /// session wherever it was detected; the returned text is what the
    /// caller shows inline.
    pub fn handle_error(&self, error: &AppError, fallback: &str) -> String {
        if error.is_unauthorized() {
            log::warn!("🔒 [SESSION] Token rejected by backend, signing out");
            self.end_session();
        } else {
            log::error!("❌ [APP] {}", error);
        }
        error.user_message(fallback)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
