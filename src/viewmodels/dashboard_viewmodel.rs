// ============================================================================
// DASHBOARD VIEWMODEL - list reloads and transaction mutations
// ============================================================================
// Every mutation is followed by a full reload; the list is never patched
// locally. Failures go through AppState::handle_error, so a rejected token
// signs the user out no matter which action hit it.
// ============================================================================

use crate::error::AppError;
use crate::models::TransactionStatus;
use crate::state::{AppState, ModalMode};

pub const LOAD_FAILED: &str = "Failed to fetch transactions";
pub const OPEN_FAILED: &str = "Failed to load transaction";
pub const CREATE_FAILED: &str = "Failed to create transaction";
pub const UPDATE_FAILED: &str = "Failed to update transaction";
pub const STATUS_FAILED: &str = "Failed to update status";
pub const DELETE_FAILED: &str = "Failed to delete transaction";

#[derive(Clone)]
pub struct DashboardViewModel {
    state: AppState,
}

impl DashboardViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// GET /transactions. A response overtaken by a newer reload is dropped.
    pub async fn reload(&self) {
        let dashboard = &self.state.dashboard;
        let ticket = dashboard.begin_reload();
        self.state.notify_subscribers();

        let result = self.state.api.list_transactions().await;
        let result = result.map_err(|e| self.state.handle_error(&e, LOAD_FAILED));

        if dashboard.finish_reload(ticket, result) {
            self.state.notify_subscribers();
        }
    }

    pub fn select(&self, id: Option<i64>) {
        self.state.dashboard.select(id);
        self.state.notify_subscribers();
    }

    pub fn set_search_query(&self, query: String) {
        self.state.dashboard.set_search_query(query);
        self.state.notify_subscribers();
    }

    pub fn open_create(&self) {
        self.state.dashboard.open_create();
        self.state.notify_subscribers();
    }

    /// Fetch the latest copy before pre-filling the edit form
    pub async fn open_edit(&self, id: i64) {
        self.begin_action();
        match self.state.api.get_transaction(id).await {
            Ok(tx) => {
                self.state.dashboard.set_busy(false);
                self.state.dashboard.open_edit(&tx);
                self.state.notify_subscribers();
            }
            Err(e) => self.action_failed(&e, OPEN_FAILED),
        }
    }

    pub fn close_modal(&self) {
        self.state.dashboard.close_modal();
        self.state.notify_subscribers();
    }

    /// Submit the modal draft: POST for a new transaction, PUT for an edit
    pub async fn save(&self) -> bool {
        let dashboard = &self.state.dashboard;
        let Some(mode) = dashboard.modal_mode() else {
            return false;
        };
        let fallback = match mode {
            ModalMode::Create => CREATE_FAILED,
            ModalMode::Edit(_) => UPDATE_FAILED,
        };

        let request = match dashboard.draft.borrow().to_request() {
            Ok(request) => request,
            Err(e) => {
                *dashboard.form_error.borrow_mut() = Some(e.to_string());
                self.state.notify_subscribers();
                return false;
            }
        };

        *dashboard.form_error.borrow_mut() = None;
        dashboard.set_busy(true);
        self.state.notify_subscribers();

        let result = match mode {
            ModalMode::Create => self.state.api.create_transaction(&request).await,
            ModalMode::Edit(id) => self.state.api.update_transaction(id, &request).await,
        };
        dashboard.set_busy(false);

        match result {
            Ok(saved) => {
                log::info!("✅ [DASHBOARD] Saved {}", saved.transaction_id);
                dashboard.close_modal();
                if mode == ModalMode::Create {
                    dashboard.select(Some(saved.id));
                }
                self.reload().await;
                true
            }
            Err(e) => {
                let message = self.state.handle_error(&e, fallback);
                // handle_error may have signed out and reset the dashboard
                if self.state.session.is_authenticated() {
                    *dashboard.form_error.borrow_mut() = Some(message);
                }
                self.state.notify_subscribers();
                false
            }
        }
    }

    pub async fn update_status(&self, id: i64, status: TransactionStatus) {
        self.begin_action();
        match self.state.api.update_transaction_status(id, status).await {
            Ok(_) => {
                self.state.dashboard.set_busy(false);
                self.reload().await;
            }
            Err(e) => self.action_failed(&e, STATUS_FAILED),
        }
    }

    /// Caller has already asked the user to confirm
    pub async fn delete(&self, id: i64) {
        self.begin_action();
        match self.state.api.delete_transaction(id).await {
            Ok(()) => {
                self.state.dashboard.set_busy(false);
                self.state.dashboard.select(None);
                self.reload().await;
            }
            Err(e) => self.action_failed(&e, DELETE_FAILED),
        }
    }

    fn begin_action(&self) {
        *self.state.dashboard.action_error.borrow_mut() = None;
        self.state.dashboard.set_busy(true);
        self.state.notify_subscribers();
    }

    fn action_failed(&self, error: &AppError, fallback: &str) {
        self.state.dashboard.set_busy(false);
        let message = self.state.handle_error(error, fallback);
        if self.state.session.is_authenticated() {
            *self.state.dashboard.action_error.borrow_mut() = Some(message);
        }
        self.state.notify_subscribers();
    }
}
