// ============================================================================
// DASHBOARD STATE - transaction list, selection, search and the edit modal
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{Transaction, TransactionStatus};
use crate::state::forms::TransactionForm;

#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Transaction>),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit(i64),
}

/// Header counters; always computed over the full list, not the search result
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Clone)]
pub struct DashboardState {
    pub list: Rc<RefCell<ListState>>,
    latest_ticket: Rc<Cell<u64>>,
    pub selected_id: Rc<RefCell<Option<i64>>>,
    pub search_query: Rc<RefCell<String>>,

    pub modal: Rc<RefCell<Option<ModalMode>>>,
    pub draft: Rc<RefCell<TransactionForm>>,
    pub form_error: Rc<RefCell<Option<String>>>,

    /// A mutation is in flight; action buttons are disabled
    pub busy: Rc<RefCell<bool>>,
    /// Last failed action in the details panel
    pub action_error: Rc<RefCell<Option<String>>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(ListState::Loading)),
            latest_ticket: Rc::new(Cell::new(0)),
            selected_id: Rc::new(RefCell::new(None)),
            search_query: Rc::new(RefCell::new(String::new())),
            modal: Rc::new(RefCell::new(None)),
            draft: Rc::new(RefCell::new(TransactionForm::default())),
            form_error: Rc::new(RefCell::new(None)),
            busy: Rc::new(RefCell::new(false)),
            action_error: Rc::new(RefCell::new(None)),
        }
    }

    // ------------------------------------------------------------------
    // List loading
    // ------------------------------------------------------------------

    /// Start a reload and hand back its ticket
    pub fn begin_reload(&self) -> u64 {
        let ticket = self.latest_ticket.get() + 1;
        self.latest_ticket.set(ticket);
        *self.list.borrow_mut() = ListState::Loading;
        ticket
    }

    /// Apply a reload result. Returns false when a newer reload has started
    /// since `ticket` was issued; the result is then dropped.
    pub fn finish_reload(&self, ticket: u64, result: Result<Vec<Transaction>, String>) -> bool {
        if ticket != self.latest_ticket.get() {
            log::info!("⏭️ [DASHBOARD] Dropping stale list response (ticket {} < {})", ticket, self.latest_ticket.get());
            return false;
        }

        let next = match result {
            Ok(transactions) => {
                log::info!("📋 [DASHBOARD] {} transactions loaded", transactions.len());
                ListState::Loaded(transactions)
            }
            Err(message) => {
                log::warn!("⚠️ [DASHBOARD] List failed: {}", message);
                ListState::Error(message)
            }
        };
        *self.list.borrow_mut() = next;
        self.drop_missing_selection();
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.list.borrow(), ListState::Loading)
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        match &*self.list.borrow() {
            ListState::Loaded(list) => list.clone(),
            _ => Vec::new(),
        }
    }

    /// Transactions matching the search box, in backend order
    pub fn filtered(&self) -> Vec<Transaction> {
        let query = self.search_query.borrow().clone();
        self.transactions()
            .into_iter()
            .filter(|tx| tx.matches_query(&query))
            .collect()
    }

    pub fn counts(&self) -> StatusCounts {
        let list = self.list.borrow();
        let ListState::Loaded(transactions) = &*list else {
            return StatusCounts::default();
        };
        let count = |status: TransactionStatus| transactions.iter().filter(|t| t.status == status).count();
        StatusCounts {
            total: transactions.len(),
            completed: count(TransactionStatus::Completed),
            pending: count(TransactionStatus::Pending),
        }
    }

    pub fn set_search_query(&self, query: String) {
        *self.search_query.borrow_mut() = query;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn select(&self, id: Option<i64>) {
        *self.selected_id.borrow_mut() = id;
        *self.action_error.borrow_mut() = None;
    }

    /// Selected transaction as it appears in the latest list
    pub fn selected(&self) -> Option<Transaction> {
        let id = (*self.selected_id.borrow())?;
        match &*self.list.borrow() {
            ListState::Loaded(list) => list.iter().find(|t| t.id == id).cloned(),
            _ => None,
        }
    }

    fn drop_missing_selection(&self) {
        let Some(id) = *self.selected_id.borrow() else { return };
        let still_listed = match &*self.list.borrow() {
            ListState::Loaded(list) => list.iter().any(|t| t.id == id),
            // keep it while an error is shown; the next good reload decides
            _ => true,
        };
        if !still_listed {
            *self.selected_id.borrow_mut() = None;
        }
    }

    // ------------------------------------------------------------------
    // Modal
    // ------------------------------------------------------------------

    pub fn open_create(&self) {
        *self.draft.borrow_mut() = TransactionForm::default();
        *self.form_error.borrow_mut() = None;
        *self.modal.borrow_mut() = Some(ModalMode::Create);
    }

    pub fn open_edit(&self, tx: &Transaction) {
        *self.draft.borrow_mut() = TransactionForm::from_transaction(tx);
        *self.form_error.borrow_mut() = None;
        *self.modal.borrow_mut() = Some(ModalMode::Edit(tx.id));
    }

    pub fn close_modal(&self) {
        *self.modal.borrow_mut() = None;
        *self.form_error.borrow_mut() = None;
    }

    pub fn modal_mode(&self) -> Option<ModalMode> {
        *self.modal.borrow()
    }

    pub fn set_busy(&self, busy: bool) {
        *self.busy.borrow_mut() = busy;
    }

    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// Back to a fresh dashboard (logout). Bumps the ticket so in-flight
    /// reloads from the old session are ignored.
    pub fn reset(&self) {
        self.latest_ticket.set(self.latest_ticket.get() + 1);
        *self.list.borrow_mut() = ListState::Loading;
        *self.selected_id.borrow_mut() = None;
        self.search_query.borrow_mut().clear();
        *self.modal.borrow_mut() = None;
        *self.draft.borrow_mut() = TransactionForm::default();
        *self.form_error.borrow_mut() = None;
        *self.busy.borrow_mut() = false;
        *self.action_error.borrow_mut() = None;
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
