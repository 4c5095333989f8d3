// ============================================================================
// AUTH SCREENS STATE - drafts and inline feedback for the signed-out screens
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::forms::{ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm};

#[derive(Clone)]
pub struct AuthState {
    pub login: Rc<RefCell<LoginForm>>,
    pub register: Rc<RefCell<RegisterForm>>,
    pub forgot: Rc<RefCell<ForgotPasswordForm>>,
    pub reset: Rc<RefCell<ResetPasswordForm>>,

    /// Inline error under the current form
    pub error: Rc<RefCell<Option<String>>>,
    /// Confirmation text (forgot/reset password)
    pub notice: Rc<RefCell<Option<String>>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            login: Rc::new(RefCell::new(LoginForm::default())),
            register: Rc::new(RefCell::new(RegisterForm::default())),
            forgot: Rc::new(RefCell::new(ForgotPasswordForm::default())),
            reset: Rc::new(RefCell::new(ResetPasswordForm::default())),
            error: Rc::new(RefCell::new(None)),
            notice: Rc::new(RefCell::new(None)),
            submitting: Rc::new(RefCell::new(false)),
        }
    }

    pub fn set_error(&self, message: Option<String>) {
        *self.error.borrow_mut() = message;
    }

    pub fn set_notice(&self, message: Option<String>) {
        *self.notice.borrow_mut() = message;
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.submitting.borrow_mut() = submitting;
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    /// Drop feedback when moving between screens
    pub fn clear_feedback(&self) {
        self.set_error(None);
        self.set_notice(None);
    }

    /// Forget everything typed so far, passwords included
    pub fn reset(&self) {
        *self.login.borrow_mut() = LoginForm::default();
        *self.register.borrow_mut() = RegisterForm::default();
        *self.forgot.borrow_mut() = ForgotPasswordForm::default();
        *self.reset.borrow_mut() = ResetPasswordForm::default();
        self.clear_feedback();
        self.set_submitting(false);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
