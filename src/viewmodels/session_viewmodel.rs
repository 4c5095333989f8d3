// ============================================================================
// SESSION VIEWMODEL - sign in, sign up, password recovery, sign out
// ============================================================================
// Reads the drafts in AuthState, runs local validation, calls the backend
// and writes the outcome back into state. Views only spawn these futures.
// ============================================================================

use crate::state::{AppState, Route};
use crate::viewmodels::DashboardViewModel;

pub const LOGIN_FAILED: &str = "Invalid username or password";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const RESET_REQUEST_FAILED: &str = "Could not send reset instructions";
pub const RESET_FAILED: &str = "Could not reset password";

const RESET_REQUEST_SENT: &str = "If an account exists for this email, reset instructions are on their way.";
const RESET_DONE: &str = "Password updated. You can sign in now.";

#[derive(Clone)]
pub struct SessionViewModel {
    state: AppState,
}

impl SessionViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Returns true when the user ended up signed in
    pub async fn login(&self) -> bool {
        let auth = &self.state.auth;
        let request = match auth.login.borrow().to_request() {
            Ok(request) => request,
            Err(e) => return self.fail(e.to_string()),
        };

        self.begin();
        let result = self.state.session.login(&self.state.api, &request).await;
        self.state.auth.set_submitting(false);

        match result {
            Ok(_) => {
                self.enter_dashboard().await;
                true
            }
            Err(e) => {
                // keep the username, drop the password
                auth.login.borrow_mut().password.clear();
                let message = self.state.handle_error(&e, LOGIN_FAILED);
                self.fail(message)
            }
        }
    }

    pub async fn register(&self) -> bool {
        // a mismatch stops here, before any request
        let request = match self.state.auth.register.borrow().to_request() {
            Ok(request) => request,
            Err(e) => return self.fail(e.to_string()),
        };

        self.begin();
        let result = self.state.session.register(&self.state.api, &request).await;
        self.state.auth.set_submitting(false);

        match result {
            Ok(_) => {
                self.enter_dashboard().await;
                true
            }
            Err(e) => {
                let message = self.state.handle_error(&e, REGISTRATION_FAILED);
                self.fail(message)
            }
        }
    }

    pub async fn forgot_password(&self) -> bool {
        let request = match self.state.auth.forgot.borrow().to_request() {
            Ok(request) => request,
            Err(e) => return self.fail(e.to_string()),
        };

        self.begin();
        let result = self.state.api.forgot_password(&request).await;
        self.state.auth.set_submitting(false);

        match result {
            Ok(response) => {
                let text = response.text().unwrap_or(RESET_REQUEST_SENT).to_string();
                self.succeed(text);
                true
            }
            Err(e) => {
                let message = self.state.handle_error(&e, RESET_REQUEST_FAILED);
                self.fail(message)
            }
        }
    }

    pub async fn reset_password(&self) -> bool {
        let token = match self.state.current_route() {
            Route::ResetPassword { token } => token,
            _ => String::new(),
        };
        let request = match self.state.auth.reset.borrow().to_request(&token) {
            Ok(request) => request,
            Err(e) => return self.fail(e.to_string()),
        };

        self.begin();
        let result = self.state.api.reset_password(&request).await;
        self.state.auth.set_submitting(false);

        match result {
            Ok(response) => {
                *self.state.auth.reset.borrow_mut() = Default::default();
                let text = response.message.unwrap_or_else(|| RESET_DONE.to_string());
                self.succeed(text);
                true
            }
            Err(e) => {
                let message = self.state.handle_error(&e, RESET_FAILED);
                self.fail(message)
            }
        }
    }

    pub fn logout(&self) {
        self.state.end_session();
    }

    async fn enter_dashboard(&self) {
        self.state.auth.reset();
        self.state.navigate(Route::Dashboard);
        DashboardViewModel::new(self.state.clone()).reload().await;
    }

    fn begin(&self) {
        self.state.auth.clear_feedback();
        self.state.auth.set_submitting(true);
        self.state.notify_subscribers();
    }

    fn succeed(&self, notice: String) {
        self.state.auth.set_error(None);
        self.state.auth.set_notice(Some(notice));
        self.state.notify_subscribers();
    }

    fn fail(&self, message: String) -> bool {
        self.state.auth.set_notice(None);
        self.state.auth.set_error(Some(message));
        self.state.notify_subscribers();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeBackend;
    use crate::state::{ListState, LoginForm, RegisterForm, ResetPasswordForm};
    use crate::utils::constants::TOKEN_STORAGE_KEY;
    use crate::utils::storage::{KeyValueStore, MemoryStorage};
    use futures::executor::block_on;
    use std::rc::Rc;

    fn setup() -> (FakeBackend, MemoryStorage, AppState, SessionViewModel) {
        let backend = FakeBackend::new();
        backend.add_user("jdoe", "secret123");
        let storage = MemoryStorage::new();
        let state = AppState::with_parts(Rc::new(storage.clone()), Rc::new(backend.clone()), "http://backend.test/api");
        let vm = SessionViewModel::new(state.clone());
        (backend, storage, state, vm)
    }

    fn register_form(confirm: &str) -> RegisterForm {
        RegisterForm {
            username: "asmith".into(),
            email: "asmith@acme.test".into(),
            password: "hunter22".into(),
            confirm_password: confirm.into(),
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn test_login_lands_on_loaded_dashboard() {
        let (_backend, storage, state, vm) = setup();
        *state.auth.login.borrow_mut() = LoginForm { username: "jdoe".into(), password: "secret123".into() };

        assert!(block_on(vm.login()));

        assert_eq!(state.current_route(), Route::Dashboard);
        assert_eq!(*state.dashboard.list.borrow(), ListState::Loaded(vec![]));
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), state.session.token());
        assert_eq!(*state.auth.login.borrow(), LoginForm::default());
    }

    #[test]
    fn test_bad_credentials_show_fallback_inline() {
        let (_backend, _storage, state, vm) = setup();
        *state.auth.login.borrow_mut() = LoginForm { username: "jdoe".into(), password: "wrong".into() };

        assert!(!block_on(vm.login()));

        assert_eq!(state.auth.error.borrow().as_deref(), Some(LOGIN_FAILED));
        assert_eq!(state.current_route(), Route::Login);
        assert_eq!(state.auth.login.borrow().username, "jdoe");
        assert!(state.auth.login.borrow().password.is_empty());
        assert!(!state.auth.is_submitting());
    }

    #[test]
    fn test_register_mismatch_sends_nothing() {
        let (backend, _storage, state, vm) = setup();
        state.navigate(Route::Register);
        *state.auth.register.borrow_mut() = register_form("hunter23");

        assert!(!block_on(vm.register()));

        assert_eq!(backend.request_count(), 0);
        assert_eq!(state.auth.error.borrow().as_deref(), Some("Passwords do not match"));
        assert_eq!(state.current_route(), Route::Register);
    }

    #[test]
    fn test_register_duplicate_shows_backend_message() {
        let (_backend, _storage, state, vm) = setup();
        *state.auth.register.borrow_mut() = RegisterForm { username: "jdoe".into(), ..register_form("hunter22") };

        assert!(!block_on(vm.register()));

        assert_eq!(state.auth.error.borrow().as_deref(), Some("Username is already taken!"));
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn test_register_signs_in() {
        let (_backend, _storage, state, vm) = setup();
        *state.auth.register.borrow_mut() = register_form("hunter22");

        assert!(block_on(vm.register()));

        assert_eq!(state.session.user().map(|u| u.username), Some("asmith".to_string()));
        assert_eq!(state.current_route(), Route::Dashboard);
    }

    #[test]
    fn test_forgot_password_shows_backend_confirmation() {
        let (_backend, _storage, state, vm) = setup();
        state.auth.forgot.borrow_mut().email = "jdoe@acme.test".into();

        assert!(block_on(vm.forgot_password()));

        assert_eq!(
            state.auth.notice.borrow().as_deref(),
            Some("Password reset instructions sent to your email")
        );
        assert!(state.auth.error.borrow().is_none());
    }

    #[test]
    fn test_reset_password_uses_route_token() {
        let (_backend, _storage, state, vm) = setup();
        let form = ResetPasswordForm { password: "n3w-pass".into(), confirm_password: "n3w-pass".into() };

        state.navigate(Route::ResetPassword { token: "expired".into() });
        *state.auth.reset.borrow_mut() = form.clone();
        assert!(!block_on(vm.reset_password()));
        assert_eq!(state.auth.error.borrow().as_deref(), Some("Invalid or expired reset token"));

        state.navigate(Route::ResetPassword { token: "reset-ok".into() });
        *state.auth.reset.borrow_mut() = form;
        assert!(block_on(vm.reset_password()));
        assert_eq!(state.auth.notice.borrow().as_deref(), Some("Password reset successfully"));
    }

    #[test]
    fn test_logout_clears_session_and_dashboard() {
        let (_backend, storage, state, vm) = setup();
        *state.auth.login.borrow_mut() = LoginForm { username: "jdoe".into(), password: "secret123".into() };
        block_on(vm.login());
        state.dashboard.select(Some(3));

        vm.logout();

        assert!(!state.session.is_authenticated());
        assert!(storage.is_empty());
        assert_eq!(state.current_route(), Route::Login);
        assert_eq!(*state.dashboard.selected_id.borrow(), None);
    }
}
