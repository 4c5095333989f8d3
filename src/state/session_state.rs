// ============================================================================
// SESSION STORE - authenticated user + token, mirrored in durable storage
// ============================================================================
// Only this type mutates the session. Writes go to storage first and to
// memory second, so the two never disagree: if storage fails, memory keeps
// its previous value.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{AppError, AppResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::services::{ApiClient, TokenSource};
use crate::utils::constants::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::utils::storage::{load_json, save_json, KeyValueStore};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Clone)]
pub struct SessionStore {
    session: Rc<RefCell<Option<Session>>>,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Restore whatever a previous page load left in storage
    pub fn hydrate(storage: Rc<dyn KeyValueStore>) -> Self {
        let token = storage.get(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty());
        let user = load_json::<User>(storage.as_ref(), USER_STORAGE_KEY);

        let session = match (token, user) {
            (Some(token), Some(user)) => {
                log::info!("💾 [SESSION] Restored session for {}", user.username);
                Some(Session { user, token })
            }
            (None, None) if storage.get(USER_STORAGE_KEY).is_none() => {
                log::info!("ℹ️ [SESSION] No stored session");
                None
            }
            _ => {
                log::warn!("⚠️ [SESSION] Incomplete session in storage, purging");
                purge(storage.as_ref());
                None
            }
        };

        Self {
            session: Rc::new(RefCell::new(session)),
            storage,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn snapshot(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Handle for ApiClient to read the token on every request
    pub fn token_source(&self) -> TokenSource {
        let session = self.session.clone();
        Rc::new(move || session.borrow().as_ref().map(|s| s.token.clone()))
    }

    /// POST /auth/login; prior state is untouched on failure
    pub async fn login(&self, api: &ApiClient, credentials: &LoginRequest) -> AppResult<User> {
        let response = api.login(credentials).await?;
        self.establish(response)
    }

    /// POST /auth/register; same contract as login
    pub async fn register(&self, api: &ApiClient, profile: &RegisterRequest) -> AppResult<User> {
        let response = api.register(profile).await?;
        self.establish(response)
    }

    /// Drop the session everywhere. Never fails from the caller's view.
    pub fn logout(&self) {
        purge(self.storage.as_ref());
        *self.session.borrow_mut() = None;
        log::info!("👋 [SESSION] Logged out");
    }

    fn establish(&self, response: AuthResponse) -> AppResult<User> {
        let (token, user) = response.into_parts();
        if token.is_empty() {
            return Err(AppError::Decode("empty token in auth response".to_string()));
        }

        let written = self
            .storage
            .set(TOKEN_STORAGE_KEY, &token)
            .and_then(|_| save_json(self.storage.as_ref(), USER_STORAGE_KEY, &user));

        if let Err(e) = written {
            log::error!("❌ [SESSION] Could not persist session: {}", e);
            self.restore_previous();
            return Err(e);
        }

        log::info!("✅ [SESSION] Signed in as {}", user.username);
        *self.session.borrow_mut() = Some(Session { user: user.clone(), token });
        Ok(user)
    }

    /// Put storage back to what memory still holds after a failed write
    fn restore_previous(&self) {
        match self.snapshot() {
            Some(previous) => {
                let _ = self.storage.set(TOKEN_STORAGE_KEY, &previous.token);
                let _ = save_json(self.storage.as_ref(), USER_STORAGE_KEY, &previous.user);
            }
            None => purge(self.storage.as_ref()),
        }
    }
}

fn purge(storage: &dyn KeyValueStore) {
    for key in [TOKEN_STORAGE_KEY, USER_STORAGE_KEY] {
        if let Err(e) = storage.remove(key) {
            log::error!("❌ [SESSION] Could not remove '{}': {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeBackend;
    use crate::utils::storage::MemoryStorage;
    use futures::executor::block_on;

    /// Storage that rejects writes to one key
    struct BrokenStorage {
        inner: MemoryStorage,
        failing_key: &'static str,
    }

    impl KeyValueStore for BrokenStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            if key == self.failing_key {
                return Err(AppError::Storage("quota exceeded".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> AppResult<()> {
            self.inner.remove(key)
        }
    }

    fn setup() -> (FakeBackend, MemoryStorage, SessionStore, ApiClient) {
        let backend = FakeBackend::new();
        backend.add_user("jdoe", "secret123");
        let storage = MemoryStorage::new();
        let store = SessionStore::hydrate(Rc::new(storage.clone()));
        let api = ApiClient::new(Rc::new(backend.clone()), "http://backend.test/api", store.token_source());
        (backend, storage, store, api)
    }

    fn credentials(password: &str) -> LoginRequest {
        LoginRequest { username: "jdoe".into(), password: password.into() }
    }

    #[test]
    fn test_login_writes_memory_and_storage() {
        let (_backend, storage, store, api) = setup();

        let user = block_on(store.login(&api, &credentials("secret123"))).unwrap();

        assert!(store.is_authenticated());
        let token = store.token().unwrap();
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), Some(token));
        let persisted: User = load_json(&storage, USER_STORAGE_KEY).unwrap();
        assert_eq!(persisted, user);
        assert_eq!(store.user(), Some(user));
    }

    #[test]
    fn test_failed_login_keeps_previous_session() {
        let (_backend, storage, store, api) = setup();
        block_on(store.login(&api, &credentials("secret123"))).unwrap();
        let before = store.snapshot();
        let stored_token = storage.get(TOKEN_STORAGE_KEY);

        let err = block_on(store.login(&api, &credentials("nope"))).unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials { .. }));
        assert_eq!(store.snapshot(), before);
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), stored_token);
    }

    #[test]
    fn test_logout_clears_everything() {
        let (_backend, storage, store, api) = setup();
        block_on(store.login(&api, &credentials("secret123"))).unwrap();

        store.logout();

        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_hydrate_restores_previous_login() {
        let (_backend, storage, store, api) = setup();
        block_on(store.login(&api, &credentials("secret123"))).unwrap();

        let reloaded = SessionStore::hydrate(Rc::new(storage.clone()));

        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }

    #[test]
    fn test_hydrate_purges_half_written_session() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_STORAGE_KEY, "orphan-token").unwrap();

        let store = SessionStore::hydrate(Rc::new(storage.clone()));

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_storage_failure_leaves_memory_untouched() {
        let backend = FakeBackend::new();
        backend.add_user("jdoe", "secret123");
        let inner = MemoryStorage::new();
        let storage = Rc::new(BrokenStorage { inner: inner.clone(), failing_key: USER_STORAGE_KEY });
        let store = SessionStore::hydrate(storage);
        let api = ApiClient::new(Rc::new(backend), "http://backend.test/api", store.token_source());

        let err = block_on(store.login(&api, &credentials("secret123"))).unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert!(!store.is_authenticated());
        assert!(inner.is_empty());
    }

    #[test]
    fn test_register_signs_in() {
        let (backend, storage, store, api) = setup();
        let profile = RegisterRequest {
            username: "asmith".into(),
            email: "asmith@acme.test".into(),
            password: "hunter22".into(),
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            phone_number: None,
            company_name: None,
        };

        let user = block_on(store.register(&api, &profile)).unwrap();

        assert_eq!(user.username, "asmith");
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), store.token());
        assert_eq!(backend.request_count(), 1);
    }
}
