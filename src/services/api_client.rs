// ============================================================================
// API CLIENT - typed REST calls (stateless apart from reading the token)
// ============================================================================
// No business logic and no navigation. A 401 on a protected endpoint comes
// back as AppError::Unauthorized; AppState::handle_error reacts to it.
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::models::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest, StatusUpdateRequest, Transaction, TransactionRequest, TransactionStatus,
};
use crate::services::transport::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, Method};

/// Reads the current bearer token at request time
pub type TokenSource = Rc<dyn Fn() -> Option<String>>;

/// What a 401 means depends on where it came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    /// /auth/*: bad credentials or bad reset token
    Auth,
    /// everything else: the bearer token was rejected
    Protected,
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    base_url: String,
    token_source: TokenSource,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn HttpTransport>, base_url: impl Into<String>, token_source: TokenSource) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_source,
        }
    }

    /// Client wired to the browser fetch API and the configured backend
    pub fn browser(token_source: TokenSource) -> Self {
        Self::new(Rc::new(GlooTransport::new()), CONFIG.api_url(), token_source)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        log::info!("🔐 [API] Login for user: {}", request.username);
        self.send_json(Method::Post, "/auth/login", Some(request), Scope::Auth).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse> {
        log::info!("📝 [API] Registering user: {}", request.username);
        self.send_json(Method::Post, "/auth/register", Some(request), Scope::Auth).await
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> AppResult<MessageResponse> {
        log::info!("📧 [API] Password reset requested");
        let response = self.execute(Method::Post, "/auth/forgot-password", Some(to_body(request)?), Scope::Auth).await?;
        Ok(decode_or_default(&response))
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> AppResult<MessageResponse> {
        log::info!("🔑 [API] Resetting password");
        let response = self.execute(Method::Post, "/auth/reset-password", Some(to_body(request)?), Scope::Auth).await?;
        Ok(decode_or_default(&response))
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    pub async fn list_transactions(&self) -> AppResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> = self
            .send_json(Method::Get, "/transactions", None::<&()>, Scope::Protected)
            .await?;
        log::info!("✅ [API] {} transactions received", transactions.len());
        Ok(transactions)
    }

    pub async fn get_transaction(&self, id: i64) -> AppResult<Transaction> {
        let path = format!("/transactions/{}", id);
        self.send_json(Method::Get, &path, None::<&()>, Scope::Protected).await
    }

    pub async fn create_transaction(&self, request: &TransactionRequest) -> AppResult<Transaction> {
        log::info!("📦 [API] Creating transaction: {} ({} → {})", request.product_name, request.seller_company, request.buyer_company);
        let created: Transaction = self
            .send_json(Method::Post, "/transactions", Some(request), Scope::Protected)
            .await?;
        log::info!("✅ [API] Transaction created: {}", created.transaction_id);
        Ok(created)
    }

    pub async fn update_transaction(&self, id: i64, request: &TransactionRequest) -> AppResult<Transaction> {
        log::info!("📝 [API] Updating transaction {}", id);
        let path = format!("/transactions/{}", id);
        self.send_json(Method::Put, &path, Some(request), Scope::Protected).await
    }

    pub async fn update_transaction_status(&self, id: i64, status: TransactionStatus) -> AppResult<Transaction> {
        log::info!("🔄 [API] Transaction {} → {}", id, status);
        let path = format!("/transactions/{}/status", id);
        let body = StatusUpdateRequest { status };
        self.send_json(Method::Patch, &path, Some(&body), Scope::Protected).await
    }

    pub async fn delete_transaction(&self, id: i64) -> AppResult<()> {
        log::info!("🗑️ [API] Deleting transaction {}", id);
        let path = format!("/transactions/{}", id);
        self.execute(Method::Delete, &path, None, Scope::Protected).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    async fn send_json<B, R>(&self, method: Method, path: &str, body: Option<&B>, scope: Scope) -> AppResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = match body {
            Some(b) => Some(to_body(b)?),
            None => None,
        };
        let response = self.execute(method, path, body, scope).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("❌ [API] {} {}: unexpected body: {}", method.as_str(), path, e);
            AppError::Decode(e.to_string())
        })
    }

    async fn execute(&self, method: Method, path: &str, body: Option<String>, scope: Scope) -> AppResult<HttpResponse> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = HttpRequest::new(method, url).with_header("Accept", "application/json");

        if let Some(token) = (self.token_source)() {
            request = request.with_header("Authorization", &format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] {} {}: {}", method.as_str(), path, e);
            e
        })?;

        if response.ok() {
            return Ok(response);
        }

        let error = classify_failure(scope, &response);
        log::warn!("⚠️ [API] {} {} → HTTP {} ({})", method.as_str(), path, response.status, error);
        Err(error)
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> AppResult<String> {
    serde_json::to_string(body).map_err(|e| AppError::Decode(format!("Serialization error: {}", e)))
}

fn decode_or_default(response: &HttpResponse) -> MessageResponse {
    serde_json::from_str(&response.body).unwrap_or_default()
}

/// `message`, then `error`, from a JSON error body
fn backend_message(body: &str) -> Option<String> {
    let parsed: MessageResponse = serde_json::from_str(body).ok()?;
    parsed
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn classify_failure(scope: Scope, response: &HttpResponse) -> AppError {
    let message = backend_message(&response.body);
    match (response.status, scope) {
        (401, Scope::Auth) => AppError::InvalidCredentials { message },
        (401, Scope::Protected) => AppError::Unauthorized,
        (status, _) => AppError::Backend { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeBackend;
    use futures::executor::block_on;
    use rust_decimal::Decimal;
    use std::cell::RefCell;
    use std::str::FromStr;

    fn client_with_token(backend: &FakeBackend, token: Option<&str>) -> ApiClient {
        let token = Rc::new(RefCell::new(token.map(str::to_string)));
        let source: TokenSource = Rc::new(move || token.borrow().clone());
        ApiClient::new(Rc::new(backend.clone()), "http://backend.test/api/", source)
    }

    fn sample_request() -> TransactionRequest {
        TransactionRequest {
            buyer_company: "Acme Corp".into(),
            seller_company: "Global Supplies Inc".into(),
            product_name: "Industrial Equipment".into(),
            product_description: None,
            quantity: 100,
            unit_price: Decimal::from_str("99.99").unwrap(),
            currency: "USD".into(),
            payment_terms: None,
            delivery_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_bearer_header_attached_when_token_present() {
        let backend = FakeBackend::new();
        let token = backend.issue_token("jdoe");
        let client = client_with_token(&backend, Some(&token));

        block_on(client.list_transactions()).unwrap();

        let request = backend.last_request().unwrap();
        assert_eq!(request.url, "http://backend.test/api/transactions");
        assert_eq!(request.header("Authorization"), Some(format!("Bearer {}", token).as_str()));
    }

    #[test]
    fn test_no_auth_header_without_token() {
        let backend = FakeBackend::new();
        backend.add_user("jdoe", "secret123");
        let client = client_with_token(&backend, None);

        block_on(client.login(&LoginRequest { username: "jdoe".into(), password: "secret123".into() })).unwrap();

        let request = backend.last_request().unwrap();
        assert!(request.header("Authorization").is_none());
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_protected_401_is_unauthorized() {
        let backend = FakeBackend::new();
        let client = client_with_token(&backend, Some("expired-token"));

        let err = block_on(client.list_transactions()).unwrap_err();
        assert_eq!(err, AppError::Unauthorized);
    }

    #[test]
    fn test_login_401_is_invalid_credentials() {
        let backend = FakeBackend::new();
        backend.add_user("jdoe", "secret123");
        let client = client_with_token(&backend, None);

        let err = block_on(client.login(&LoginRequest { username: "jdoe".into(), password: "wrong".into() })).unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials { .. }));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_status_patch_body_and_path() {
        let backend = FakeBackend::new();
        let token = backend.issue_token("jdoe");
        let client = client_with_token(&backend, Some(&token));
        let created = block_on(client.create_transaction(&sample_request())).unwrap();

        let updated = block_on(client.update_transaction_status(created.id, TransactionStatus::Approved)).unwrap();

        assert_eq!(updated.status, TransactionStatus::Approved);
        let request = backend.last_request().unwrap();
        assert_eq!(request.method, Method::Patch);
        assert!(request.url.ends_with(&format!("/transactions/{}/status", created.id)));
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"APPROVED"}"#));
    }

    #[test]
    fn test_backend_error_message_extracted() {
        let response = HttpResponse { status: 400, body: r#"{"message":"Quantity must be positive"}"#.into() };
        assert_eq!(
            classify_failure(Scope::Protected, &response),
            AppError::Backend { status: 400, message: Some("Quantity must be positive".into()) }
        );

        let response = HttpResponse { status: 400, body: String::new() };
        assert_eq!(classify_failure(Scope::Auth, &response), AppError::Backend { status: 400, message: None });
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let backend = FakeBackend::new();
        let token = backend.issue_token("jdoe");
        let client = client_with_token(&backend, Some(&token));
        let created = block_on(client.create_transaction(&sample_request())).unwrap();

        block_on(client.delete_transaction(created.id)).unwrap();

        let err = block_on(client.get_transaction(created.id)).unwrap_err();
        assert!(matches!(err, AppError::Backend { status: 404, .. }));
    }
}
