// In-memory stand-in for the REST backend, used by unit tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::error::AppResult;
use crate::models::{
    AuthResponse, LoginRequest, RegisterRequest, StatusUpdateRequest, Transaction, TransactionRequest,
    TransactionStatus,
};
use crate::services::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

#[derive(Default)]
struct Inner {
    users: HashMap<String, String>,
    tokens: HashMap<String, String>,
    transactions: Vec<Transaction>,
    next_id: i64,
    requests: Vec<HttpRequest>,
    injected: VecDeque<HttpResponse>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Rc<RefCell<Inner>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, username: &str, password: &str) {
        self.inner.borrow_mut().users.insert(username.to_string(), password.to_string());
    }

    pub fn issue_token(&self, username: &str) -> String {
        let mut inner = self.inner.borrow_mut();
        let token = format!("token-{}-{}", username, inner.tokens.len() + 1);
        inner.tokens.insert(token.clone(), username.to_string());
        token
    }

    /// Every issued token starts failing with 401
    pub fn revoke_tokens(&self) {
        self.inner.borrow_mut().tokens.clear();
    }

    /// Next request gets this response regardless of route
    pub fn inject(&self, status: u16, body: &str) {
        self.inner.borrow_mut().injected.push_back(HttpResponse { status, body: body.to_string() });
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.borrow().requests.last().cloned()
    }

    pub fn transaction_count(&self) -> usize {
        self.inner.borrow().transactions.len()
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let path = route_path(&request.url);

        if let Some(rest) = path.strip_prefix("/auth/") {
            return self.handle_auth(request.method, rest, request.body.as_deref().unwrap_or(""));
        }

        let authorized = request
            .header("Authorization")
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| self.inner.borrow().tokens.contains_key(token))
            .unwrap_or(false);
        if !authorized {
            return respond(401, "");
        }

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let body = request.body.as_deref().unwrap_or("");
        match (request.method, segments.as_slice()) {
            (Method::Get, ["transactions"]) => {
                let inner = self.inner.borrow();
                respond_json(200, &inner.transactions)
            }
            (Method::Post, ["transactions"]) => match parse::<TransactionRequest>(body) {
                Some(req) => {
                    let mut inner = self.inner.borrow_mut();
                    inner.next_id += 1;
                    let id = inner.next_id;
                    let tx = build_transaction(id, &req);
                    inner.transactions.push(tx.clone());
                    respond_json(201, &tx)
                }
                None => respond(400, ""),
            },
            (method, ["transactions", id]) => {
                let Ok(id) = id.parse::<i64>() else { return respond(400, "") };
                self.handle_item(method, id, body)
            }
            (Method::Patch, ["transactions", id, "status"]) => {
                let Ok(id) = id.parse::<i64>() else { return respond(400, "") };
                let Some(update) = parse::<StatusUpdateRequest>(body) else { return respond(400, "") };
                let mut inner = self.inner.borrow_mut();
                match inner.transactions.iter_mut().find(|t| t.id == id) {
                    Some(tx) => {
                        tx.status = update.status;
                        respond_json(200, tx)
                    }
                    None => respond(400, ""),
                }
            }
            _ => respond(404, ""),
        }
    }

    fn handle_item(&self, method: Method, id: i64, body: &str) -> HttpResponse {
        let mut inner = self.inner.borrow_mut();
        let position = inner.transactions.iter().position(|t| t.id == id);
        match (method, position) {
            (Method::Get, Some(i)) => respond_json(200, &inner.transactions[i]),
            (Method::Put, Some(i)) => match parse::<TransactionRequest>(body) {
                Some(req) => {
                    let mut updated = build_transaction(id, &req);
                    updated.transaction_id = inner.transactions[i].transaction_id.clone();
                    updated.status = inner.transactions[i].status;
                    inner.transactions[i] = updated;
                    respond_json(200, &inner.transactions[i])
                }
                None => respond(400, ""),
            },
            (Method::Delete, Some(i)) => {
                inner.transactions.remove(i);
                respond(204, "")
            }
            (Method::Put, None) => respond(400, ""),
            _ => respond(404, ""),
        }
    }

    fn handle_auth(&self, method: Method, endpoint: &str, body: &str) -> HttpResponse {
        if method != Method::Post {
            return respond(405, "");
        }
        match endpoint {
            "login" => {
                let Some(req) = parse::<LoginRequest>(body) else { return respond(400, "") };
                let known = self.inner.borrow().users.get(&req.username) == Some(&req.password);
                if known {
                    respond_json(200, &self.auth_response(&req.username))
                } else {
                    respond(401, "")
                }
            }
            "register" => {
                let Some(req) = parse::<RegisterRequest>(body) else { return respond(400, "") };
                if self.inner.borrow().users.contains_key(&req.username) {
                    return respond(400, r#"{"message":"Username is already taken!"}"#);
                }
                self.add_user(&req.username, &req.password);
                respond_json(200, &self.auth_response(&req.username))
            }
            "forgot-password" => respond(200, r#"{"message":"Password reset instructions sent to your email"}"#),
            "reset-password" => {
                if body.contains("\"token\":\"reset-ok\"") {
                    respond(200, r#"{"message":"Password reset successfully"}"#)
                } else {
                    respond(400, r#"{"error":"Invalid or expired reset token"}"#)
                }
            }
            _ => respond(404, ""),
        }
    }

    fn auth_response(&self, username: &str) -> AuthResponse {
        AuthResponse {
            token: self.issue_token(username),
            token_type: Some("Bearer".to_string()),
            id: 1,
            username: username.to_string(),
            email: format!("{}@acme.test", username),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            company_name: Some("Acme Corp".to_string()),
            roles: vec!["ROLE_USER".to_string()],
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        self.inner.borrow_mut().requests.push(request.clone());
        let injected = self.inner.borrow_mut().injected.pop_front();
        Ok(injected.unwrap_or_else(|| self.handle(&request)))
    }
}

fn route_path(url: &str) -> &str {
    url.find("/auth/")
        .or_else(|| url.find("/transactions"))
        .map(|index| &url[index..])
        .unwrap_or(url)
}

fn parse<T: DeserializeOwned>(body: &str) -> Option<T> {
    serde_json::from_str(body).ok()
}

fn respond(status: u16, body: &str) -> HttpResponse {
    HttpResponse { status, body: body.to_string() }
}

fn respond_json<T: serde::Serialize + ?Sized>(status: u16, value: &T) -> HttpResponse {
    respond(status, &serde_json::to_string(value).unwrap())
}

fn build_transaction(id: i64, req: &TransactionRequest) -> Transaction {
    Transaction {
        id,
        transaction_id: format!("TXN-{:08}", id),
        buyer_company: req.buyer_company.clone(),
        seller_company: req.seller_company.clone(),
        product_name: req.product_name.clone(),
        product_description: req.product_description.clone(),
        quantity: req.quantity,
        unit_price: req.unit_price,
        total_amount: req.unit_price * Decimal::from(req.quantity),
        currency: req.currency.clone(),
        status: TransactionStatus::Pending,
        payment_terms: req.payment_terms.clone(),
        delivery_date: req.delivery_date,
        notes: req.notes.clone(),
        ai_insights: Some("Standard terms; no risk flags.".to_string()),
        created_at: None,
        updated_at: None,
    }
}
