// ============================================================================
// ERRORS - One error type for every client-side failure
// ============================================================================

use thiserror::Error;

/// Local form checks that block a submission before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a positive number")]
    InvalidNumber(&'static str),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 401 from an /auth endpoint: wrong username or password
    #[error("Invalid credentials")]
    InvalidCredentials { message: Option<String> },

    /// 401 from a protected endpoint: token missing, expired or revoked
    #[error("Session expired")]
    Unauthorized,

    #[error("HTTP {status}")]
    Backend { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }

    /// Text shown next to the action that failed.
    ///
    /// Backend messages are passed through verbatim; anything without one
    /// falls back to the caller's generic string.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::InvalidCredentials { message: Some(m) } => m.clone(),
            AppError::Backend { message: Some(m), .. } => m.clone(),
            AppError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}
