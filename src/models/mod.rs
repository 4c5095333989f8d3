pub mod auth;
pub mod transaction;

pub use auth::{AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest, ResetPasswordRequest, User};
pub use transaction::{StatusUpdateRequest, Transaction, TransactionRequest, TransactionStatus};
