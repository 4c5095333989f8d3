// ============================================================================
// FORM DRAFTS - raw input values that survive re-renders
// ============================================================================
// Every render rebuilds the DOM, so inputs write into these drafts on each
// keystroke. Conversion into a request body is where local validation runs.
// ============================================================================

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, Transaction,
    TransactionRequest,
};
use crate::utils::constants::DEFAULT_CURRENCY;

/// Trimmed value, `None` when blank
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    optional(value).ok_or(ValidationError::MissingField(field))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> Result<LoginRequest, ValidationError> {
        let username = required(&self.username, "Username")?;
        // passwords are sent untrimmed
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        Ok(LoginRequest {
            username,
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub company_name: String,
}

impl RegisterForm {
    pub fn to_request(&self) -> Result<RegisterRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }

        Ok(RegisterRequest {
            username: required(&self.username, "Username")?,
            email: required(&self.email, "Email")?,
            password: self.password.clone(),
            first_name: required(&self.first_name, "First name")?,
            last_name: required(&self.last_name, "Last name")?,
            phone_number: optional(&self.phone_number),
            company_name: optional(&self.company_name),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn to_request(&self) -> Result<ForgotPasswordRequest, ValidationError> {
        Ok(ForgotPasswordRequest {
            email: required(&self.email, "Email")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn to_request(&self, token: &str) -> Result<ResetPasswordRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("New password"));
        }
        Ok(ResetPasswordRequest {
            token: required(token, "Reset token")?,
            new_password: self.password.clone(),
        })
    }
}

/// Create/edit modal contents
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionForm {
    pub buyer_company: String,
    pub seller_company: String,
    pub product_name: String,
    pub product_description: String,
    pub quantity: String,
    pub unit_price: String,
    pub currency: String,
    pub payment_terms: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub delivery_date: String,
    pub notes: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            buyer_company: String::new(),
            seller_company: String::new(),
            product_name: String::new(),
            product_description: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            payment_terms: String::new(),
            delivery_date: String::new(),
            notes: String::new(),
        }
    }
}

impl TransactionForm {
    /// Pre-fill for editing an existing transaction
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            buyer_company: tx.buyer_company.clone(),
            seller_company: tx.seller_company.clone(),
            product_name: tx.product_name.clone(),
            product_description: tx.product_description.clone().unwrap_or_default(),
            quantity: tx.quantity.to_string(),
            unit_price: tx.unit_price.normalize().to_string(),
            currency: tx.currency.clone(),
            payment_terms: tx.payment_terms.clone().unwrap_or_default(),
            delivery_date: tx
                .delivery_date
                .map(|d| d.date().format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            notes: tx.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> Result<TransactionRequest, ValidationError> {
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(ValidationError::InvalidNumber("Quantity"))?;

        let unit_price = Decimal::from_str(self.unit_price.trim())
            .ok()
            .filter(|p| p.is_sign_positive() && !p.is_zero())
            .ok_or(ValidationError::InvalidNumber("Unit price"))?;

        Ok(TransactionRequest {
            buyer_company: required(&self.buyer_company, "Buyer company")?,
            seller_company: required(&self.seller_company, "Seller company")?,
            product_name: required(&self.product_name, "Product name")?,
            product_description: optional(&self.product_description),
            quantity,
            unit_price,
            currency: optional(&self.currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            payment_terms: optional(&self.payment_terms),
            delivery_date: parse_delivery_date(&self.delivery_date)?,
            notes: optional(&self.notes),
        })
    }
}

/// The backend expects a local date-time; a picked day means midnight
fn parse_delivery_date(value: &str) -> Result<Option<NaiveDateTime>, ValidationError> {
    let Some(value) = optional(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Some)
        .ok_or(ValidationError::InvalidDate(value))
}
