use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::format::format_money;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Approved,
    InProgress,
    Completed,
    Cancelled,
    Rejected,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 6] = [
        TransactionStatus::Pending,
        TransactionStatus::Approved,
        TransactionStatus::InProgress,
        TransactionStatus::Completed,
        TransactionStatus::Cancelled,
        TransactionStatus::Rejected,
    ];

    /// Wire name, as the backend spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::InProgress => "IN_PROGRESS",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::Rejected => "REJECTED",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            TransactionStatus::Pending | TransactionStatus::InProgress => "status-badge status-purple",
            TransactionStatus::Approved => "status-badge status-cyan",
            TransactionStatus::Completed => "status-badge status-green",
            TransactionStatus::Cancelled => "status-badge status-gray",
            TransactionStatus::Rejected => "status-badge status-red",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        TransactionStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

/// Transaction as returned by the backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub transaction_id: String,
    pub buyer_company: String,
    pub seller_company: String,
    pub product_name: String,
    #[serde(default)]
    pub product_description: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    /// Computed by the backend; never recomputed here
    pub total_amount: Decimal,
    pub currency: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub ai_insights: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Transaction {
    pub fn display_total(&self) -> String {
        format_money(self.total_amount, &self.currency)
    }

    pub fn display_unit_price(&self) -> String {
        format_money(self.unit_price, &self.currency)
    }

    /// Case-insensitive match used by the dashboard search box
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            &self.transaction_id,
            &self.buyer_company,
            &self.seller_company,
            &self.product_name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Body of POST /transactions and PUT /transactions/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub buyer_company: String,
    pub seller_company: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of PATCH /transactions/{id}/status
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StatusUpdateRequest {
    pub status: TransactionStatus,
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::transaction;

    #[test]
    fn test_parse_backend_payload() {
        let json = r#"{
            "id": 42,
            "transactionId": "9f1c2d3e-aaaa-bbbb-cccc-000000000042",
            "buyerCompany": "Acme Corp",
            "sellerCompany": "Global Supplies Inc",
            "productName": "Industrial Equipment",
            "productDescription": null,
            "quantity": 100,
            "unitPrice": 99.99,
            "totalAmount": 9999.00,
            "currency": "USD",
            "status": "IN_PROGRESS",
            "paymentTerms": "Net 30",
            "deliveryDate": "2025-06-01T00:00:00",
            "notes": null,
            "aiInsights": "Low risk supplier.",
            "createdAt": "2025-05-01T10:15:30.123456",
            "updatedAt": "2025-05-01T10:15:30.123456"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.status, TransactionStatus::InProgress);
        assert_eq!(tx.unit_price, Decimal::from_str("99.99").unwrap());
        assert_eq!(tx.display_total(), "9999.00 USD");
        assert_eq!(tx.ai_insights.as_deref(), Some("Low risk supplier."));
        assert!(tx.delivery_date.is_some());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&TransactionStatus::InProgress).unwrap(), "\"IN_PROGRESS\"");
        assert_eq!("completed".parse::<TransactionStatus>(), Ok(TransactionStatus::Completed));
        assert!("ARCHIVED".parse::<TransactionStatus>().is_err());
        let body = serde_json::to_value(StatusUpdateRequest { status: TransactionStatus::Approved }).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "APPROVED" }));
    }

    #[test]
    fn test_search_matches_reference_parties_and_product() {
        let tx = transaction(3, "Steel Beams", TransactionStatus::Pending);
        assert!(tx.matches_query("steel"));
        assert!(tx.matches_query("ACME"));
        assert!(tx.matches_query("global"));
        assert!(tx.matches_query("txn-0000"));
        assert!(tx.matches_query("   "));
        assert!(!tx.matches_query("copper"));
    }
}
