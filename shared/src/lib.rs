use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Transaction category. The wire format uses lowercase strings
/// ("expense" / "income").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Expense,
    Income,
}

impl Category {
    /// Normalize an amount so its sign matches the category: expenses are
    /// stored negative, income positive. Applied at the write boundary so
    /// the server never sees a mis-signed amount.
    pub fn signed_amount(&self, amount: f64) -> f64 {
        match self {
            Category::Expense => -amount.abs(),
            Category::Income => amount.abs(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Expense => "Expense",
            Category::Income => "Income",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single persisted transaction. The server is the source of truth for
/// `id` and for the stored amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// ISO 8601 date assigned by the server
    pub date: String,
    pub description: String,
    /// Signed amount: negative for expenses, positive for income
    pub amount: f64,
    pub category: Category,
}

/// Body for `POST /transactions/` and `PUT /transactions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub description: String,
    /// Already sign-normalized for the category
    pub amount: f64,
    pub category: Category,
    /// Optional date override; the server uses the current date if absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TransactionPayload {
    /// Build a payload from raw form values, normalizing the amount sign
    /// to the chosen category.
    pub fn from_form(description: String, amount: f64, category: Category) -> Self {
        Self {
            description,
            amount: category.signed_amount(amount),
            category,
            date: None,
        }
    }
}

/// Server-computed aggregate from `GET /transactions/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_transactions: u64,
    pub total_income: f64,
    pub total_expense: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_transactions: 0,
            total_income: 0.0,
            total_expense: 0.0,
        }
    }
}

/// Envelope returned by `GET /transactions/exchange-rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    pub result: ExchangeRateSnapshot,
}

/// Point-in-time currency conversion table. Advisory only, never joined
/// against transaction data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateSnapshot {
    /// Currency code → rate against the base currency
    pub rates: BTreeMap<String, f64>,
    /// Unix timestamp (seconds) of the provider's quote
    pub timestamp: i64,
}

impl ExchangeRateSnapshot {
    /// Human-readable fetch time, e.g. "Jan 15, 2024 09:30 UTC".
    pub fn fetched_at_display(&self) -> String {
        match DateTime::<Utc>::from_timestamp(self.timestamp, 0) {
            Some(dt) => dt.format("%b %e, %Y %H:%M UTC").to_string(),
            None => format!("epoch {}", self.timestamp),
        }
    }
}

/// Opaque authenticated-user descriptor. Credentials are never carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response from `GET /auth/check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCheckResponse {
    pub user: Identity,
}

/// Body for `POST /auth/login` and `POST /auth/signup`. `email` is only
/// supplied on signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_amount_is_negative() {
        assert_eq!(Category::Expense.signed_amount(200.0), -200.0);
        assert_eq!(Category::Expense.signed_amount(-200.0), -200.0);
        assert_eq!(Category::Expense.signed_amount(0.0), 0.0);
    }

    #[test]
    fn test_income_amount_is_positive() {
        assert_eq!(Category::Income.signed_amount(150.0), 150.0);
        assert_eq!(Category::Income.signed_amount(-150.0), 150.0);
    }

    #[test]
    fn test_payload_normalizes_sign_by_category() {
        let expense =
            TransactionPayload::from_form("Groceries".to_string(), 200.0, Category::Expense);
        assert_eq!(expense.amount, -200.0);
        assert_eq!(expense.category, Category::Expense);
        assert!(expense.date.is_none());

        let income =
            TransactionPayload::from_form("Salary".to_string(), 5000.0, Category::Income);
        assert_eq!(income.amount, 5000.0);
    }

    #[test]
    fn test_category_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Expense).unwrap(),
            "\"expense\""
        );
        let parsed: Category = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(parsed, Category::Income);
    }

    #[test]
    fn test_payload_omits_absent_date() {
        let payload =
            TransactionPayload::from_form("Groceries".to_string(), 200.0, Category::Expense);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("date").is_none());
        assert_eq!(json["amount"], -200.0);
    }

    #[test]
    fn test_summary_field_names() {
        let json = r#"{"total_transactions": 42, "total_income": 9000.0, "total_expense": 3130.5}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_transactions, 42);
        assert_eq!(summary.total_income, 9000.0);
        assert_eq!(summary.total_expense, 3130.5);
    }

    #[test]
    fn test_exchange_rate_envelope() {
        let json = r#"{"result": {"rates": {"EUR": 0.92, "JPY": 151.3}, "timestamp": 1705312200}}"#;
        let response: ExchangeRateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result.rates.len(), 2);
        assert_eq!(response.result.rates["EUR"], 0.92);
        assert!(response.result.fetched_at_display().contains("2024"));
    }

    #[test]
    fn test_transaction_round_trip() {
        let json = r#"{"id": 7, "date": "2024-01-17", "description": "Groceries",
                       "amount": -200.0, "category": "expense"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.amount, -200.0);
        assert_eq!(tx.category, Category::Expense);
    }
}
