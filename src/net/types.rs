//! Wire types for the REST API.
//!
//! The backend has camelCase field names and has varied a little over
//! time (`access_token` vs `accessToken`, `name` vs `firstName`), so
//! the serde derives carry aliases where both spellings exist in the
//! wild. Decoding is strict everywhere else: lists arrive as
//! `{transactions, total, hasMore}` objects, never bare arrays.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, alias = "firstName")]
    pub name: Option<String>,
}

impl User {
    /// Name to greet the user with; falls back to the email address.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Response of the login, register, and refresh endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "accessToken")]
    pub access_token: String,
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Transaction kind. Serialized in SCREAMING case on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
    Saving,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Income,
        TransactionType::Expense,
        TransactionType::Saving,
    ];

    /// Human-readable label for tabs and badges.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
            TransactionType::Saving => "Saving",
        }
    }

    /// Lowercase slug used in CSS class names.
    pub fn slug(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Saving => "saving",
        }
    }

    /// Parse the wire spelling, e.g. from a `<select>` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INCOME" => Some(TransactionType::Income),
            "EXPENSE" => Some(TransactionType::Expense),
            "SAVING" => Some(TransactionType::Saving),
            _ => None,
        }
    }

    /// The wire spelling.
    pub fn as_wire(self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Saving => "SAVING",
        }
    }
}

/// A single recorded transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub currency: String,
    #[serde(default)]
    pub tag_id: Option<String>,
    #[serde(default)]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

/// One page of filtered transactions.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
}

/// A user-defined label with its presentation colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color_bg: String,
    pub color_text: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A savings target. `current_amount` is advanced server-side as
/// SAVING transactions reference the goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub currency: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl Goal {
    /// Progress toward the target, clamped to 0..=100.
    pub fn progress_percent(&self) -> u8 {
        if self.target_amount <= 0.0 {
            return 0;
        }
        let percent = (self.current_amount / self.target_amount * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }
}

/// Month-to-date totals per transaction kind. Amounts arrive as
/// strings on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ShortSummary {
    #[serde(default)]
    pub income: String,
    #[serde(default)]
    pub expense: String,
    #[serde(default)]
    pub saving: String,
}

impl ShortSummary {
    pub fn income_amount(&self) -> f64 {
        parse_amount(&self.income)
    }

    pub fn expense_amount(&self) -> f64 {
        parse_amount(&self.expense)
    }

    pub fn saving_amount(&self) -> f64 {
        parse_amount(&self.saving)
    }
}

/// Parse a wire amount string; anything unparsable counts as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Transactions and totals for one calendar month.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub total_expense: f64,
    #[serde(default)]
    pub total_saving: f64,
}

// ---- request payloads ----

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub currency: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

/// Server-side pagination and filtering for the transaction list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    pub user_id: String,
    pub skip: u64,
    pub limit: u64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    pub name: String,
    pub color_bg: String,
    pub color_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub currency: String,
    pub deadline: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortSummaryRequest {
    pub user_id: String,
}
