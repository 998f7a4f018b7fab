//! Request and response types for the bank-ledger client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to open an account.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAccountRequest {
    /// Six-digit account number.
    pub account_no: String,
    /// Holder name (letters and spaces).
    pub name: String,
    /// Opening deposit, at least 100.00.
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_balance: Decimal,
}

/// Deposit or withdrawal request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AmountRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// An account as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Internal account ID.
    pub id: String,
    /// Six-digit account number.
    pub account_no: String,
    /// Holder name.
    pub name: String,
    /// Balance as a decimal amount.
    pub balance: f64,
    /// Balance in cents.
    pub balance_cents: i64,
    /// Balance formatted as dollars.
    pub balance_formatted: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last balance change.
    pub updated_at: String,
}

/// Account list response.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountList {
    /// Live accounts, ordered by account number.
    pub accounts: Vec<Account>,
}

/// Balance response.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// Six-digit account number.
    pub account_no: String,
    /// Balance as a decimal amount.
    pub balance: f64,
    /// Balance in cents.
    pub balance_cents: i64,
    /// Balance formatted as dollars.
    pub balance_formatted: String,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money in.
    Deposit,
    /// Money out.
    Withdraw,
}

/// A transaction log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: String,
    /// Account number.
    pub account_no: String,
    /// Direction.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount moved, as a decimal.
    pub amount: f64,
    /// Amount moved, in cents.
    pub amount_cents: i64,
    /// Balance after this entry, as a decimal.
    pub balance: f64,
    /// Balance after this entry, in cents.
    pub balance_cents: i64,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

/// A page of transaction history.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPage {
    /// Account number.
    pub account_no: String,
    /// Entries, newest first.
    pub transactions: Vec<Transaction>,
    /// Whether more entries exist past this page.
    pub has_more: bool,
}

/// Deletion acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
    /// Always `true`.
    pub deleted: bool,
    /// The removed account number.
    pub account_no: String,
}

/// Ledger-wide totals.
#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    /// Number of live accounts.
    pub total_accounts: usize,
    /// Sum of live balances, in cents.
    pub total_balance_cents: i64,
    /// Everything ever deposited, in cents.
    pub total_deposited_cents: i64,
    /// Everything ever withdrawn, in cents.
    pub total_withdrawn_cents: i64,
    /// Number of log entries.
    pub transaction_count: usize,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Live accounts held by the service.
    pub accounts: usize,
    /// Log entries held by the service.
    pub transactions: usize,
}

/// API error response format.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// API error body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
