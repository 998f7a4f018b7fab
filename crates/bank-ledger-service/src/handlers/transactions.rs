//! Deposit, withdrawal and transaction history handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bank_ledger_core::{cents_to_f64, Transaction};

use crate::error::ApiError;
use crate::handlers::accounts::AccountResponse;
use crate::state::AppState;

/// Deposit or withdrawal request.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    /// Amount to move, strictly positive.
    pub amount: Decimal,
}

/// Transaction list query parameters.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// Maximum number of transactions to return (default: all).
    pub limit: Option<usize>,
    /// Number of newest transactions to skip (default: 0).
    #[serde(default)]
    pub offset: usize,
}

/// Transaction response.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: String,
    /// Account number the entry belongs to.
    pub account_no: String,
    /// `deposit` or `withdraw`.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Amount moved, as a decimal.
    pub amount: f64,
    /// Amount moved, in cents.
    pub amount_cents: i64,
    /// Balance after this entry, as a decimal.
    pub balance: f64,
    /// Balance after this entry, in cents.
    pub balance_cents: i64,
    /// Timestamp.
    pub timestamp: String,
}

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            account_no: tx.account_no.to_string(),
            transaction_type: tx.transaction_type.as_str().to_string(),
            amount: cents_to_f64(tx.amount_cents),
            amount_cents: tx.amount_cents,
            balance: cents_to_f64(tx.balance_after_cents),
            balance_cents: tx.balance_after_cents,
            timestamp: tx.timestamp.to_rfc3339(),
        }
    }
}

/// List transactions response.
#[derive(Debug, Serialize)]
pub struct ListTransactionsResponse {
    /// Account number.
    pub account_no: String,
    /// Transactions (newest first).
    pub transactions: Vec<TransactionResponse>,
    /// Whether more transactions exist past this page.
    pub has_more: bool,
}

/// Deposit money into an account.
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Path(account_no): Path<String>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state
        .ledger
        .deposit(&account_no, body.amount)
        .map_err(|e| {
            tracing::warn!(account_no = %account_no, amount = %body.amount, error = %e, "Deposit rejected");
            ApiError::from(e)
        })?;

    tracing::debug!(
        account_no = %account_no,
        amount = %body.amount,
        balance_cents = account.balance_cents,
        "Deposit applied"
    );

    Ok(Json(AccountResponse::from(&account)))
}

/// Withdraw money from an account.
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Path(account_no): Path<String>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state
        .ledger
        .withdraw(&account_no, body.amount)
        .map_err(|e| {
            tracing::warn!(account_no = %account_no, amount = %body.amount, error = %e, "Withdrawal rejected");
            ApiError::from(e)
        })?;

    tracing::debug!(
        account_no = %account_no,
        amount = %body.amount,
        balance_cents = account.balance_cents,
        "Withdrawal applied"
    );

    Ok(Json(AccountResponse::from(&account)))
}

/// List an account's transaction history, newest first.
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Path(account_no): Path<String>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<ListTransactionsResponse>, ApiError> {
    let history = state.ledger.transactions(&account_no)?;

    let remaining = history.len().saturating_sub(query.offset);
    let limit = query.limit.unwrap_or(remaining);
    let has_more = remaining > limit;

    let transactions = history
        .iter()
        .skip(query.offset)
        .take(limit)
        .map(TransactionResponse::from)
        .collect();

    Ok(Json(ListTransactionsResponse {
        account_no,
        transactions,
        has_more,
    }))
}
