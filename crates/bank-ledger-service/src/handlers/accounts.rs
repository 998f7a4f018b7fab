//! Account management handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bank_ledger_core::{cents_to_f64, format_cents, Account};

use crate::error::ApiError;
use crate::state::AppState;

/// Account response.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
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
    /// Created timestamp.
    pub created_at: String,
    /// Last balance change timestamp.
    pub updated_at: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            account_no: account.account_no.to_string(),
            name: account.name.clone(),
            balance: cents_to_f64(account.balance_cents),
            balance_cents: account.balance_cents,
            balance_formatted: format_cents(account.balance_cents),
            created_at: account.created_at.to_rfc3339(),
            updated_at: account.updated_at.to_rfc3339(),
        }
    }
}

/// Open account request.
#[derive(Debug, Deserialize)]
pub struct OpenAccountRequest {
    /// Six-digit account number chosen by the caller.
    pub account_no: String,
    /// Holder name (letters and spaces).
    pub name: String,
    /// Opening deposit, at least 100.00.
    pub initial_balance: Decimal,
}

/// List accounts response.
#[derive(Debug, Serialize)]
pub struct ListAccountsResponse {
    /// Live accounts, ordered by account number.
    pub accounts: Vec<AccountResponse>,
}

/// Balance response.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Six-digit account number.
    pub account_no: String,
    /// Balance as a decimal amount.
    pub balance: f64,
    /// Balance in cents.
    pub balance_cents: i64,
    /// Balance formatted as dollars.
    pub balance_formatted: String,
}

/// Delete account response.
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    /// Always `true` on success.
    pub deleted: bool,
    /// The removed account number.
    pub account_no: String,
}

/// Open a new account.
pub async fn open_account(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OpenAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state
        .ledger
        .open_account(&body.account_no, &body.name, body.initial_balance)
        .map_err(|e| {
            tracing::warn!(account_no = %body.account_no, error = %e, "Account opening rejected");
            ApiError::from(e)
        })?;

    tracing::info!(
        account_no = %account.account_no,
        balance_cents = account.balance_cents,
        "Account opened"
    );

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

/// List every live account.
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> Json<ListAccountsResponse> {
    let accounts = state
        .ledger
        .list_accounts()
        .iter()
        .map(AccountResponse::from)
        .collect();

    Json(ListAccountsResponse { accounts })
}

/// Get a single account.
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_no): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.ledger.get_account(&account_no)?;

    Ok(Json(AccountResponse::from(&account)))
}

/// Get an account's current balance.
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(account_no): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance_cents = state.ledger.balance(&account_no)?;

    Ok(Json(BalanceResponse {
        account_no,
        balance: cents_to_f64(balance_cents),
        balance_cents,
        balance_formatted: format_cents(balance_cents),
    }))
}

/// Delete an account. Its transaction log entries are retained.
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(account_no): Path<String>,
) -> Result<Json<DeleteAccountResponse>, ApiError> {
    state.ledger.delete_account(&account_no)?;

    tracing::info!(account_no = %account_no, "Account deleted");

    Ok(Json(DeleteAccountResponse {
        deleted: true,
        account_no,
    }))
}
