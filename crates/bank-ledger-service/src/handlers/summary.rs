//! Ledger-wide summary handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use bank_ledger_core::{cents_to_f64, LedgerSummary};

use crate::state::AppState;

/// Summary response.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Number of live accounts.
    pub total_accounts: usize,
    /// Sum of live balances.
    pub total_balance: f64,
    /// Sum of live balances, in cents.
    pub total_balance_cents: i64,
    /// Everything ever deposited, deleted accounts included.
    pub total_deposited: f64,
    /// Everything ever deposited, in cents.
    pub total_deposited_cents: i64,
    /// Everything ever withdrawn, deleted accounts included.
    pub total_withdrawn: f64,
    /// Everything ever withdrawn, in cents.
    pub total_withdrawn_cents: i64,
    /// Number of log entries.
    pub transaction_count: usize,
}

impl From<LedgerSummary> for SummaryResponse {
    fn from(summary: LedgerSummary) -> Self {
        Self {
            total_accounts: summary.total_accounts,
            total_balance: cents_to_f64(summary.total_balance_cents),
            total_balance_cents: summary.total_balance_cents,
            total_deposited: cents_to_f64(summary.total_deposited_cents),
            total_deposited_cents: summary.total_deposited_cents,
            total_withdrawn: cents_to_f64(summary.total_withdrawn_cents),
            total_withdrawn_cents: summary.total_withdrawn_cents,
            transaction_count: summary.transaction_count,
        }
    }
}

/// Aggregate figures for the whole ledger.
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(SummaryResponse::from(state.ledger.summary()))
}
