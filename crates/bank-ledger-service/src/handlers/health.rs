//! Liveness endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Liveness report with the size of the in-memory ledger.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Live accounts held in memory.
    pub accounts: usize,
    /// Log entries held in memory, deleted accounts included.
    pub transactions: usize,
}

/// Report liveness. Exempt from the API concurrency limit.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let summary = state.ledger.summary();

    Json(HealthResponse {
        status: "ok",
        service: "bank-ledger",
        version: env!("CARGO_PKG_VERSION"),
        accounts: summary.total_accounts,
        transactions: summary.transaction_count,
    })
}
