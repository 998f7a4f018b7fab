//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{accounts, health, summary, transactions};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Accounts
/// - `POST /accounts` - Open an account
/// - `GET /accounts` - List live accounts
/// - `GET /accounts/:account_no` - Get an account
/// - `DELETE /accounts/:account_no` - Delete an account
/// - `GET /accounts/:account_no/balance` - Current balance
///
/// ## Money movement
/// - `POST /accounts/:account_no/deposit` - Deposit
/// - `POST /accounts/:account_no/withdraw` - Withdraw
/// - `GET /accounts/:account_no/transactions` - History, newest first
///
/// ## Reporting
/// - `GET /summary` - Ledger-wide totals
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;
    let max_concurrent_requests = state.config.max_concurrent_requests.max(1);

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let api_routes = Router::new()
        .route(
            "/accounts",
            post(accounts::open_account).get(accounts::list_accounts),
        )
        .route(
            "/accounts/:account_no",
            get(accounts::get_account).delete(accounts::delete_account),
        )
        .route("/accounts/:account_no/balance", get(accounts::get_balance))
        .route("/accounts/:account_no/deposit", post(transactions::deposit))
        .route("/accounts/:account_no/withdraw", post(transactions::withdraw))
        .route(
            "/accounts/:account_no/transactions",
            get(transactions::list_transactions),
        )
        .route("/summary", get(summary::get_summary))
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests));

    Router::new()
        // Health (public, no concurrency limit)
        .route("/health", get(health::health))
        .merge(api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
