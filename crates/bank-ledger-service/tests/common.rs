//! Common test utilities for bank-ledger integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::{TestResponse, TestServer};
use serde_json::json;

use bank_ledger_core::Ledger;
use bank_ledger_service::{create_router, AppState, ServiceConfig};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The ledger behind the server, for direct inspection.
    pub ledger: Arc<Ledger>,
}

impl TestHarness {
    /// Create a new test harness with an empty ledger.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            ..ServiceConfig::default()
        })
    }

    /// Create a harness with a custom configuration.
    pub fn with_config(config: ServiceConfig) -> Self {
        let ledger = Arc::new(Ledger::new());
        let state = AppState::new(Arc::clone(&ledger), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, ledger }
    }

    /// Open an account through the API and assert it succeeded.
    pub async fn open_account(&self, account_no: &str, name: &str, initial_balance: f64) {
        self.server
            .post("/accounts")
            .json(&json!({
                "account_no": account_no,
                "name": name,
                "initial_balance": initial_balance,
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    /// Deposit through the API.
    pub async fn deposit(&self, account_no: &str, amount: f64) -> TestResponse {
        self.server
            .post(&format!("/accounts/{account_no}/deposit"))
            .json(&json!({ "amount": amount }))
            .await
    }

    /// Withdraw through the API.
    pub async fn withdraw(&self, account_no: &str, amount: f64) -> TestResponse {
        self.server
            .post(&format!("/accounts/{account_no}/withdraw"))
            .json(&json!({ "amount": amount }))
            .await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
