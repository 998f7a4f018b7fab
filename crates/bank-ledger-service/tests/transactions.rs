//! Deposit, withdrawal and history integration tests.

mod common;

use common::TestHarness;
use futures::future::join_all;
use serde_json::json;

// ============================================================================
// Deposit / Withdraw
// ============================================================================

#[tokio::test]
async fn open_deposit_overdraw_delete_scenario() {
    let harness = TestHarness::new();
    harness.open_account("123456", "Jane Doe", 100.0).await;

    let response = harness.deposit("123456", 50.0).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["balance_cents"], 15_000);

    let response = harness.withdraw("123456", 200.0).await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "insufficient_funds");
    assert_eq!(body["error"]["details"]["balance_cents"], 15_000);
    assert_eq!(body["error"]["details"]["required_cents"], 20_000);
    assert_eq!(harness.ledger.balance("123456").unwrap(), 15_000);

    harness
        .server
        .delete("/accounts/123456")
        .await
        .assert_status_ok();
    harness
        .server
        .get("/accounts/123456")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn withdraw_reduces_balance() {
    let harness = TestHarness::new();
    harness.open_account("123456", "Jane", 100.0).await;

    let response = harness.withdraw("123456", 40.25).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["balance_cents"], 5_975);
    assert_eq!(body["balance_formatted"], "$59.75");
}

#[tokio::test]
async fn withdraw_above_balance_by_fraction_of_cent_is_rejected() {
    let harness = TestHarness::new();
    harness.open_account("123456", "Jane", 150.0).await;

    let response = harness.withdraw("123456", 150.004).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "insufficient_funds");
    assert_eq!(body["error"]["details"]["balance_cents"], 15_000);
    assert_eq!(body["error"]["details"]["required_cents"], 15_001);
    assert_eq!(harness.ledger.balance("123456").unwrap(), 15_000);
}

#[tokio::test]
async fn non_positive_amounts_are_rejected() {
    let harness = TestHarness::new();
    harness.open_account("123456", "Jane", 100.0).await;

    for amount in [0.0, -10.0, 0.001] {
        let response = harness.deposit("123456", amount).await;
        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"]["code"], "invalid_amount");

        harness
            .withdraw("123456", amount)
            .await
            .assert_status_bad_request();
    }

    assert_eq!(harness.ledger.transactions("123456").unwrap().len(), 1);
}

#[tokio::test]
async fn money_movement_on_missing_account_is_not_found() {
    let harness = TestHarness::new();

    harness.deposit("123456", 10.0).await.assert_status_not_found();
    harness.withdraw("123456", 10.0).await.assert_status_not_found();
}

#[tokio::test]
async fn amount_must_be_a_number() {
    let harness = TestHarness::new();
    harness.open_account("123456", "Jane", 100.0).await;

    let response = harness
        .server
        .post("/accounts/123456/deposit")
        .json(&json!({ "amount": true }))
        .await;

    assert!(response.status_code().is_client_error());
    assert_eq!(harness.ledger.balance("123456").unwrap(), 10_000);
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn transactions_are_newest_first() {
    let harness = TestHarness::new();
    harness.open_account("123456", "Jane", 100.0).await;
    harness.deposit("123456", 25.0).await.assert_status_ok();
    harness.withdraw("123456", 5.5).await.assert_status_ok();

    let response = harness.server.get("/accounts/123456/transactions").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let txs = body["transactions"].as_array().unwrap();
    assert_eq!(txs.len(), 3);
    assert_eq!(body["has_more"], false);

    let kinds: Vec<&str> = txs.iter().map(|t| t["type"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["withdraw", "deposit", "deposit"]);

    let balances: Vec<i64> = txs
        .iter()
        .map(|t| t["balance_cents"].as_i64().unwrap())
        .collect();
    assert_eq!(balances, vec![11_950, 12_500, 10_000]);
    assert_eq!(txs[0]["amount_cents"], 550);
}

#[tokio::test]
async fn transactions_support_pagination() {
    let harness = TestHarness::new();
    harness.open_account("123456", "Jane", 100.0).await;
    for _ in 0..4 {
        harness.deposit("123456", 1.0).await.assert_status_ok();
    }

    let response = harness
        .server
        .get("/accounts/123456/transactions?limit=2&offset=1")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let txs = body["transactions"].as_array().unwrap();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0]["balance_cents"], 10_300);
    assert_eq!(body["has_more"], true);

    let response = harness
        .server
        .get("/accounts/123456/transactions?limit=10&offset=3")
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(body["has_more"], false);
}

#[tokio::test]
async fn transactions_for_missing_account_fail() {
    let harness = TestHarness::new();

    harness
        .server
        .get("/accounts/123456/transactions")
        .await
        .assert_status_not_found();
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn concurrent_deposits_are_all_applied() {
    const DEPOSITS: usize = 50;

    let harness = TestHarness::new();
    harness.open_account("123456", "Jane", 100.0).await;

    let responses = join_all((0..DEPOSITS).map(|_| harness.deposit("123456", 2.5))).await;
    for response in &responses {
        response.assert_status_ok();
    }

    let response = harness.server.get("/accounts/123456").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["balance_cents"], 10_000 + 250 * i64::try_from(DEPOSITS).unwrap());

    let response = harness.server.get("/accounts/123456/transactions").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["transactions"].as_array().unwrap().len(), DEPOSITS + 1);
}
