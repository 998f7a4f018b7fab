//! Ledger summary integration tests.

mod common;

use common::TestHarness;

#[tokio::test]
async fn summary_of_empty_ledger() {
    let harness = TestHarness::new();

    let response = harness.server.get("/summary").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_accounts"], 0);
    assert_eq!(body["total_balance_cents"], 0);
    assert_eq!(body["transaction_count"], 0);
}

#[tokio::test]
async fn summary_includes_deleted_account_activity() {
    let harness = TestHarness::new();
    harness.open_account("111111", "Abe", 100.0).await;
    harness.open_account("222222", "Bea", 300.0).await;
    harness.withdraw("222222", 50.0).await.assert_status_ok();
    harness
        .server
        .delete("/accounts/111111")
        .await
        .assert_status_ok();

    let response = harness.server.get("/summary").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_accounts"], 1);
    assert_eq!(body["total_balance_cents"], 25_000);
    assert_eq!(body["total_balance"], 250.0);
    assert_eq!(body["total_deposited_cents"], 40_000);
    assert_eq!(body["total_withdrawn_cents"], 5_000);
    assert_eq!(body["transaction_count"], 3);
}
