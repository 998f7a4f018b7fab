//! Bank Ledger HTTP client implementation.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::{
    Account, AccountList, AmountRequest, ApiErrorResponse, Balance, Deleted, Health,
    OpenAccountRequest, Summary, TransactionPage,
};

/// Bank Ledger API client.
#[derive(Debug, Clone)]
pub struct BankLedgerClient {
    client: Client,
    base_url: String,
}

impl BankLedgerClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the service (e.g., `"http://localhost:8080"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<Health, ClientError> {
        self.send(self.client.get(self.url("/health"))).await
    }

    /// Open a new account.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::AccountExists` if the number is taken,
    /// `ClientError::Validation` if the input is rejected.
    pub async fn open_account(&self, request: &OpenAccountRequest) -> Result<Account, ClientError> {
        self.send(self.client.post(self.url("/accounts")).json(request))
            .await
    }

    /// List every live account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        let list: AccountList = self.send(self.client.get(self.url("/accounts"))).await?;
        Ok(list.accounts)
    }

    /// Get an account by number.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::AccountNotFound` if the account does not exist.
    pub async fn get_account(&self, account_no: &str) -> Result<Account, ClientError> {
        self.send(self.client.get(self.account_url(account_no, "")))
            .await
    }

    /// Get an account's current balance.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::AccountNotFound` if the account does not exist.
    pub async fn balance(&self, account_no: &str) -> Result<Balance, ClientError> {
        self.send(self.client.get(self.account_url(account_no, "/balance")))
            .await
    }

    /// Deposit money.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::AccountNotFound` or `ClientError::Validation`.
    pub async fn deposit(&self, account_no: &str, amount: Decimal) -> Result<Account, ClientError> {
        self.send(
            self.client
                .post(self.account_url(account_no, "/deposit"))
                .json(&AmountRequest { amount }),
        )
        .await
    }

    /// Withdraw money.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InsufficientFunds` if the balance is too low,
    /// `ClientError::AccountNotFound` or `ClientError::Validation` otherwise.
    pub async fn withdraw(&self, account_no: &str, amount: Decimal) -> Result<Account, ClientError> {
        self.send(
            self.client
                .post(self.account_url(account_no, "/withdraw"))
                .json(&AmountRequest { amount }),
        )
        .await
    }

    /// Delete an account.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::AccountNotFound` if the account does not exist.
    pub async fn delete_account(&self, account_no: &str) -> Result<Deleted, ClientError> {
        self.send(self.client.delete(self.account_url(account_no, "")))
            .await
    }

    /// Fetch transaction history, newest first.
    ///
    /// `limit` of `None` returns everything after `offset`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::AccountNotFound` if the account does not exist.
    pub async fn transactions(
        &self,
        account_no: &str,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<TransactionPage, ClientError> {
        let mut request = self
            .client
            .get(self.account_url(account_no, "/transactions"))
            .query(&[("offset", offset)]);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        self.send(request).await
    }

    /// Fetch ledger-wide totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn summary(&self) -> Result<Summary, ClientError> {
        self.send(self.client.get(self.url("/summary"))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn account_url(&self, account_no: &str, suffix: &str) -> String {
        format!("{}/accounts/{account_no}{suffix}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let Ok(api_error) = serde_json::from_slice::<ApiErrorResponse>(&body) else {
            return Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            });
        };

        let code = api_error.error.code;
        let message = api_error.error.message;
        tracing::debug!(status = status.as_u16(), code = %code, "API returned an error");

        match code.as_str() {
            "account_not_found" => Err(ClientError::AccountNotFound { message }),
            "account_exists" => Err(ClientError::AccountExists { message }),
            "insufficient_funds" => {
                let detail = |key: &str| {
                    api_error
                        .error
                        .details
                        .as_ref()
                        .and_then(|d| d.get(key))
                        .and_then(serde_json::Value::as_i64)
                        .unwrap_or(0)
                };
                Err(ClientError::InsufficientFunds {
                    balance_cents: detail("balance_cents"),
                    required_cents: detail("required_cents"),
                })
            }
            "invalid_account_number" | "invalid_name" | "insufficient_initial_balance"
            | "invalid_amount" => Err(ClientError::Validation { code, message }),
            _ => Err(ClientError::Api {
                code,
                message,
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
