//! Client error types.

/// Errors that can occur when using the bank-ledger client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No live account has the requested number.
    #[error("{message}")]
    AccountNotFound {
        /// Server-provided description.
        message: String,
    },

    /// The account number is already taken.
    #[error("{message}")]
    AccountExists {
        /// Server-provided description.
        message: String,
    },

    /// Withdrawal larger than the balance.
    #[error("insufficient funds: balance={balance_cents}, required={required_cents}")]
    InsufficientFunds {
        /// Current balance in cents.
        balance_cents: i64,
        /// Requested amount in cents.
        required_cents: i64,
    },

    /// The server rejected the input.
    #[error("validation failed: {code} - {message}")]
    Validation {
        /// Error code (e.g. `invalid_name`).
        code: String,
        /// Server-provided description.
        message: String,
    },

    /// Any other error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
