//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use bank_ledger_core::LedgerError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input failed validation.
    #[error("{message}")]
    Validation {
        /// Stable machine-readable code.
        code: &'static str,
        /// Human-readable description.
        message: String,
    },

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// The account number is already taken. Reported as a validation failure.
    #[error("{0}")]
    AlreadyExists(String),

    /// Withdrawal larger than the balance.
    #[error("insufficient funds: balance={balance_cents}, required={required_cents}")]
    InsufficientFunds {
        /// Current balance in cents.
        balance_cents: i64,
        /// Requested amount in cents.
        required_cents: i64,
    },
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::Validation { code, message } => {
                (StatusCode::BAD_REQUEST, *code, message.clone(), None)
            }
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "account_not_found",
                msg.clone(),
                None,
            ),
            Self::AlreadyExists(msg) => (
                StatusCode::BAD_REQUEST,
                "account_exists",
                msg.clone(),
                None,
            ),
            Self::InsufficientFunds {
                balance_cents,
                required_cents,
            } => (
                StatusCode::BAD_REQUEST,
                "insufficient_funds",
                self.to_string(),
                Some(serde_json::json!({
                    "balance_cents": balance_cents,
                    "required_cents": required_cents
                })),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::InvalidAccountNumber { .. } => Self::Validation {
                code: "invalid_account_number",
                message,
            },
            LedgerError::InvalidName { .. } => Self::Validation {
                code: "invalid_name",
                message,
            },
            LedgerError::InsufficientInitialBalance { .. } => Self::Validation {
                code: "insufficient_initial_balance",
                message,
            },
            LedgerError::InvalidAmount(_) => Self::Validation {
                code: "invalid_amount",
                message,
            },
            LedgerError::AccountExists { .. } => Self::AlreadyExists(message),
            LedgerError::AccountNotFound { .. } => Self::NotFound(message),
            LedgerError::InsufficientFunds {
                balance_cents,
                required_cents,
            } => Self::InsufficientFunds {
                balance_cents,
                required_cents,
            },
        }
    }
}
