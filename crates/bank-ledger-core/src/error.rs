//! Error types for bank-ledger.

use rust_decimal::Decimal;

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors returned by ledger operations.
///
/// Every variant is a recoverable, caller-facing rejection; the ledger state
/// is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The account number is not exactly six ASCII digits.
    #[error("invalid account number {account_no:?}: must be exactly 6 digits")]
    InvalidAccountNumber {
        /// The rejected input.
        account_no: String,
    },

    /// The holder name is empty or contains something other than letters and whitespace.
    #[error("invalid name {name:?}: must contain only letters and spaces")]
    InvalidName {
        /// The rejected input.
        name: String,
    },

    /// The opening deposit is below the minimum opening balance.
    #[error("initial balance must be at least {minimum}, got {amount}")]
    InsufficientInitialBalance {
        /// The opening amount as requested.
        amount: Decimal,
        /// The minimum opening balance.
        minimum: Decimal,
    },

    /// An account with this number already exists.
    #[error("account already exists: {account_no}")]
    AccountExists {
        /// The duplicated account number.
        account_no: String,
    },

    /// No live account has this number.
    #[error("account not found: {account_no}")]
    AccountNotFound {
        /// The account number that was looked up.
        account_no: String,
    },

    /// The amount is not strictly positive, rounds to zero cents, or is out of range.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A withdrawal exceeds the current balance.
    #[error("insufficient funds: balance={balance_cents}, required={required_cents}")]
    InsufficientFunds {
        /// Current balance in cents.
        balance_cents: i64,
        /// Smallest number of cents covering the requested withdrawal.
        required_cents: i64,
    },
}

impl LedgerError {
    pub(crate) fn not_found(account_no: impl Into<String>) -> Self {
        Self::AccountNotFound {
            account_no: account_no.into(),
        }
    }
}
