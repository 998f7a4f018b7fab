//! Transaction log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountNumber, TransactionId};

/// A single entry in the transaction log.
///
/// Entries are written once and never modified, including after the owning
/// account has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction ID (ULID for time-ordering).
    pub id: TransactionId,

    /// The account this entry belongs to.
    pub account_no: AccountNumber,

    /// Direction of the balance change.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Magnitude of the operation in cents. Always positive.
    pub amount_cents: i64,

    /// Balance immediately after this entry, in cents.
    pub balance_after_cents: i64,

    /// When the entry was written.
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a deposit entry.
    #[must_use]
    pub fn deposit(
        account_no: AccountNumber,
        amount_cents: i64,
        balance_after_cents: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            account_no,
            transaction_type: TransactionType::Deposit,
            amount_cents,
            balance_after_cents,
            timestamp,
        }
    }

    /// Create a withdrawal entry.
    #[must_use]
    pub fn withdraw(
        account_no: AccountNumber,
        amount_cents: i64,
        balance_after_cents: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            account_no,
            transaction_type: TransactionType::Withdraw,
            amount_cents,
            balance_after_cents,
            timestamp,
        }
    }

    /// The signed effect of this entry on the balance.
    #[must_use]
    pub const fn signed_amount_cents(&self) -> i64 {
        match self.transaction_type {
            TransactionType::Deposit => self.amount_cents,
            TransactionType::Withdraw => -self.amount_cents,
        }
    }
}

/// Type of transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money added to the account (including the opening deposit).
    Deposit,

    /// Money taken out of the account.
    Withdraw,
}

impl TransactionType {
    /// The wire name of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}
