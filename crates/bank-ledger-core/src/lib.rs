//! Core types and the in-memory ledger for bank-ledger.
//!
//! This crate provides everything the HTTP service delegates to:
//!
//! - **Identifiers**: `AccountId`, `TransactionId`
//! - **Accounts**: `Account`, `AccountNumber`
//! - **Transactions**: `Transaction`, `TransactionType`
//! - **Money**: cent conversion and formatting helpers
//! - **Ledger**: the account table plus its append-only transaction log
//!
//! # Money
//!
//! Amounts enter the ledger as exact decimals and are rounded once to cents
//! (half away from zero). From then on every balance is an `i64` count of
//! cents, so the stored balance and the balances recorded in the log never
//! drift apart.
//!
//! # Example
//!
//! ```
//! use bank_ledger_core::Ledger;
//! use rust_decimal::Decimal;
//!
//! let ledger = Ledger::new();
//! let account = ledger
//!     .open_account("123456", "Jane Doe", Decimal::new(10000, 2))
//!     .unwrap();
//! assert_eq!(account.balance_cents, 10_000);
//!
//! let account = ledger.deposit("123456", Decimal::new(5000, 2)).unwrap();
//! assert_eq!(account.balance_cents, 15_000);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod error;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountNumber, ACCOUNT_NUMBER_LEN};
pub use error::{LedgerError, Result};
pub use ids::{AccountId, IdError, TransactionId};
pub use ledger::{Ledger, LedgerSummary};
pub use money::{cents_to_decimal, cents_to_f64, format_cents, to_cents, MIN_OPENING_BALANCE};
pub use transaction::{Transaction, TransactionType};
