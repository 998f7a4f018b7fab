//! Bank Ledger Client SDK.
//!
//! This crate provides a typed client for the bank-ledger HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use bank_ledger_client::{BankLedgerClient, OpenAccountRequest};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> Result<(), bank_ledger_client::ClientError> {
//! let client = BankLedgerClient::new("http://localhost:8080")?;
//!
//! client
//!     .open_account(&OpenAccountRequest {
//!         account_no: "123456".to_string(),
//!         name: "Jane Doe".to_string(),
//!         initial_balance: Decimal::new(10000, 2),
//!     })
//!     .await?;
//!
//! let account = client.deposit("123456", Decimal::new(5000, 2)).await?;
//! println!("New balance: {}", account.balance_formatted);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{BankLedgerClient, ClientOptions};
pub use error::ClientError;
pub use types::*;
