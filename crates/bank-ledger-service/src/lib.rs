//! Bank Ledger HTTP API Service.
//!
//! This crate exposes a [`bank_ledger_core::Ledger`] over HTTP:
//!
//! - Account management (open, look up, list, delete)
//! - Deposits and withdrawals
//! - Transaction history and ledger-wide summary
//!
//! All state is held in memory for the lifetime of the process. There is no
//! authentication layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for the router even when they never await

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
