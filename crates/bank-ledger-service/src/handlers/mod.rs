//! API handlers.

pub mod accounts;
pub mod health;
pub mod summary;
pub mod transactions;
