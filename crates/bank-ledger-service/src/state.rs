//! Application state.

use std::sync::Arc;

use bank_ledger_core::Ledger;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ledger every handler operates on.
    pub ledger: Arc<Ledger>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state around an existing ledger.
    #[must_use]
    pub fn new(ledger: Arc<Ledger>, config: ServiceConfig) -> Self {
        Self { ledger, config }
    }

    /// Create a state with a fresh, empty ledger.
    #[must_use]
    pub fn with_empty_ledger(config: ServiceConfig) -> Self {
        Self::new(Arc::new(Ledger::new()), config)
    }
}
