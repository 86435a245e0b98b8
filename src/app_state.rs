//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::stores::TransactionStore;

/// The state of the REST server.
///
/// The store is created once when the server starts and shared with every
/// request handler through this state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store that holds the transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl AppState {
    /// Create a new [AppState] that serves transactions from `transaction_store`.
    pub fn new(transaction_store: Arc<dyn TransactionStore>) -> Self {
        Self { transaction_store }
    }
}
