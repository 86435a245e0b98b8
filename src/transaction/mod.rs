//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the field rules for creating and updating transactions
//! - The JSON API endpoints for listing, creating, updating and deleting transactions

mod api;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;

pub use api::{CreateTransactionBody, MessageBody, TransactionState, UpdateTransactionBody};
pub use self::core::{
    DATE_FORMAT, MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, NewTransaction, Transaction, TransactionId,
    TransactionUpdate,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
