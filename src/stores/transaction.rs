//! Defines the transaction store trait.

use std::fmt::Debug;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionUpdate},
};

/// Handles the creation, retrieval, update and removal of transactions.
///
/// Implementers must serialize their read-modify-write cycles so that
/// concurrent callers never lose each other's changes.
pub trait TransactionStore: Debug + Send + Sync {
    /// Retrieve every transaction in the order they were created.
    ///
    /// If the backing storage cannot be read, implementers should log the
    /// problem and return an empty list rather than an error.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Add a new transaction, assigning its ID and timestamps.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Change the supplied fields of the transaction with `id`.
    ///
    /// Returns [Error::NotFound] if there is no transaction with `id`.
    fn update(&self, id: &str, update: TransactionUpdate) -> Result<Transaction, Error>;

    /// Remove the transaction with `id` if it exists.
    ///
    /// Returns whether a transaction was removed. Removing a missing
    /// transaction is not an error.
    fn delete(&self, id: &str) -> Result<bool, Error>;
}
