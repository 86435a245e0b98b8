//! Implements a transaction store backed by a single JSON document.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId, TransactionUpdate},
};

/// Stores transactions as a JSON array in a single file.
///
/// Every operation reads the whole document and every change rewrites it.
/// The store holds a lock for the duration of each read-modify-write cycle,
/// so concurrent requests within the process cannot overwrite each other.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the transaction document at `path`.
    ///
    /// Missing parent directories are created and a missing document is
    /// created as an empty list.
    ///
    /// # Errors
    /// Returns an [Error::StorageWrite] if the directories or the empty
    /// document cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| {
                Error::StorageWrite(format!("could not create {}: {error}", parent.display()))
            })?;
        }

        if !path.exists() {
            tracing::info!("Creating empty transaction document at {}", path.display());
            write_document(&path, &[])?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// The file path of the transaction document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, Error> {
        self.lock
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLock)
    }
}

impl TransactionStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        let _guard = self.lock()?;

        match read_document(&self.path) {
            Ok(transactions) => Ok(transactions),
            Err(error) => {
                tracing::error!("Returning no transactions: {error}");
                Ok(Vec::new())
            }
        }
    }

    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        transaction.validate()?;

        let _guard = self.lock()?;
        // An unreadable document must not be replaced by a one item list.
        let mut transactions = read_document(&self.path)?;

        let now = OffsetDateTime::now_utc();
        let transaction = Transaction {
            id: new_id(&transactions),
            amount: transaction.amount,
            description: transaction.description,
            date: transaction.date,
            created_at: now,
            updated_at: now,
        };

        transactions.push(transaction.clone());
        write_document(&self.path, &transactions)?;

        Ok(transaction)
    }

    fn update(&self, id: &str, update: TransactionUpdate) -> Result<Transaction, Error> {
        update.validate()?;

        let _guard = self.lock()?;
        let mut transactions = read_document(&self.path)?;

        let transaction = transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;
        update.apply(transaction, OffsetDateTime::now_utc());
        let updated = transaction.clone();

        write_document(&self.path, &transactions)?;

        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<bool, Error> {
        let _guard = self.lock()?;
        let mut transactions = read_document(&self.path)?;

        let count_before = transactions.len();
        transactions.retain(|transaction| transaction.id != id);

        if transactions.len() == count_before {
            return Ok(false);
        }

        write_document(&self.path, &transactions)?;

        Ok(true)
    }
}

fn new_id(transactions: &[Transaction]) -> TransactionId {
    loop {
        let id = Uuid::new_v4().to_string();

        if !transactions.iter().any(|transaction| transaction.id == id) {
            return id;
        }
    }
}

fn read_document(path: &Path) -> Result<Vec<Transaction>, Error> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("{} does not exist, treating it as empty", path.display());
            return Ok(Vec::new());
        }
        Err(error) => {
            return Err(Error::StorageRead(format!("{}: {error}", path.display())));
        }
    };

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&text)
        .map_err(|error| Error::StorageRead(format!("{}: {error}", path.display())))
}

/// Write the document to a sibling file first and then move it into place so
/// that a failed write leaves the previous document intact.
fn write_document(path: &Path, transactions: &[Transaction]) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(transactions)
        .map_err(|error| Error::StorageWrite(format!("could not serialize: {error}")))?;

    let temp_path = temp_path_for(path);

    fs::write(&temp_path, json).map_err(|error| {
        Error::StorageWrite(format!("{}: {error}", temp_path.display()))
    })?;

    fs::rename(&temp_path, path)
        .map_err(|error| Error::StorageWrite(format!("{}: {error}", path.display())))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");

    path.with_file_name(file_name)
}
