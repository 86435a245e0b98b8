//! Defines the core data models and field rules for transactions.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The opaque identifier the store assigns to a transaction.
pub type TransactionId = String;

/// The largest magnitude allowed for a transaction amount.
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// The max number of graphemes allowed in a transaction description.
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

/// The format used for transaction dates, e.g. "2025-01-15".
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and pass the result
/// to a [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    ///
    /// Older documents store this under `_id`.
    #[serde(alias = "_id")]
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// When the transaction was added to the store.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the transaction was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(amount: f64, date: Date, description: &str) -> NewTransaction {
        NewTransaction {
            amount,
            date,
            description: description.to_owned(),
        }
    }
}

/// The caller supplied fields of a transaction that has not been stored yet.
///
/// The store assigns the ID and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The monetary amount of the transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    ///
    /// # Examples
    /// - `150.00` - Salary deposit
    /// - `-45.99` - Coffee shop purchase
    pub amount: f64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction.
    pub description: String,
}

impl NewTransaction {
    /// Check the fields against the transaction rules.
    ///
    /// # Errors
    /// Returns an [Error::Validation] if the amount or description is invalid.
    pub fn validate(&self) -> Result<(), Error> {
        validate_amount(self.amount)?;
        validate_description(&self.description)?;

        Ok(())
    }
}

/// The fields to change on an existing transaction.
///
/// Fields set to `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    /// The new amount.
    pub amount: Option<f64>,
    /// The new date.
    pub date: Option<Date>,
    /// The new description.
    pub description: Option<String>,
}

impl TransactionUpdate {
    /// Check the supplied fields against the transaction rules.
    ///
    /// # Errors
    /// Returns an [Error::Validation] if a supplied field is invalid.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }

        if let Some(description) = &self.description {
            validate_description(description)?;
        }

        Ok(())
    }

    /// Copy the supplied fields onto `transaction` and set its `updated_at`
    /// to `now`.
    pub fn apply(self, transaction: &mut Transaction, now: OffsetDateTime) {
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }

        if let Some(date) = self.date {
            transaction.date = date;
        }

        if let Some(description) = self.description {
            transaction.description = description;
        }

        transaction.updated_at = now;
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

fn validate_amount(amount: f64) -> Result<(), Error> {
    if !amount.is_finite() {
        return Err(Error::Validation("amount must be a finite number".to_owned()));
    }

    if amount.abs() > MAX_AMOUNT {
        return Err(Error::Validation(format!(
            "amount must be between -{MAX_AMOUNT} and {MAX_AMOUNT}"
        )));
    }

    Ok(())
}

fn validate_description(description: &str) -> Result<(), Error> {
    if description.trim().is_empty() {
        return Err(Error::Validation("description cannot be empty".to_owned()));
    }

    if description.graphemes(true).count() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::Validation(format!(
            "description cannot be longer than {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Parse a date in the format "YYYY-MM-DD".
///
/// # Errors
/// Returns an [Error::Validation] if `text` is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT)
        .map_err(|error| Error::Validation(format!("invalid date \"{text}\": {error}")))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use crate::{
        Error,
        transaction::{Transaction, TransactionUpdate, core::parse_date},
    };

    #[test]
    fn validate_accepts_typical_transaction() {
        let transaction = Transaction::build(-45.99, date!(2025 - 01 - 15), "Coffee");

        assert_eq!(transaction.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_amount_bounds() {
        for amount in [-1_000_000.0, 0.0, 1_000_000.0] {
            let transaction = Transaction::build(amount, date!(2025 - 01 - 15), "Edge");

            assert_eq!(transaction.validate(), Ok(()), "amount {amount}");
        }
    }

    #[test]
    fn validate_rejects_amount_out_of_range() {
        for amount in [-1_000_000.01, 1_000_000.01, f64::NAN, f64::INFINITY] {
            let transaction = Transaction::build(amount, date!(2025 - 01 - 15), "Too much");

            assert!(
                matches!(transaction.validate(), Err(Error::Validation(_))),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_blank_description() {
        for description in ["", "   "] {
            let transaction = Transaction::build(1.0, date!(2025 - 01 - 15), description);

            assert!(matches!(transaction.validate(), Err(Error::Validation(_))));
        }
    }

    #[test]
    fn validate_counts_graphemes_not_bytes() {
        let at_limit = "é".repeat(100);
        let over_limit = "a".repeat(101);

        assert_eq!(
            Transaction::build(1.0, date!(2025 - 01 - 15), &at_limit).validate(),
            Ok(())
        );
        assert!(matches!(
            Transaction::build(1.0, date!(2025 - 01 - 15), &over_limit).validate(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        assert_eq!(TransactionUpdate::default().validate(), Ok(()));

        let update = TransactionUpdate {
            description: Some(String::new()),
            ..Default::default()
        };

        assert!(matches!(update.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut transaction = Transaction {
            id: "abc".to_owned(),
            amount: 12.5,
            description: "Lunch".to_owned(),
            date: date!(2025 - 03 - 01),
            created_at: datetime!(2025-03-01 12:00 UTC),
            updated_at: datetime!(2025-03-01 12:00 UTC),
        };
        let now = datetime!(2025-03-02 08:30 UTC);

        TransactionUpdate {
            amount: Some(-20.0),
            ..Default::default()
        }
        .apply(&mut transaction, now);

        assert_eq!(transaction.amount, -20.0);
        assert_eq!(transaction.description, "Lunch");
        assert_eq!(transaction.date, date!(2025 - 03 - 01));
        assert_eq!(transaction.created_at, datetime!(2025-03-01 12:00 UTC));
        assert_eq!(transaction.updated_at, now);
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-02-29"), Ok(date!(2024 - 02 - 29)));
    }

    #[test]
    fn parse_date_rejects_invalid_dates() {
        for text in ["", "not a date", "2023-02-29", "2024-13-01", "05/01/2024"] {
            assert!(
                matches!(parse_date(text), Err(Error::Validation(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let transaction = Transaction {
            id: "abc".to_owned(),
            amount: -3.5,
            description: "Bus".to_owned(),
            date: date!(2024 - 01 - 05),
            created_at: datetime!(2024-01-05 10:00 UTC),
            updated_at: datetime!(2024-01-06 11:30 UTC),
        };

        let json = serde_json::to_value(&transaction).expect("could not serialize transaction");

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "amount": -3.5,
                "description": "Bus",
                "date": "2024-01-05",
                "createdAt": "2024-01-05T10:00:00Z",
                "updatedAt": "2024-01-06T11:30:00Z",
            })
        );
    }

    #[test]
    fn deserializes_legacy_underscore_id() {
        let json = r#"{
            "_id": "65a1b2c3d4e5f60718293a4b",
            "amount": 10,
            "description": "Salary",
            "date": "2024-01-05",
            "createdAt": "2024-01-05T10:00:00.000Z",
            "updatedAt": "2024-01-05T10:00:00.000Z"
        }"#;

        let transaction: Transaction =
            serde_json::from_str(json).expect("could not deserialize transaction");

        assert_eq!(transaction.id, "65a1b2c3d4e5f60718293a4b");
        assert_eq!(transaction.amount, 10.0);
        assert_eq!(transaction.date, date!(2024 - 01 - 05));
    }
}
