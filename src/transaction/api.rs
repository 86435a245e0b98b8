//! Request and response bodies shared by the transaction API endpoints.

use std::sync::Arc;

use axum::extract::{FromRef, rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    stores::TransactionStore,
    transaction::{NewTransaction, TransactionUpdate, core::parse_date},
};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store for managing transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A confirmation sent after a change that does not return the transaction.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageBody {
    /// What happened.
    pub message: String,
}

impl MessageBody {
    pub(super) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// The JSON body for creating a transaction.
///
/// Every field is optional here so that a missing field is reported with a
/// clear message instead of a generic deserialization error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTransactionBody {
    /// The amount, negative for expenses.
    pub amount: Option<f64>,
    /// What the transaction was for.
    pub description: Option<String>,
    /// The date in the format "YYYY-MM-DD".
    pub date: Option<String>,
}

impl TryFrom<CreateTransactionBody> for NewTransaction {
    type Error = Error;

    fn try_from(body: CreateTransactionBody) -> Result<Self, Self::Error> {
        let amount = body
            .amount
            .ok_or_else(|| Error::Validation("amount is required".to_owned()))?;
        let description = body
            .description
            .ok_or_else(|| Error::Validation("description is required".to_owned()))?;
        let date = body
            .date
            .ok_or_else(|| Error::Validation("date is required".to_owned()))
            .and_then(|date| parse_date(&date))?;

        let transaction = NewTransaction {
            amount,
            date,
            description,
        };
        transaction.validate()?;

        Ok(transaction)
    }
}

/// The JSON body for updating a transaction. Omitted or null fields are left
/// unchanged.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTransactionBody {
    /// The new amount.
    pub amount: Option<f64>,
    /// The new description.
    pub description: Option<String>,
    /// The new date in the format "YYYY-MM-DD".
    pub date: Option<String>,
}

impl TryFrom<UpdateTransactionBody> for TransactionUpdate {
    type Error = Error;

    fn try_from(body: UpdateTransactionBody) -> Result<Self, Self::Error> {
        let update = TransactionUpdate {
            amount: body.amount,
            date: body.date.as_deref().map(parse_date).transpose()?,
            description: body.description,
        };
        update.validate()?;

        Ok(update)
    }
}

/// Convert a body that axum could not parse as JSON into a validation error.
pub(super) fn json_body_error(rejection: JsonRejection) -> Error {
    Error::Validation(format!("invalid request body: {}", rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{
            NewTransaction, TransactionUpdate,
            api::{CreateTransactionBody, UpdateTransactionBody},
        },
    };

    #[test]
    fn create_body_converts_to_new_transaction() {
        let body = CreateTransactionBody {
            amount: Some(-12.5),
            description: Some("Groceries".to_owned()),
            date: Some("2024-01-20".to_owned()),
        };

        let transaction = NewTransaction::try_from(body).expect("could not convert body");

        assert_eq!(
            transaction,
            NewTransaction {
                amount: -12.5,
                date: date!(2024 - 01 - 20),
                description: "Groceries".to_owned(),
            }
        );
    }

    #[test]
    fn create_body_requires_every_field() {
        let bodies = [
            CreateTransactionBody {
                amount: None,
                description: Some("Groceries".to_owned()),
                date: Some("2024-01-20".to_owned()),
            },
            CreateTransactionBody {
                amount: Some(1.0),
                description: None,
                date: Some("2024-01-20".to_owned()),
            },
            CreateTransactionBody {
                amount: Some(1.0),
                description: Some("Groceries".to_owned()),
                date: None,
            },
        ];

        for body in bodies {
            assert!(matches!(
                NewTransaction::try_from(body),
                Err(Error::Validation(_))
            ));
        }
    }

    #[test]
    fn create_body_rejects_invalid_date() {
        let body = CreateTransactionBody {
            amount: Some(1.0),
            description: Some("Groceries".to_owned()),
            date: Some("Invalid Date".to_owned()),
        };

        assert!(matches!(
            NewTransaction::try_from(body),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn update_body_keeps_omitted_fields_empty() {
        let body = UpdateTransactionBody {
            date: Some("2024-02-01".to_owned()),
            ..Default::default()
        };

        let update = TransactionUpdate::try_from(body).expect("could not convert body");

        assert_eq!(
            update,
            TransactionUpdate {
                amount: None,
                date: Some(date!(2024 - 02 - 01)),
                description: None,
            }
        );
    }
}
