use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::transaction::{
    NewTransaction,
    api::{CreateTransactionBody, TransactionState, json_body_error},
};

const FAILURE_MESSAGE: &str = "Failed to create transaction";

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created and the stored transaction, including its
/// assigned ID and timestamps.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<CreateTransactionBody>, JsonRejection>,
) -> Response {
    let new_transaction = match body
        .map_err(json_body_error)
        .and_then(|Json(body)| NewTransaction::try_from(body))
    {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::debug!("Rejected new transaction: {error}");
            return error.into_json_response(FAILURE_MESSAGE);
        }
    };

    match state.transaction_store.create(new_transaction) {
        Ok(transaction) => {
            tracing::info!("Created transaction {}", transaction.id);
            (StatusCode::CREATED, Json(transaction)).into_response()
        }
        Err(error) => error.into_json_response(FAILURE_MESSAGE),
    }
}
