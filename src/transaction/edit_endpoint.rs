use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::transaction::{
    TransactionId, TransactionUpdate,
    api::{MessageBody, TransactionState, UpdateTransactionBody, json_body_error},
};

const FAILURE_MESSAGE: &str = "Failed to update transaction";

/// A route handler for changing some or all fields of a transaction.
///
/// Fields that are omitted from the body keep their current value.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    body: Result<Json<UpdateTransactionBody>, JsonRejection>,
) -> Response {
    let update = match body
        .map_err(json_body_error)
        .and_then(|Json(body)| TransactionUpdate::try_from(body))
    {
        Ok(update) => update,
        Err(error) => {
            tracing::debug!("Rejected update for transaction {transaction_id}: {error}");
            return error.into_json_response(FAILURE_MESSAGE);
        }
    };

    match state.transaction_store.update(&transaction_id, update) {
        Ok(_) => {
            tracing::info!("Updated transaction {transaction_id}");
            Json(MessageBody::new("Transaction updated successfully")).into_response()
        }
        Err(error) => {
            tracing::debug!("Could not update transaction {transaction_id}: {error}");
            error.into_json_response(FAILURE_MESSAGE)
        }
    }
}
