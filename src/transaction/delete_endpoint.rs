use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::transaction::{
    TransactionId,
    api::{MessageBody, TransactionState},
};

/// A route handler for deleting a transaction.
///
/// Deleting a transaction that does not exist succeeds so that repeated
/// requests are harmless.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match state.transaction_store.delete(&transaction_id) {
        Ok(true) => {
            tracing::info!("Deleted transaction {transaction_id}");
            Json(MessageBody::new("Transaction deleted successfully")).into_response()
        }
        Ok(false) => {
            tracing::debug!("Transaction {transaction_id} was already deleted");
            Json(MessageBody::new("Transaction deleted successfully")).into_response()
        }
        Err(error) => error.into_json_response("Failed to delete transaction"),
    }
}
