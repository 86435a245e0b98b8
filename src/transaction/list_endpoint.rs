use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::transaction::api::TransactionState;

/// A route handler that responds with every transaction as a JSON array.
pub async fn list_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    match state.transaction_store.list() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_json_response("Failed to fetch transactions"),
    }
}
