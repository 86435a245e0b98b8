//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, put},
};

use crate::{
    AppState,
    dashboard::{get_dashboard_page, get_monthly_totals_endpoint},
    endpoints,
    error::json_error,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::MONTHLY_TOTALS_API,
            get(get_monthly_totals_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "Not found")
}
