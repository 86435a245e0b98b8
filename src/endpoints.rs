//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}',
//! use [format_endpoint].

/// The root route which displays the dashboard.
pub const DASHBOARD_VIEW: &str = "/";
/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/transactions";
/// The route for the monthly totals of all transactions.
pub const MONTHLY_TOTALS_API: &str = "/transactions/monthly";
/// The route to update or delete a single transaction.
pub const TRANSACTION_API: &str = "/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Assumes the endpoint contains at most one parameter wrapped in braces,
/// e.g. '/transactions/{transaction_id}'. If there is no parameter the
/// endpoint is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let (Some(start), Some(end)) = (endpoint_path.find('{'), endpoint_path.find('}')) else {
        return endpoint_path.to_owned();
    };

    format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end + 1..])
}
