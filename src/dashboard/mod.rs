//! Dashboard module
//!
//! Provides the overview page with the transaction list, the monthly totals
//! chart and the form for adding transactions, plus the monthly totals as JSON.

mod aggregation;
mod charts;
mod handlers;

pub use aggregation::{MonthlyTotal, aggregate_by_month};
pub use handlers::{get_dashboard_page, get_monthly_totals_endpoint};
