//! Transaction data aggregation for charts.
//!
//! Provides the monthly rollup: transaction amounts summed per calendar month.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::transaction::Transaction;

/// The sum of the transaction amounts in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// The month and year, e.g. "Jan 2024".
    pub label: String,
    /// The sum of the amounts of the transactions in the month.
    pub total: f64,
}

/// Aggregates transaction amounts by month.
///
/// Months appear in the order they are first seen in `transactions`, which is
/// only chronological if `transactions` is. Months without transactions are
/// left out. Amounts are summed with plain floating point addition.
pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals: Vec<MonthlyTotal> = Vec::new();
    let mut index_by_month: HashMap<(i32, Month), usize> = HashMap::new();

    for transaction in transactions {
        let key = (transaction.date.year(), transaction.date.month());

        let index = *index_by_month.entry(key).or_insert_with(|| {
            totals.push(MonthlyTotal {
                label: format_month_label(transaction.date),
                total: 0.0,
            });
            totals.len() - 1
        });

        totals[index].total += transaction.amount;
    }

    totals
}

/// Formats the month of `date` as a three-letter abbreviation followed by the
/// year, e.g. "Jan 2024".
pub(super) fn format_month_label(date: Date) -> String {
    let month = match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{month} {}", date.year())
}
