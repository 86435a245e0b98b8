//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the dashboard page, which lists the transactions,
//!   charts the monthly totals and has a form for adding transactions
//! - The route handler for the monthly totals as JSON

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, PreEscaped, html};
use time::OffsetDateTime;

use crate::{
    dashboard::{
        aggregation::aggregate_by_month,
        charts::{DashboardChart, chart_scripts, chart_view, monthly_totals_chart},
    },
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        HeadElement, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_currency,
    },
    transaction::{DATE_FORMAT, MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, Transaction, TransactionState},
};

/// Submits the new transaction form as JSON and deletes transactions, reloading
/// the page after each successful change.
const DASHBOARD_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function() {
    const errorMessage = document.getElementById('error-message');

    const showError = (message) => {
        errorMessage.textContent = message;
        errorMessage.classList.remove('hidden');
    };

    document.getElementById('new-transaction-form').addEventListener('submit', async (event) => {
        event.preventDefault();
        const form = event.target;
        const data = new FormData(form);

        try {
            const response = await fetch(form.dataset.endpoint, {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({
                    amount: Number(data.get('amount')),
                    description: data.get('description'),
                    date: data.get('date'),
                }),
            });

            if (!response.ok) throw new Error('Failed to add transaction');
            window.location.reload();
        } catch (error) {
            console.error(error);
            showError('Failed to add transaction');
        }
    });

    document.querySelectorAll('button[data-delete-endpoint]').forEach((button) => {
        button.addEventListener('click', async () => {
            try {
                const response = await fetch(button.dataset.deleteEndpoint, { method: 'DELETE' });

                if (!response.ok) throw new Error('Failed to delete transaction');
                window.location.reload();
            } catch (error) {
                console.error(error);
                showError('Failed to delete transaction');
            }
        });
    });
});
"#;

/// Display a page with the transactions, their monthly totals and a form for
/// adding new transactions.
pub async fn get_dashboard_page(State(state): State<TransactionState>) -> Response {
    let transactions = match state.transaction_store.list() {
        Ok(transactions) => transactions,
        Err(error) => return error.into_json_response("Failed to fetch transactions"),
    };

    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();
    let today = today.format(DATE_FORMAT).unwrap_or_default();

    dashboard_view(&transactions, &today).into_response()
}

/// A route handler that responds with the monthly totals of all transactions
/// as a JSON array, in the order each month first appears.
pub async fn get_monthly_totals_endpoint(State(state): State<TransactionState>) -> Response {
    match state.transaction_store.list() {
        Ok(transactions) => Json(aggregate_by_month(&transactions)).into_response(),
        Err(error) => error.into_json_response("Failed to fetch monthly totals"),
    }
}

fn dashboard_view(transactions: &[Transaction], today: &str) -> Markup {
    let monthly_totals = aggregate_by_month(transactions);
    let chart = (!monthly_totals.is_empty()).then(|| DashboardChart {
        id: "monthly-totals-chart",
        options: monthly_totals_chart(&monthly_totals).to_string(),
    });

    let mut head_elements = vec![HeadElement::ScriptSource(PreEscaped(
        DASHBOARD_SCRIPT.to_owned(),
    ))];
    if let Some(chart) = &chart {
        head_elements.extend(chart_scripts(chart));
    }

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-4" { "Personal Finance Tracker" }

            p
                id="error-message"
                class="hidden w-full max-w-md p-4 mb-4 text-red-800 bg-red-50 rounded"
            {}

            div class="grid gap-8 md:grid-cols-2 w-full max-w-screen-xl"
            {
                div
                {
                    h2 class="text-xl font-semibold mb-4" { "Monthly Totals" }

                    @match &chart {
                        Some(chart) => (chart_view(chart)),
                        None => (no_data_view()),
                    }

                    h2 class="text-xl font-semibold my-4" { "Add Transaction" }

                    (new_transaction_form(today))
                }

                div
                {
                    h2 class="text-xl font-semibold mb-4" { "Transactions" }

                    (transactions_table(transactions))
                }
            }
        }
    );

    base("Dashboard", &head_elements, &content)
}

fn no_data_view() -> Markup {
    html!(
        p id="no-data" class="mb-4"
        {
            "The chart will show up here once you add some transactions."
        }
    )
}

fn new_transaction_form(today: &str) -> Markup {
    html!(
        form
            id="new-transaction-form"
            data-endpoint=(endpoints::TRANSACTIONS_API)
            class="space-y-4"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    type="number"
                    step="0.01"
                    min=(-MAX_AMOUNT)
                    max=(MAX_AMOUNT)
                    name="amount"
                    id="amount"
                    placeholder="Enter amount (use negative for expenses)"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    type="text"
                    maxlength=(MAX_DESCRIPTION_LENGTH)
                    name="description"
                    id="description"
                    placeholder="Enter description"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    type="date"
                    name="date"
                    id="date"
                    value=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
        }
    )
}

fn transactions_table(transactions: &[Transaction]) -> Markup {
    html!(
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for transaction in transactions {
                    (transaction_row(transaction))
                }

                @if transactions.is_empty() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan="4" class=(TABLE_CELL_STYLE) { "No transactions yet." }
                    }
                }
            }
        }
    )
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let amount_style = if transaction.amount < 0.0 {
        "font-semibold text-red-500"
    } else {
        "font-semibold text-green-500"
    };
    let date = transaction.date.format(DATE_FORMAT).unwrap_or_default();

    html!(
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (date) }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class={(TABLE_CELL_STYLE) " " (amount_style)} { (format_currency(transaction.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    data-delete-endpoint=(format_endpoint(endpoints::TRANSACTION_API, &transaction.id))
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    )
}
