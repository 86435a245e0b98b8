//! Chart generation and rendering for the dashboard.
//!
//! The monthly totals chart is generated as JSON configuration for the
//! ECharts library and rendered with an HTML container and JavaScript
//! initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{dashboard::aggregation::MonthlyTotal, html::HeadElement};

/// The URL of the ECharts library.
const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a dashboard chart.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    html!(
        section id="charts" class="w-full mx-auto mb-4"
        {
            div
                id=(chart.id)
                class="min-h-[380px] rounded dark:bg-gray-100"
            {}
        }
    )
}

/// Generates the head elements that load ECharts and initialize `chart`
/// once the page has loaded.
pub(super) fn chart_scripts(chart: &DashboardChart) -> [HeadElement; 2] {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{}"));
            chart.setOption({});
            window.addEventListener('resize', chart.resize);
        }});"#,
        chart.id, chart.options
    );

    [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        HeadElement::ScriptSource(PreEscaped(script)),
    ]
}

/// A bar chart with one bar per month, red for a net loss and green for a net gain.
pub(super) fn monthly_totals_chart(monthly_totals: &[MonthlyTotal]) -> Chart {
    let labels: Vec<String> = monthly_totals
        .iter()
        .map(|monthly_total| monthly_total.label.clone())
        .collect();
    let values: Vec<f64> = monthly_totals
        .iter()
        .map(|monthly_total| monthly_total.total)
        .collect();

    Chart::new()
        .title(Title::new().text("Monthly Totals"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lt(0).color("red"),
            VisualMapPiece::new().gte(0).color("green"),
        ]))
        .series(bar::Bar::new().name("Total").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
