use serde::{Deserialize, Serialize};

use crate::amortization::labels::format_period_label;
use crate::amortization::schedule::PaymentPeriod;
use crate::types::Money;

pub const INTEREST_SERIES: &str = "Interest Payment";
pub const PRINCIPAL_SERIES: &str = "Principal Payment";

pub const CHART_TITLE: &str = "Mortgage Payment Breakdown (Interest vs Principal)";
pub const X_AXIS_TITLE: &str = "Month";
pub const Y_AXIS_TITLE: &str = "Amount ($)";

/// One named line on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    /// Amounts formatted with exactly two decimals.
    pub values: Vec<String>,
}

/// Labelled series for a line chart of interest vs principal per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

pub fn build_chart_data(schedule: &[PaymentPeriod]) -> ChartData {
    let labels = schedule
        .iter()
        .map(|p| format!("Month {} ({})", p.month, format_period_label(p.month)))
        .collect();

    let series_of = |name: &str, pick: fn(&PaymentPeriod) -> Money| ChartSeries {
        name: name.to_string(),
        values: schedule.iter().map(|p| format!("{:.2}", pick(p))).collect(),
    };

    ChartData {
        title: Some(CHART_TITLE.to_string()),
        x_axis: Some(X_AXIS_TITLE.to_string()),
        y_axis: Some(Y_AXIS_TITLE.to_string()),
        labels,
        series: vec![
            series_of(INTEREST_SERIES, |p| p.interest),
            series_of(PRINCIPAL_SERIES, |p| p.principal),
        ],
    }
}
