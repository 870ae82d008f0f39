//! Dashboard route handlers.
//!
//! The response carries plain numeric arrays plus labels; the client's
//! chart widgets have no richer contract than that. Formatted strings ride
//! alongside the raw numbers so the client renders exactly what the server
//! computed.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use shoplytix_core::format::{percent_change, peso, peso_compact};
use tracing::instrument;

use crate::seed::MONTH_LABELS;
use crate::state::AppState;

/// One summary card (daily/weekly/monthly sales).
#[derive(Debug, Serialize)]
pub struct SalesCard {
    pub amount: f64,
    pub display: String,
    /// Change versus the previous period, formatted.
    pub change: String,
}

/// One row of the comparative analysis table.
#[derive(Debug, Serialize)]
pub struct MetricRow {
    pub key: &'static str,
    pub label: &'static str,
    pub higher_is_better: bool,
    pub values: Vec<f64>,
    /// Month-over-month changes; one entry per consecutive pair.
    pub changes: Vec<String>,
}

/// Per-category sales for the bar chart.
#[derive(Debug, Serialize)]
pub struct CategorySalesView {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Full dashboard display data.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub owner_name: String,
    pub current_date: String,
    pub daily: SalesCard,
    pub weekly: SalesCard,
    pub monthly: SalesCard,
    pub months: Vec<&'static str>,
    pub metrics: Vec<MetricRow>,
    pub category_sales: CategorySalesView,
}

/// Month-over-month change strings for a 12-month series.
fn month_over_month(values: &[f64]) -> Vec<String> {
    values
        .windows(2)
        .filter_map(|pair| match pair {
            [previous, current] => Some(percent_change(*current, *previous)),
            _ => None,
        })
        .collect()
}

fn metric_row(
    key: &'static str,
    label: &'static str,
    higher_is_better: bool,
    values: &[f64],
) -> MetricRow {
    MetricRow {
        key,
        label,
        higher_is_better,
        values: values.to_vec(),
        changes: month_over_month(values),
    }
}

/// Display the dashboard.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<DashboardView> {
    let figures = state.catalog().figures();

    let view = DashboardView {
        owner_name: state.config().owner_name.clone(),
        current_date: Utc::now().format("%B %-d, %Y").to_string(),
        daily: SalesCard {
            amount: figures.daily_sales,
            display: peso(figures.daily_sales),
            change: percent_change(figures.daily_sales, figures.previous_daily_sales),
        },
        weekly: SalesCard {
            amount: figures.weekly_sales,
            display: peso_compact(figures.weekly_sales),
            change: percent_change(figures.weekly_sales, figures.previous_weekly_sales),
        },
        monthly: SalesCard {
            amount: figures.month_sales,
            display: peso_compact(figures.month_sales),
            change: percent_change(figures.month_sales, figures.previous_month_sales),
        },
        months: MONTH_LABELS.to_vec(),
        metrics: vec![
            metric_row("expenses", "In-Store Expenses", false, &figures.expenses),
            metric_row("losses", "Revenue Loss", false, &figures.losses),
            metric_row("sales", "Total Sales", true, &figures.sales),
            metric_row("net_profit", "Net Profit", true, &figures.net_profits),
        ],
        category_sales: CategorySalesView {
            labels: figures
                .category_sales
                .iter()
                .map(|c| c.label.clone())
                .collect(),
            values: figures.category_sales.iter().map(|c| c.sales).collect(),
        },
    };

    Json(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_over_month_length() {
        let values = vec![100.0, 110.0, 110.0, 55.0];
        let changes = month_over_month(&values);
        assert_eq!(changes, vec!["+10.0%", "–", "-50.0%"]);
    }

    #[test]
    fn test_month_over_month_short_series() {
        assert!(month_over_month(&[]).is_empty());
        assert!(month_over_month(&[42.0]).is_empty());
    }
}
