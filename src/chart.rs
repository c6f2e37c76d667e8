//! Presentation adapter: projection outcomes to chart-series descriptors
//!
//! Pure formatting. The adapter labels and colors the computed values for
//! a charting frontend; it never alters the numbers themselves.

use crate::projection::{ProjectionOutcome, ProjectionSeries, RetirementGrid};
use crate::scenario::ProductId;
use serde::{Deserialize, Serialize};

/// Gray used for the benchmark line
pub const BENCHMARK_COLOR: &str = "#adaba3";

/// Blue palette cycled across product/grid series
pub const SERIES_PALETTE: [&str; 12] = [
    "#1B3B6F", "#4169E1", "#0047AB", "#102542", "#3A5FCD", "#4682B4",
    "#3F00FF", "#007FFF", "#0F52BA", "#27408B", "#00008B", "#2C2F88",
];

/// Legend name for the benchmark curve
pub const BENCHMARK_SERIES_NAME: &str = "S&P 500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Line,
    Bar,
}

/// One renderable series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub name: String,
    pub kind: SeriesKind,
    /// Explicit color, or None to let the frontend take the next palette slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stack group for bar series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Formatted label for the final data point, e.g. "$25,200.00"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_label: Option<String>,
    pub data: Vec<f64>,
}

/// A complete chart: x axis labels plus the series drawn over them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub x_axis: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Build a chart model from a projection outcome
pub fn chart_model(outcome: &ProjectionOutcome, product: ProductId) -> ChartModel {
    match outcome {
        ProjectionOutcome::Series(series) => series_chart(series, product),
        ProjectionOutcome::Grid(grid) => grid_chart(grid),
    }
}

fn series_chart(series: &ProjectionSeries, product: ProductId) -> ChartModel {
    ChartModel {
        x_axis: series.months.clone(),
        series: vec![
            ChartSeries {
                name: BENCHMARK_SERIES_NAME.to_string(),
                kind: SeriesKind::Line,
                color: Some(BENCHMARK_COLOR.to_string()),
                stack: None,
                end_label: series.benchmark_series.last().map(|v| currency_label(*v)),
                data: series.benchmark_series.clone(),
            },
            ChartSeries {
                name: product.display_name().to_string(),
                kind: SeriesKind::Line,
                color: Some(SERIES_PALETTE[0].to_string()),
                stack: None,
                end_label: series.product_series.last().map(|v| currency_label(*v)),
                data: series.product_series.clone(),
            },
        ],
    }
}

fn grid_chart(grid: &RetirementGrid) -> ChartModel {
    // One stacked bar series per calendar month, ages on the x axis
    let series = grid
        .months
        .iter()
        .zip(&grid.values)
        .enumerate()
        .map(|(index, (month, values))| ChartSeries {
            name: month.clone(),
            kind: SeriesKind::Bar,
            color: Some(SERIES_PALETTE[index % SERIES_PALETTE.len()].to_string()),
            stack: Some("total".to_string()),
            end_label: None,
            data: values.clone(),
        })
        .collect();

    ChartModel {
        x_axis: grid.ages.iter().map(|age| age.to_string()).collect(),
        series,
    }
}

/// "$" plus the value with thousands separators and two decimals
pub fn currency_label(value: f64) -> String {
    format!("${}", format_with_commas(value))
}

fn format_with_commas(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}
