//! Projection output shapes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Month-indexed value series for a product curve and its benchmark
///
/// All three vectors have the same length: the effective term in months.
/// A degenerate request yields empty vectors, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSeries {
    /// Month labels: "1M", "2M", ...
    pub months: Vec<String>,

    /// Product curve, one value per month (cents precision)
    pub product_series: Vec<f64>,

    /// Benchmark curve under the same amount and deposit schedule
    pub benchmark_series: Vec<f64>,
}

impl ProjectionSeries {
    /// Series of a given length with month labels pre-filled
    pub fn with_term(term_months: u32) -> Self {
        Self {
            months: month_labels(term_months),
            product_series: Vec::with_capacity(term_months as usize),
            benchmark_series: Vec::with_capacity(term_months as usize),
        }
    }

    /// Zero-length series, the degenerate result for unsupported input
    pub fn empty() -> Self {
        Self::with_term(0)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Retirement contribution grid: 12 calendar-month rows, one column per
/// covered age from (entry age + 6) through the final age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementGrid {
    /// Covered ages, the grid's columns
    pub ages: Vec<u8>,

    /// Calendar month names ("Jan" .. "Dec"), the grid's rows
    pub months: Vec<String>,

    /// values[month][age_column] = monthly contribution (floored to cents)
    pub values: Vec<Vec<f64>>,
}

impl RetirementGrid {
    /// Grid with month rows allocated and no age columns yet
    pub fn empty() -> Self {
        Self {
            ages: Vec::new(),
            months: calendar_month_labels(),
            values: vec![Vec::new(); 12],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }
}

/// Result of one projection: a flat series for most products, a
/// contribution grid for retirement products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectionOutcome {
    Series(ProjectionSeries),
    Grid(RetirementGrid),
}

impl ProjectionOutcome {
    pub fn as_series(&self) -> Option<&ProjectionSeries> {
        match self {
            ProjectionOutcome::Series(series) => Some(series),
            ProjectionOutcome::Grid(_) => None,
        }
    }

    pub fn as_grid(&self) -> Option<&RetirementGrid> {
        match self {
            ProjectionOutcome::Series(_) => None,
            ProjectionOutcome::Grid(grid) => Some(grid),
        }
    }
}

/// Month axis labels: "1M" through "{n}M"
pub fn month_labels(term_months: u32) -> Vec<String> {
    (1..=term_months).map(|m| format!("{m}M")).collect()
}

/// Abbreviated calendar month names for the retirement grid rows
pub fn calendar_month_labels() -> Vec<String> {
    (1..=12)
        .map(|m| {
            // 2000 is an arbitrary non-leap-sensitive anchor; only the
            // month name is used
            NaiveDate::from_ymd_opt(2000, m, 1)
                .map(|d| d.format("%b").to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Round a value to cents (series values)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Floor a value to cents (retirement contributions)
pub fn floor_cents(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
