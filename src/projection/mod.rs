//! Projection engine for plan calculators

mod benchmark;
mod engine;
mod series;

pub use benchmark::compounding_series;
pub use engine::ProjectionEngine;
pub use series::{ProjectionOutcome, ProjectionSeries, RetirementGrid};

// ============================================================================
// Default Benchmark Rate
// ============================================================================
// The comparison curve plotted next to every product series models a broad
// equity index: a single fixed annual rate compounded monthly, with the
// request's deposits added at the same cadence as the product curve.

/// Default annual growth rate for the benchmark comparison curve (15%)
pub const DEFAULT_BENCHMARK_ANNUAL_RATE: f64 = 0.15;
