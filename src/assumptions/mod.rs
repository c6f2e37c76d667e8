//! Static per-product rule data
//!
//! All rates, floors, payout tables, and contribution tables live here as
//! immutable reference data. `Default` carries the published figures;
//! `from_loaded` applies CSV overrides from [`loader`].

pub mod capitalization;
pub mod growth;
pub mod loader;
pub mod retirement;

pub use capitalization::{AmountRateBrackets, CapitalizationAssumptions, TermPayout, TermPayoutTable, TermRateTiers};
pub use growth::{BusinessRules, FlexRules, GrowthAssumptions, PlusRules};
pub use loader::{AssumptionError, LoadedAssumptions};
pub use retirement::{ContributionRow, RetirementAssumptions, FINAL_AGE, MAX_ENTRY_AGE, MIN_ENTRY_AGE};

/// Benchmark-index growth model used for the comparison curve
#[derive(Debug, Clone)]
pub struct BenchmarkAssumptions {
    /// Annual rate, compounded monthly
    pub annual_rate: f64,
}

impl Default for BenchmarkAssumptions {
    fn default() -> Self {
        Self {
            annual_rate: crate::projection::DEFAULT_BENCHMARK_ANNUAL_RATE,
        }
    }
}

/// Combined assumptions for all products plus the benchmark model
#[derive(Debug, Clone, Default)]
pub struct Assumptions {
    pub growth: GrowthAssumptions,
    pub capitalization: CapitalizationAssumptions,
    pub retirement: RetirementAssumptions,
    pub benchmark: BenchmarkAssumptions,
}

impl Assumptions {
    /// Published brochure figures (same as `Default`)
    pub fn published() -> Self {
        Self::default()
    }

    /// Published figures with CSV overrides applied where present
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Self {
        let mut assumptions = Self::default();
        if let Some(rows) = &loaded.retirement_rows {
            assumptions.retirement = RetirementAssumptions::from_loaded(rows);
        }
        if let Some(payouts) = &loaded.term_payouts {
            assumptions.capitalization.term_fixed = TermPayoutTable::from_loaded(payouts);
        }
        assumptions
    }
}
