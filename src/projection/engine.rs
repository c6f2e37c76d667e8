//! Per-product projection recurrences
//!
//! Each product family keeps its own closed-form monthly recurrence; the
//! rate models and capitalization timing differ enough that a single
//! generalized formula would misstate at least one of them. The engine is
//! pure and total: degenerate input produces an empty series or grid.

use super::benchmark::compounding_series;
use super::series::{
    floor_cents, round_cents, ProjectionOutcome, ProjectionSeries, RetirementGrid,
};
use crate::assumptions::{Assumptions, FINAL_AGE};
use crate::scenario::{ProductId, ProjectionRequest};
use log::debug;

/// Fixed term for every growth product
const GROWTH_TERM_MONTHS: u32 = 12;

/// One deposit cohort for the Term Ladder product: each deposit accrues
/// on its own principal until the annual rollup folds interest in
#[derive(Debug, Clone, Copy)]
struct Cohort {
    principal: f64,
    accrued: f64,
}

/// Stateless projection engine over a fixed set of assumptions
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Engine over the published brochure figures
    pub fn published() -> Self {
        Self::new(Assumptions::published())
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Project one request. Pure and deterministic: identical requests
    /// yield identical outcomes, and no input causes a panic or error.
    pub fn project(&self, request: &ProjectionRequest) -> ProjectionOutcome {
        debug!(
            "projecting product={} amount={} term={}m gross={}",
            request.product, request.initial_amount, request.term_months, request.show_gross_balance
        );

        match request.product {
            ProductId::GrowthFlex => ProjectionOutcome::Series(self.growth_flex(request)),
            ProductId::GrowthPlus => ProjectionOutcome::Series(self.growth_plus(request)),
            ProductId::GrowthBusiness => ProjectionOutcome::Series(self.growth_business(request)),
            ProductId::TermFixed => ProjectionOutcome::Series(self.term_fixed(request)),
            ProductId::TermLadder => ProjectionOutcome::Series(self.term_ladder(request)),
            ProductId::TermTiered => ProjectionOutcome::Series(self.term_tiered(request)),
            ProductId::RetirementPlatinum
            | ProductId::RetirementGold
            | ProductId::RetirementSilver
            | ProductId::RetirementLimited => {
                ProjectionOutcome::Grid(self.retirement_grid(request))
            }
        }
    }

    fn benchmark(
        &self,
        initial_amount: f64,
        term_months: u32,
        request: &ProjectionRequest,
        with_deposits: bool,
    ) -> Vec<f64> {
        let deposit = if with_deposits {
            request.deposit.as_ref()
        } else {
            None
        };
        compounding_series(
            initial_amount,
            term_months,
            self.assumptions.benchmark.annual_rate,
            deposit,
            request.show_gross_balance,
        )
    }

    /// Growth Flex: annual rate compounded monthly on the running balance,
    /// deposits join the balance at each cadence boundary after month 1
    fn growth_flex(&self, request: &ProjectionRequest) -> ProjectionSeries {
        let mut series = ProjectionSeries::with_term(GROWTH_TERM_MONTHS);
        series.product_series = compounding_series(
            request.initial_amount,
            GROWTH_TERM_MONTHS,
            self.assumptions.growth.flex.annual_rate,
            request.deposit.as_ref(),
            request.show_gross_balance,
        );
        series.benchmark_series =
            self.benchmark(request.initial_amount, GROWTH_TERM_MONTHS, request, true);
        series
    }

    /// Growth Plus: fixed monthly rate on the floored initial amount only;
    /// gains accumulate additively and the principal never changes
    fn growth_plus(&self, request: &ProjectionRequest) -> ProjectionSeries {
        let rules = &self.assumptions.growth.plus;
        let amount = rules.clamp_amount(request.initial_amount);
        let monthly_gain = amount * rules.monthly_rate;

        let mut series = ProjectionSeries::with_term(GROWTH_TERM_MONTHS);
        let mut accrued = 0.0;
        for _month in 1..=GROWTH_TERM_MONTHS {
            accrued += monthly_gain;
            let value = if request.show_gross_balance {
                amount + accrued
            } else {
                accrued
            };
            series.product_series.push(round_cents(value));
        }
        // Benchmark runs on the clamped amount; the floor applies to the
        // whole comparison, and this product takes no deposits
        series.benchmark_series = self.benchmark(amount, GROWTH_TERM_MONTHS, request, false);
        series
    }

    /// Growth Business: flat absolute gain each month, no rate involved
    fn growth_business(&self, request: &ProjectionRequest) -> ProjectionSeries {
        let monthly_gain = self.assumptions.growth.business.monthly_gain;

        let mut series = ProjectionSeries::with_term(GROWTH_TERM_MONTHS);
        let mut accrued = 0.0;
        for _month in 1..=GROWTH_TERM_MONTHS {
            accrued += monthly_gain;
            let value = if request.show_gross_balance {
                request.initial_amount + accrued
            } else {
                accrued
            };
            series.product_series.push(round_cents(value));
        }
        series.benchmark_series =
            self.benchmark(request.initial_amount, GROWTH_TERM_MONTHS, request, false);
        series
    }

    /// Term Fixed: lump-sum payout from the term table, accrued linearly.
    /// A term outside the table yields an empty series.
    fn term_fixed(&self, request: &ProjectionRequest) -> ProjectionSeries {
        let term = request.term_months;
        let total = match self.assumptions.capitalization.term_fixed.total_payout(term) {
            Some(total) => total,
            None => {
                debug!("term_fixed: no payout offered at {term}m, returning empty series");
                return ProjectionSeries::empty();
            }
        };

        let monthly_gain = (total - request.initial_amount) / term as f64;
        let mut series = ProjectionSeries::with_term(term);
        let mut accrued = 0.0;
        for _month in 1..=term {
            accrued += monthly_gain;
            let value = if request.show_gross_balance {
                request.initial_amount + accrued
            } else {
                accrued
            };
            series.product_series.push(round_cents(value));
        }
        series.benchmark_series = self.benchmark(request.initial_amount, term, request, false);
        series
    }

    /// Term Ladder: annual rate tiered by term; every deposit opens its
    /// own cohort, and all cohorts capitalize their accrued interest into
    /// principal every 12th month
    fn term_ladder(&self, request: &ProjectionRequest) -> ProjectionSeries {
        let term = request.term_months;
        let monthly_rate = self.assumptions.capitalization.ladder.annual_rate(term) / 12.0;

        let mut cohorts = vec![Cohort {
            principal: request.initial_amount,
            accrued: 0.0,
        }];
        let mut total_value = request.initial_amount;
        let mut contributed = request.initial_amount;

        let mut series = ProjectionSeries::with_term(term);
        for month in 1..=term {
            let mut monthly_gain = 0.0;
            for cohort in &mut cohorts {
                let interest = cohort.principal * monthly_rate;
                cohort.accrued += interest;
                monthly_gain += interest;
            }
            total_value += monthly_gain;

            if let Some(deposit) = &request.deposit {
                if deposit.due_at(month) {
                    cohorts.push(Cohort {
                        principal: deposit.amount,
                        accrued: 0.0,
                    });
                    contributed += deposit.amount;
                    total_value += deposit.amount;
                }
            }

            let value = if request.show_gross_balance {
                total_value
            } else {
                total_value - contributed
            };
            series.product_series.push(round_cents(value));

            // Annual capitalization across every cohort
            if month % 12 == 0 {
                for cohort in &mut cohorts {
                    cohort.principal += cohort.accrued;
                    cohort.accrued = 0.0;
                }
            }
        }
        series.benchmark_series = self.benchmark(request.initial_amount, term, request, true);
        series
    }

    /// Term Tiered: annual rate bracketed by initial amount; one principal
    /// pool, deposits join it at cadence boundaries, and the year's accrued
    /// interest rolls into principal every 12th month
    fn term_tiered(&self, request: &ProjectionRequest) -> ProjectionSeries {
        let term = request.term_months;
        let monthly_rate = self
            .assumptions
            .capitalization
            .tiered
            .annual_rate(request.initial_amount)
            / 12.0;

        let mut principal = request.initial_amount;
        let mut year_interest = 0.0;
        let mut contributed = request.initial_amount;

        let mut series = ProjectionSeries::with_term(term);
        for month in 1..=term {
            year_interest += principal * monthly_rate;

            // Deposits show in this month's balance but accrue from the next
            if let Some(deposit) = &request.deposit {
                if deposit.due_at(month) {
                    principal += deposit.amount;
                    contributed += deposit.amount;
                }
            }

            let balance = principal + year_interest;
            let value = if request.show_gross_balance {
                balance
            } else {
                balance - contributed
            };
            series.product_series.push(round_cents(value));

            if month % 12 == 0 {
                principal += year_interest;
                year_interest = 0.0;
            }
        }
        series.benchmark_series = self.benchmark(request.initial_amount, term, request, true);
        series
    }

    /// Retirement grid: monthly contribution per covered age, no accrual
    /// simulation and no benchmark. Missing age yields an empty grid.
    fn retirement_grid(&self, request: &ProjectionRequest) -> RetirementGrid {
        let age = match request.age {
            Some(age) => age,
            None => {
                debug!("retirement: request has no age, returning empty grid");
                return RetirementGrid::empty();
            }
        };
        let entry_age = self.assumptions.retirement.clamp_entry_age(age);

        let mut grid = RetirementGrid::empty();
        for covered_age in (entry_age + 6)..=FINAL_AGE {
            let monthly = self
                .assumptions
                .retirement
                .monthly_contribution(request.product, covered_age);
            for month_row in grid.values.iter_mut() {
                month_row.push(floor_cents(monthly));
            }
            grid.ages.push(covered_age);
        }
        grid
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{DepositCadence, DepositSchedule};
    use approx::assert_abs_diff_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::published()
    }

    fn series_for(request: &ProjectionRequest) -> ProjectionSeries {
        engine()
            .project(request)
            .as_series()
            .expect("expected a flat series")
            .clone()
    }

    #[test]
    fn test_growth_flex_compounding() {
        let request = ProjectionRequest::new(ProductId::GrowthFlex, 10_000.0, 12);
        let series = series_for(&request);

        assert_eq!(series.product_series.len(), 12);
        assert_eq!(series.benchmark_series.len(), 12);
        let monthly_rate = 0.20 / 12.0;
        assert_abs_diff_eq!(
            series.product_series[0],
            10_000.0 * (1.0 + monthly_rate),
            epsilon = 0.01
        );
        assert_abs_diff_eq!(
            series.product_series[11],
            10_000.0 * (1.0 + monthly_rate).powi(12),
            epsilon = 0.01
        );
    }

    #[test]
    fn test_growth_flex_ignores_requested_term() {
        let request = ProjectionRequest::new(ProductId::GrowthFlex, 10_000.0, 36);
        let series = series_for(&request);
        // Fixed 12-month product
        assert_eq!(series.product_series.len(), 12);
        assert_eq!(series.months.len(), 12);
    }

    #[test]
    fn test_growth_plus_floor_and_fixed_gain() {
        // 10k is below the 31k floor: both curves run on the floored amount
        let request = ProjectionRequest::new(ProductId::GrowthPlus, 10_000.0, 12);
        let series = series_for(&request);

        let monthly_gain = 31_000.0 * 0.0167;
        assert_abs_diff_eq!(series.product_series[0], 31_000.0 + monthly_gain, epsilon = 0.01);
        // Gains are additive on the initial amount, never compounded
        assert_abs_diff_eq!(
            series.product_series[11],
            31_000.0 + 12.0 * monthly_gain,
            epsilon = 0.01
        );
        assert_abs_diff_eq!(
            series.benchmark_series[0],
            31_000.0 * (1.0 + 0.15 / 12.0),
            epsilon = 0.01
        );
    }

    #[test]
    fn test_growth_business_flat_gain() {
        let mut request = ProjectionRequest::new(ProductId::GrowthBusiness, 50_000.0, 12);
        request.show_gross_balance = false;
        let series = series_for(&request);

        assert_abs_diff_eq!(series.product_series[0], 2_500.0, epsilon = 0.01);
        assert_abs_diff_eq!(series.product_series[11], 30_000.0, epsilon = 0.01);
    }

    #[test]
    fn test_term_fixed_linear_payout() {
        let request = ProjectionRequest::new(ProductId::TermFixed, 18_000.0, 24);
        let series = series_for(&request);

        assert_eq!(series.product_series.len(), 24);
        // (25,200 - 18,000) / 24 = 300 per month, linear
        assert_abs_diff_eq!(series.product_series[0], 18_300.0, epsilon = 0.01);
        assert_abs_diff_eq!(series.product_series[23], 25_200.0, epsilon = 0.01);
    }

    #[test]
    fn test_term_fixed_unknown_term_is_empty() {
        let request = ProjectionRequest::new(ProductId::TermFixed, 18_000.0, 30);
        let series = series_for(&request);
        assert!(series.is_empty());
    }

    #[test]
    fn test_term_ladder_cohorts_and_rollup() {
        let mut request = ProjectionRequest::new(ProductId::TermLadder, 12_000.0, 24);
        request.deposit = Some(DepositSchedule::new(600.0, DepositCadence::Semiannual));
        let series = series_for(&request);

        assert_eq!(series.product_series.len(), 24);
        // 24-month tier pays 25% annually
        let monthly_rate = 0.25 / 12.0;
        assert_abs_diff_eq!(
            series.product_series[0],
            12_000.0 * (1.0 + monthly_rate),
            epsilon = 0.01
        );
        // Deposits land at months 7, 13, 19 and open fresh cohorts; the
        // month-7 value carries the new deposit without any accrual on it
        let month6 = 12_000.0 + 6.0 * 12_000.0 * monthly_rate;
        let month7 = month6 + 12_000.0 * monthly_rate + 600.0;
        assert_abs_diff_eq!(series.product_series[6], month7, epsilon = 0.01);
    }

    #[test]
    fn test_term_ladder_annual_capitalization() {
        // No deposits: single cohort, simple accrual within the year,
        // compounding at the year boundary
        let request = ProjectionRequest::new(ProductId::TermLadder, 10_000.0, 24);
        let series = series_for(&request);

        let monthly_rate = 0.25 / 12.0;
        let year1 = 10_000.0 * (1.0 + 12.0 * monthly_rate);
        assert_abs_diff_eq!(series.product_series[11], year1, epsilon = 0.01);
        // Month 13 accrues on the capitalized balance
        assert_abs_diff_eq!(
            series.product_series[12],
            year1 * (1.0 + monthly_rate),
            epsilon = 0.01
        );
    }

    #[test]
    fn test_term_tiered_annual_rollup_invariant() {
        let request = ProjectionRequest::new(ProductId::TermTiered, 12_000.0, 18);
        let series = series_for(&request);

        assert_eq!(series.product_series.len(), 18);
        // 12k sits in the 22% bracket
        let monthly_rate = 0.22 / 12.0;
        assert_abs_diff_eq!(
            series.product_series[0],
            12_000.0 * (1.0 + monthly_rate),
            epsilon = 0.01
        );
        // Month 13's accrual base equals the month-12 balance
        assert_abs_diff_eq!(
            series.product_series[12],
            series.product_series[11] * (1.0 + monthly_rate),
            epsilon = 0.01
        );
    }

    #[test]
    fn test_term_tiered_bracket_rates() {
        let low = ProjectionRequest::new(ProductId::TermTiered, 10_000.0, 18);
        let high = ProjectionRequest::new(ProductId::TermTiered, 30_000.0, 18);

        let low_series = series_for(&low);
        let high_series = series_for(&high);
        assert_abs_diff_eq!(
            low_series.product_series[0],
            10_000.0 * (1.0 + 0.22 / 12.0),
            epsilon = 0.01
        );
        assert_abs_diff_eq!(
            high_series.product_series[0],
            30_000.0 * (1.0 + 0.26 / 12.0),
            epsilon = 0.01
        );
    }

    #[test]
    fn test_retirement_grid_coverage() {
        let mut request = ProjectionRequest::new(ProductId::RetirementGold, 0.0, 12);
        request.age = Some(30);
        let outcome = engine().project(&request);
        let grid = outcome.as_grid().expect("expected a grid");

        // Ages 36..=65 inclusive: 30 columns, 12 month rows each
        assert_eq!(grid.ages.len(), 30);
        assert_eq!(grid.ages.first(), Some(&36));
        assert_eq!(grid.ages.last(), Some(&65));
        assert_eq!(grid.values.len(), 12);
        for month_row in &grid.values {
            assert_eq!(month_row.len(), 30);
        }
        // Contribution at age 36 from the gold tier, constant across months
        assert_abs_diff_eq!(grid.values[0][0], 170.95, epsilon = 0.001);
        assert_eq!(grid.values[0][0], grid.values[11][0]);
    }

    #[test]
    fn test_retirement_out_of_band_age_clamps() {
        let mut request = ProjectionRequest::new(ProductId::RetirementPlatinum, 0.0, 12);
        request.age = Some(63);
        let outcome = engine().project(&request);
        let grid = outcome.as_grid().unwrap();

        // Out-of-band entry age treated as the minimum (24): ages 30..=65
        assert_eq!(grid.ages.first(), Some(&30));
        assert_eq!(grid.ages.len(), 36);
    }

    #[test]
    fn test_retirement_missing_age_is_empty() {
        let request = ProjectionRequest::new(ProductId::RetirementSilver, 0.0, 12);
        let outcome = engine().project(&request);
        let grid = outcome.as_grid().unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.months.len(), 12);
    }

    #[test]
    fn test_idempotence() {
        let mut request = ProjectionRequest::new(ProductId::TermLadder, 10_000.0, 36);
        request.deposit = Some(DepositSchedule::new(250.0, DepositCadence::Monthly));

        let first = engine().project(&request);
        let second = engine().project(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn test_gross_toggle_changes_values_only() {
        let mut gross = ProjectionRequest::new(ProductId::GrowthFlex, 10_000.0, 12);
        gross.deposit = Some(DepositSchedule::new(500.0, DepositCadence::Quarterly));
        let mut net = gross.clone();
        net.show_gross_balance = false;

        let gross_series = series_for(&gross);
        let net_series = series_for(&net);

        assert_eq!(gross_series.months, net_series.months);
        assert_eq!(
            gross_series.product_series.len(),
            net_series.product_series.len()
        );
        assert_eq!(
            gross_series.benchmark_series.len(),
            net_series.benchmark_series.len()
        );
        // Gross minus net equals contributed capital, on both curves
        let contributed_month1 = 10_000.0;
        assert_abs_diff_eq!(
            gross_series.product_series[0] - net_series.product_series[0],
            contributed_month1,
            epsilon = 0.01
        );
        let contributed_month12 = 10_000.0 + 3.0 * 500.0;
        assert_abs_diff_eq!(
            gross_series.benchmark_series[11] - net_series.benchmark_series[11],
            contributed_month12,
            epsilon = 0.01
        );
    }
}
