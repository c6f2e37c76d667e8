//! Capitalization product rule sets
//!
//! Term Fixed pays out a tabulated lump sum interpolated linearly over the
//! term; Term Ladder tiers its annual rate by term length; Term Tiered
//! tiers its annual rate by initial-amount bracket.

/// One Term Fixed offering: a term with its reference amount and total payout
#[derive(Debug, Clone, Copy)]
pub struct TermPayout {
    pub term_months: u32,
    /// Initial amount the offering is quoted against
    pub reference_amount: f64,
    /// Total account value paid at the end of the term
    pub total_payout: f64,
}

/// Term Fixed payout table keyed by term length
#[derive(Debug, Clone)]
pub struct TermPayoutTable {
    payouts: Vec<TermPayout>,
}

impl Default for TermPayoutTable {
    fn default() -> Self {
        // Published offerings: shorter terms require larger amounts.
        // The monthly gain is derived as (total - initial) / term.
        Self {
            payouts: vec![
                TermPayout { term_months: 24, reference_amount: 18_000.0, total_payout: 25_200.0 },
                TermPayout { term_months: 36, reference_amount: 15_000.0, total_payout: 24_000.0 },
                TermPayout { term_months: 48, reference_amount: 12_000.0, total_payout: 21_600.0 },
                TermPayout { term_months: 60, reference_amount: 10_000.0, total_payout: 20_000.0 },
            ],
        }
    }
}

impl TermPayoutTable {
    /// Create from loaded CSV data
    pub fn from_loaded(payouts: &[TermPayout]) -> Self {
        Self {
            payouts: payouts.to_vec(),
        }
    }

    /// Terms the product is offered at
    pub fn offered_terms(&self) -> Vec<u32> {
        self.payouts.iter().map(|p| p.term_months).collect()
    }

    /// Total payout for a term, or None when the term is not offered
    pub fn total_payout(&self, term_months: u32) -> Option<f64> {
        self.payouts
            .iter()
            .find(|p| p.term_months == term_months)
            .map(|p| p.total_payout)
    }

    /// Range spanned by the offered initial amounts
    pub fn reference_amount_range(&self) -> Option<(f64, f64)> {
        let min = self
            .payouts
            .iter()
            .map(|p| p.reference_amount)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .payouts
            .iter()
            .map(|p| p.reference_amount)
            .fold(f64::NEG_INFINITY, f64::max);
        if self.payouts.is_empty() {
            None
        } else {
            Some((min, max))
        }
    }

    /// Fixed term coupled to an offered initial amount (the product sells
    /// amount/term pairs; the form picks the term from the amount)
    pub fn fixed_term_for_amount(&self, amount: f64) -> Option<u32> {
        self.payouts
            .iter()
            .find(|p| (p.reference_amount - amount).abs() < 0.01)
            .map(|p| p.term_months)
    }
}

/// Term Ladder annual rate tiers by term length
#[derive(Debug, Clone)]
pub struct TermRateTiers {
    /// Base annual rate for terms without a dedicated tier
    pub base_annual_rate: f64,
    pub min_amount: f64,
    pub max_amount: f64,
    /// (term_months, annual_rate) overrides
    tiers: Vec<(u32, f64)>,
}

impl Default for TermRateTiers {
    fn default() -> Self {
        Self {
            base_annual_rate: 0.20, // 12-month base tier
            min_amount: 5_000.0,
            max_amount: 500_000.0,
            tiers: vec![
                (24, 0.25),
                (36, 0.30),
            ],
        }
    }
}

impl TermRateTiers {
    /// Annual rate for a chosen term; terms without a tier use the base rate
    pub fn annual_rate(&self, term_months: u32) -> f64 {
        self.tiers
            .iter()
            .find(|(term, _)| *term == term_months)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.base_annual_rate)
    }
}

/// Term Tiered annual rate brackets by initial amount
#[derive(Debug, Clone)]
pub struct AmountRateBrackets {
    pub min_amount: f64,
    pub max_amount: f64,
    /// Fixed product term in months
    pub term_months: u32,
}

impl Default for AmountRateBrackets {
    fn default() -> Self {
        Self {
            min_amount: 10_000.0,
            max_amount: 500_000.0,
            term_months: 18,
        }
    }
}

impl AmountRateBrackets {
    /// Annual rate for an initial amount.
    ///
    /// Brackets: [10k, 20k) -> 22%, [20k, 25k) -> 24%, 25k+ -> 26%.
    /// Amounts below 10k land in the 24% bracket; the product's minimum is
    /// enforced by the form, not here, so the lookup keeps that behavior.
    pub fn annual_rate(&self, amount: f64) -> f64 {
        if (10_000.0..20_000.0).contains(&amount) {
            0.22
        } else if amount < 25_000.0 {
            0.24
        } else {
            0.26
        }
    }
}

/// Combined capitalization-plan assumptions
#[derive(Debug, Clone, Default)]
pub struct CapitalizationAssumptions {
    pub term_fixed: TermPayoutTable,
    pub ladder: TermRateTiers,
    pub tiered: AmountRateBrackets,
}
