//! Growth product rule sets
//!
//! Each growth product has a distinct earnings model: Flex compounds a
//! rate on the running balance, Plus pays a fixed monthly rate on the
//! initial amount only, and Business pays a flat monthly gain.

/// Growth Flex: rate compounded monthly on the running balance
#[derive(Debug, Clone)]
pub struct FlexRules {
    /// Annual rate, applied as rate/12 each month
    pub annual_rate: f64,
    /// Minimum accepted initial amount (advisory, engine passes through)
    pub min_amount: f64,
    /// Maximum accepted initial amount (advisory)
    pub max_amount: f64,
}

impl Default for FlexRules {
    fn default() -> Self {
        Self {
            annual_rate: 0.20, // 20% published annual rate
            min_amount: 5_000.0,
            max_amount: 1_000_000.0,
        }
    }
}

/// Growth Plus: fixed monthly rate on the initial amount, principal never changes
#[derive(Debug, Clone)]
pub struct PlusRules {
    /// Fixed monthly rate on the (clamped) initial amount
    pub monthly_rate: f64,
    /// Initial amounts below this floor are silently raised to it
    pub floor_amount: f64,
    /// Maximum accepted initial amount (advisory)
    pub max_amount: f64,
}

impl Default for PlusRules {
    fn default() -> Self {
        Self {
            monthly_rate: 0.0167, // 1.67% per month
            floor_amount: 31_000.0,
            max_amount: 1_000_000.0,
        }
    }
}

impl PlusRules {
    /// Apply the product floor. Amounts below the floor are raised, not rejected.
    pub fn clamp_amount(&self, amount: f64) -> f64 {
        amount.max(self.floor_amount)
    }
}

/// Growth Business: flat absolute monthly gain on a fixed required investment
#[derive(Debug, Clone)]
pub struct BusinessRules {
    /// Fixed gain credited each month, not rate-based
    pub monthly_gain: f64,
    /// Required investment shown to the customer
    pub required_investment: f64,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            monthly_gain: 2_500.0,
            required_investment: 50_000.0,
        }
    }
}

/// Combined growth-plan assumptions
#[derive(Debug, Clone, Default)]
pub struct GrowthAssumptions {
    pub flex: FlexRules,
    pub plus: PlusRules,
    pub business: BusinessRules,
}
