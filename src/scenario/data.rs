//! Core request types: products, deposit schedules, and the projection request

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plan family a product belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanKind {
    Growth,
    Capitalization,
    Retirement,
}

/// Closed set of supported products
///
/// Growth products run a 12-month projection, capitalization products a
/// selectable or fixed term, and retirement products produce a
/// contribution grid instead of a value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductId {
    GrowthFlex,
    GrowthPlus,
    GrowthBusiness,
    TermFixed,
    TermLadder,
    TermTiered,
    RetirementPlatinum,
    RetirementGold,
    RetirementSilver,
    RetirementLimited,
}

impl ProductId {
    /// All supported products, in display order
    pub const ALL: [ProductId; 10] = [
        ProductId::GrowthFlex,
        ProductId::GrowthPlus,
        ProductId::GrowthBusiness,
        ProductId::TermFixed,
        ProductId::TermLadder,
        ProductId::TermTiered,
        ProductId::RetirementPlatinum,
        ProductId::RetirementGold,
        ProductId::RetirementSilver,
        ProductId::RetirementLimited,
    ];

    /// Plan family for this product
    pub fn plan_kind(self) -> PlanKind {
        match self {
            ProductId::GrowthFlex | ProductId::GrowthPlus | ProductId::GrowthBusiness => {
                PlanKind::Growth
            }
            ProductId::TermFixed | ProductId::TermLadder | ProductId::TermTiered => {
                PlanKind::Capitalization
            }
            ProductId::RetirementPlatinum
            | ProductId::RetirementGold
            | ProductId::RetirementSilver
            | ProductId::RetirementLimited => PlanKind::Retirement,
        }
    }

    /// Wire name (matches the serde representation)
    pub fn as_str(self) -> &'static str {
        match self {
            ProductId::GrowthFlex => "growthFlex",
            ProductId::GrowthPlus => "growthPlus",
            ProductId::GrowthBusiness => "growthBusiness",
            ProductId::TermFixed => "termFixed",
            ProductId::TermLadder => "termLadder",
            ProductId::TermTiered => "termTiered",
            ProductId::RetirementPlatinum => "retirementPlatinum",
            ProductId::RetirementGold => "retirementGold",
            ProductId::RetirementSilver => "retirementSilver",
            ProductId::RetirementLimited => "retirementLimited",
        }
    }

    /// Human-readable name for chart legends
    pub fn display_name(self) -> &'static str {
        match self {
            ProductId::GrowthFlex => "Growth Flex",
            ProductId::GrowthPlus => "Growth Plus",
            ProductId::GrowthBusiness => "Growth Business",
            ProductId::TermFixed => "Term Fixed",
            ProductId::TermLadder => "Term Ladder",
            ProductId::TermTiered => "Term Tiered",
            ProductId::RetirementPlatinum => "Retirement Platinum",
            ProductId::RetirementGold => "Retirement Gold",
            ProductId::RetirementSilver => "Retirement Silver",
            ProductId::RetirementLimited => "Retirement Limited",
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown product '{s}'"))
    }
}

/// Recurring deposit cadence, serialized as its month count (1, 3, or 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DepositCadence {
    Monthly,
    Quarterly,
    Semiannual,
}

impl DepositCadence {
    /// Months between deposits
    pub fn months(self) -> u32 {
        match self {
            DepositCadence::Monthly => 1,
            DepositCadence::Quarterly => 3,
            DepositCadence::Semiannual => 6,
        }
    }

    /// Parse from a month count
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            1 => Some(DepositCadence::Monthly),
            3 => Some(DepositCadence::Quarterly),
            6 => Some(DepositCadence::Semiannual),
            _ => None,
        }
    }
}

impl TryFrom<u32> for DepositCadence {
    type Error = String;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        DepositCadence::from_months(months)
            .ok_or_else(|| format!("cadence must be 1, 3, or 6 months, got {months}"))
    }
}

impl From<DepositCadence> for u32 {
    fn from(cadence: DepositCadence) -> u32 {
        cadence.months()
    }
}

/// Optional recurring contribution attached to a single request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositSchedule {
    /// Amount added at each cadence boundary
    pub amount: f64,

    /// Months between deposits
    #[serde(rename = "cadenceMonths")]
    pub cadence: DepositCadence,
}

impl DepositSchedule {
    pub fn new(amount: f64, cadence: DepositCadence) -> Self {
        Self { amount, cadence }
    }

    /// Whether a deposit lands at the given month under the shared
    /// boundary rule: every Nth month after the first (N+1, 2N+1, ...)
    pub fn due_at(&self, month: u32) -> bool {
        self.amount > 0.0 && month > 1 && (month - 1) % self.cadence.months() == 0
    }
}

/// Immutable inputs for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Product to project
    pub product: ProductId,

    /// Starting amount (products with floors clamp, others pass through)
    pub initial_amount: f64,

    /// Requested term; fixed-term products override this
    pub term_months: u32,

    /// Current age, required by retirement products only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,

    /// Optional recurring deposit schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit: Option<DepositSchedule>,

    /// true = report full balance, false = report cumulative gain only
    pub show_gross_balance: bool,
}

impl ProjectionRequest {
    /// Request with no deposits, no age, gross display
    pub fn new(product: ProductId, initial_amount: f64, term_months: u32) -> Self {
        Self {
            product,
            initial_amount,
            term_months,
            age: None,
            deposit: None,
            show_gross_balance: true,
        }
    }
}
