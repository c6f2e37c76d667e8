//! Advisory request validation
//!
//! Mirrors the bounds the customer-facing form enforces. The engine never
//! rejects a request; callers use these checks to warn before projecting.

use super::data::{PlanKind, ProductId, ProjectionRequest};
use crate::assumptions::{Assumptions, MAX_ENTRY_AGE, MIN_ENTRY_AGE};
use std::fmt;

/// Accepted initial-amount range for a product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountBounds {
    pub min: f64,
    pub max: f64,
}

/// One advisory problem with a request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestIssue {
    AmountBelowMinimum { minimum: f64 },
    AmountAboveMaximum { maximum: f64 },
    TermNotOffered { offered: Vec<u32> },
    MissingAge,
    AgeOutsideEntryBand { min: u8, max: u8 },
}

impl fmt::Display for RequestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestIssue::AmountBelowMinimum { minimum } => {
                write!(f, "initial amount is below the product minimum of {minimum}")
            }
            RequestIssue::AmountAboveMaximum { maximum } => {
                write!(f, "initial amount is above the product maximum of {maximum}")
            }
            RequestIssue::TermNotOffered { offered } => {
                write!(f, "term is not offered for this product (offered: {offered:?})")
            }
            RequestIssue::MissingAge => write!(f, "retirement products require an age"),
            RequestIssue::AgeOutsideEntryBand { min, max } => {
                write!(f, "age is outside the entry band {min}-{max} and will be clamped")
            }
        }
    }
}

/// Amount bounds for a product, when it accepts a free-form amount.
/// Business and retirement products take a fixed required investment.
pub fn amount_bounds(assumptions: &Assumptions, product: ProductId) -> Option<AmountBounds> {
    match product {
        ProductId::GrowthFlex => Some(AmountBounds {
            min: assumptions.growth.flex.min_amount,
            max: assumptions.growth.flex.max_amount,
        }),
        ProductId::GrowthPlus => Some(AmountBounds {
            min: assumptions.growth.plus.floor_amount,
            max: assumptions.growth.plus.max_amount,
        }),
        ProductId::TermFixed => {
            // Offerings are discrete amount/term pairs; bounds span them
            assumptions
                .capitalization
                .term_fixed
                .reference_amount_range()
                .map(|(min, max)| AmountBounds { min, max })
        }
        ProductId::TermLadder => Some(AmountBounds {
            min: assumptions.capitalization.ladder.min_amount,
            max: assumptions.capitalization.ladder.max_amount,
        }),
        ProductId::TermTiered => Some(AmountBounds {
            min: assumptions.capitalization.tiered.min_amount,
            max: assumptions.capitalization.tiered.max_amount,
        }),
        _ => None,
    }
}

/// Terms a product is offered at. Fixed-term products return their single
/// term; the engine overrides the requested term for growth products.
pub fn offered_terms(assumptions: &Assumptions, product: ProductId) -> Vec<u32> {
    match product {
        ProductId::GrowthFlex | ProductId::GrowthPlus | ProductId::GrowthBusiness => vec![12],
        ProductId::TermFixed => assumptions.capitalization.term_fixed.offered_terms(),
        ProductId::TermLadder => vec![12, 24, 36],
        ProductId::TermTiered => vec![assumptions.capitalization.tiered.term_months],
        _ => Vec::new(),
    }
}

/// Collect every advisory issue for a request. An empty result means the
/// form would have accepted the same inputs.
pub fn check_request(request: &ProjectionRequest, assumptions: &Assumptions) -> Vec<RequestIssue> {
    let mut issues = Vec::new();

    if let Some(bounds) = amount_bounds(assumptions, request.product) {
        if request.initial_amount < bounds.min {
            issues.push(RequestIssue::AmountBelowMinimum { minimum: bounds.min });
        } else if request.initial_amount > bounds.max {
            issues.push(RequestIssue::AmountAboveMaximum { maximum: bounds.max });
        }
    }

    match request.product.plan_kind() {
        PlanKind::Retirement => match request.age {
            None => issues.push(RequestIssue::MissingAge),
            Some(age) if !(MIN_ENTRY_AGE..=MAX_ENTRY_AGE).contains(&age) => {
                issues.push(RequestIssue::AgeOutsideEntryBand {
                    min: MIN_ENTRY_AGE,
                    max: MAX_ENTRY_AGE,
                });
            }
            Some(_) => {}
        },
        PlanKind::Capitalization => {
            let offered = offered_terms(assumptions, request.product);
            if !offered.contains(&request.term_months) {
                issues.push(RequestIssue::TermNotOffered { offered });
            }
        }
        // Growth terms are fixed by the engine, nothing to flag
        PlanKind::Growth => {}
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ProjectionRequest;

    fn assumptions() -> Assumptions {
        Assumptions::published()
    }

    #[test]
    fn test_clean_request() {
        let request = ProjectionRequest::new(ProductId::GrowthFlex, 10_000.0, 12);
        assert!(check_request(&request, &assumptions()).is_empty());
    }

    #[test]
    fn test_amount_bounds() {
        let low = ProjectionRequest::new(ProductId::GrowthFlex, 1_000.0, 12);
        let issues = check_request(&low, &assumptions());
        assert_eq!(
            issues,
            vec![RequestIssue::AmountBelowMinimum { minimum: 5_000.0 }]
        );

        let high = ProjectionRequest::new(ProductId::TermTiered, 900_000.0, 18);
        let issues = check_request(&high, &assumptions());
        assert!(issues.contains(&RequestIssue::AmountAboveMaximum { maximum: 500_000.0 }));
    }

    #[test]
    fn test_ladder_bounds_follow_assumptions() {
        let published = assumptions();
        assert_eq!(
            amount_bounds(&published, ProductId::TermLadder),
            Some(AmountBounds {
                min: 5_000.0,
                max: 500_000.0,
            })
        );

        // Overridden tier bounds flow through to request checks
        let mut overridden = published;
        overridden.capitalization.ladder.min_amount = 7_500.0;
        let request = ProjectionRequest::new(ProductId::TermLadder, 6_000.0, 12);
        let issues = check_request(&request, &overridden);
        assert!(issues.contains(&RequestIssue::AmountBelowMinimum { minimum: 7_500.0 }));
    }

    #[test]
    fn test_term_offerings() {
        let request = ProjectionRequest::new(ProductId::TermFixed, 18_000.0, 30);
        let issues = check_request(&request, &assumptions());
        assert_eq!(
            issues,
            vec![RequestIssue::TermNotOffered {
                offered: vec![24, 36, 48, 60]
            }]
        );

        let valid = ProjectionRequest::new(ProductId::TermFixed, 18_000.0, 24);
        assert!(check_request(&valid, &assumptions()).is_empty());
    }

    #[test]
    fn test_retirement_age_checks() {
        let missing = ProjectionRequest::new(ProductId::RetirementGold, 0.0, 12);
        assert_eq!(
            check_request(&missing, &assumptions()),
            vec![RequestIssue::MissingAge]
        );

        let mut out_of_band = ProjectionRequest::new(ProductId::RetirementGold, 0.0, 12);
        out_of_band.age = Some(61);
        assert_eq!(
            check_request(&out_of_band, &assumptions()),
            vec![RequestIssue::AgeOutsideEntryBand { min: 24, max: 59 }]
        );

        let mut fine = ProjectionRequest::new(ProductId::RetirementGold, 0.0, 12);
        fine.age = Some(35);
        assert!(check_request(&fine, &assumptions()).is_empty());
    }
}
