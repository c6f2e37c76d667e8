//! Projection engine for investment plan calculators
//!
//! Computes month-indexed value series for a fixed set of growth,
//! capitalization, and retirement products, alongside a benchmark-index
//! comparison curve, from a single immutable [`scenario::ProjectionRequest`].
//!
//! The engine is a pure function of its inputs: no I/O, no clock reads,
//! no panics on degenerate input (bad requests degrade to empty results).

pub mod assumptions;
pub mod chart;
pub mod projection;
pub mod scenario;

pub use assumptions::Assumptions;
pub use projection::{ProjectionEngine, ProjectionOutcome, ProjectionSeries, RetirementGrid};
pub use scenario::{DepositCadence, DepositSchedule, PlanKind, ProductId, ProjectionRequest};
