//! Request-side data structures and bounds checking

mod data;
pub mod bounds;

pub use bounds::{check_request, AmountBounds, RequestIssue};
pub use data::{DepositCadence, DepositSchedule, PlanKind, ProductId, ProjectionRequest};
