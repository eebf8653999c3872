//! Route evaluation and schedule scoring.
//!
//! - [`RouteEvaluator`] — round-trip distance and feasibility from cached tables
//! - [`ScheduleScorer`] — ranks finished schedules; [`DriverCostScorer`] is the default

mod evaluator;
mod scorer;

pub use evaluator::{RouteEvaluator, Violation};
pub use scorer::{DriverCostScorer, RouteCost, ScheduleCost, ScheduleScorer};
