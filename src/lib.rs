//! # haul-routing
//!
//! Dispatch planning for point-to-point loads: assigns pickup/dropoff jobs
//! to driver routes that start and end at a depot, keeping every route
//! within a maximum round-trip duration.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Problem, Route, Solution)
//! - [`distance`] — Deadhead matrix and depot distance tables
//! - [`evaluation`] — Route distance/feasibility and schedule scoring
//! - [`constructive`] — Shuffled greedy and nearest-neighbor builders
//! - [`search`] — Parallel seed search over the shuffled greedy builder
//! - [`io`] — Problem file parsing and schedule formatting
//! - [`solver`] — Facade tying a problem, its distances and strategies together

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod search;
pub mod solver;

pub use error::{Result, RoutingError};
