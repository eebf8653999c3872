//! Domain model types for load dispatch.
//!
//! Provides points and loads, the problem instance that owns them, driver
//! routes as ordered load sequences, and the solution that groups routes.

mod load;
mod point;
mod problem;
mod route;
mod solution;

pub use load::Load;
pub use point::Point;
pub use problem::Problem;
pub use route::Route;
pub use solution::{Schedules, Solution};
