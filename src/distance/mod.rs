//! Distance tables.
//!
//! Provides a dense distance matrix and the per-problem load/depot tables
//! built on top of it.

mod loads;
mod matrix;

pub use loads::LoadDistances;
pub use matrix::DistanceMatrix;
