//! Solver configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Parameters shared by every strategy.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use haul_routing::config::SolverConfig;
///
/// let config: SolverConfig = serde_json::from_str(r#"{ "seed_count": 50 }"#).unwrap();
/// assert_eq!(config.seed_count, 50);
/// assert_eq!(config.max_route_duration, 720.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Longest allowed depot-to-depot route, in distance units (minutes).
    pub max_route_duration: f64,
    /// Fixed cost charged per driver by the scorer.
    pub driver_cost: f64,
    /// Number of seeds tried by the seed search, starting at 0.
    pub seed_count: u64,
    /// Worker threads for the seed search; `None` uses the global pool.
    pub threads: Option<usize>,
}

impl SolverConfig {
    /// A 12-hour shift.
    pub const DEFAULT_MAX_ROUTE_DURATION: f64 = 12.0 * 60.0;
    /// Seeds tried by default.
    pub const DEFAULT_SEED_COUNT: u64 = 200;

    /// Reads a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| RoutingError::Config(e.to_string()))
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.max_route_duration.is_finite() || self.max_route_duration <= 0.0 {
            return Err(RoutingError::Config(format!(
                "max_route_duration must be positive, got {}",
                self.max_route_duration
            )));
        }
        if !self.driver_cost.is_finite() || self.driver_cost < 0.0 {
            return Err(RoutingError::Config(format!(
                "driver_cost must be non-negative, got {}",
                self.driver_cost
            )));
        }
        if self.seed_count == 0 {
            return Err(RoutingError::Config("seed_count must be at least 1".into()));
        }
        if self.threads == Some(0) {
            return Err(RoutingError::Config("threads must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_route_duration: Self::DEFAULT_MAX_ROUTE_DURATION,
            driver_cost: crate::evaluation::DriverCostScorer::DEFAULT_DRIVER_COST,
            seed_count: Self::DEFAULT_SEED_COUNT,
            threads: None,
        }
    }
}
