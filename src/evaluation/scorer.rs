//! Official schedule scoring.
//!
//! Ranks finished schedules independently of the cached distance tables:
//! every driven leg is recomputed from the load geometry, and each driver
//! carries a fixed cost on top of the distance driven.

use serde::Serialize;

use crate::error::{Result, RoutingError};
use crate::models::{Point, Problem};

/// Driven distance of one driver's schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCost {
    /// Load ids in haul order.
    pub load_ids: Vec<usize>,
    /// Depot-to-depot distance driven.
    pub distance: f64,
}

/// Score of a full set of schedules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleCost {
    /// Fixed driver cost plus total distance driven.
    pub total_cost: f64,
    /// Per-driver breakdown, in schedule order.
    pub routes: Vec<RouteCost>,
}

impl ScheduleCost {
    /// Total distance driven by all drivers.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.distance).sum()
    }
}

/// Scores schedules for ranking.
///
/// Implementations are shared by reference across seed-search workers.
pub trait ScheduleScorer: Send + Sync {
    /// Scores `schedules` against `problem`.
    ///
    /// Fails if the schedules do not serve every load exactly once.
    fn score(&self, problem: &Problem, schedules: &[Vec<usize>]) -> Result<ScheduleCost>;
}

/// Scores schedules as `driver_cost × drivers + total distance`.
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point, Problem};
/// use haul_routing::evaluation::{DriverCostScorer, ScheduleScorer};
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(0.0, 3.0), Point::new(4.0, 3.0)),
/// ])
/// .unwrap();
/// let cost = DriverCostScorer::default().score(&problem, &[vec![1]]).unwrap();
/// assert!((cost.total_cost - 512.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverCostScorer {
    driver_cost: f64,
}

impl DriverCostScorer {
    /// Fixed cost charged per driver by default.
    pub const DEFAULT_DRIVER_COST: f64 = 500.0;

    /// Creates a scorer charging `driver_cost` per driver.
    pub fn new(driver_cost: f64) -> Self {
        Self { driver_cost }
    }

    /// Fixed cost per driver.
    pub fn driver_cost(&self) -> f64 {
        self.driver_cost
    }

    fn driven_distance(problem: &Problem, load_ids: &[usize]) -> f64 {
        let depot = problem.depot();
        let mut position: Point = depot;
        let mut distance = 0.0;
        for &id in load_ids {
            let load = problem.load(id);
            distance += position.distance_to(&load.pickup());
            distance += load.pickup().distance_to(&load.dropoff());
            position = load.dropoff();
        }
        distance + position.distance_to(&depot)
    }
}

impl Default for DriverCostScorer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DRIVER_COST)
    }
}

impl ScheduleScorer for DriverCostScorer {
    fn score(&self, problem: &Problem, schedules: &[Vec<usize>]) -> Result<ScheduleCost> {
        let mut served = vec![false; problem.len()];

        for (driver, schedule) in schedules.iter().enumerate() {
            if schedule.is_empty() {
                return Err(RoutingError::InvalidSchedule(format!(
                    "driver {} has no loads",
                    driver + 1
                )));
            }
            for &id in schedule {
                if problem.get(id).is_none() {
                    return Err(RoutingError::InvalidSchedule(format!(
                        "driver {} references unknown load {id}",
                        driver + 1
                    )));
                }
                if std::mem::replace(&mut served[id - 1], true) {
                    return Err(RoutingError::InvalidSchedule(format!(
                        "load {id} is scheduled more than once"
                    )));
                }
            }
        }

        let missing: Vec<usize> = problem.load_ids().filter(|id| !served[id - 1]).collect();
        if !missing.is_empty() {
            return Err(RoutingError::InvalidSchedule(format!(
                "loads never scheduled: {missing:?}"
            )));
        }

        let routes: Vec<RouteCost> = schedules
            .iter()
            .map(|s| RouteCost {
                load_ids: s.clone(),
                distance: Self::driven_distance(problem, s),
            })
            .collect();
        let distance: f64 = routes.iter().map(|r| r.distance).sum();

        Ok(ScheduleCost {
            total_cost: self.driver_cost * routes.len() as f64 + distance,
            routes,
        })
    }
}
