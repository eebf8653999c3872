//! Load-to-load and depot distance tables.

use crate::models::Problem;

use super::DistanceMatrix;

/// Precomputed distances for a [`Problem`], indexed by `load.id - 1`.
///
/// - `matrix[i][j]` (i ≠ j): deadhead from load i's dropoff to load j's pickup
/// - `matrix[i][i]`: load i's own haul, pickup to dropoff
/// - `depot_out[i]`: depot to load i's pickup
/// - `depot_back[i]`: load i's dropoff back to the depot
///
/// Computed once per problem and never mutated afterwards; builders share
/// it by reference.
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point, Problem};
/// use haul_routing::distance::LoadDistances;
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(0.0, 3.0), Point::new(4.0, 3.0)),
///     Load::new(2, Point::new(4.0, 0.0), Point::new(8.0, 0.0)),
/// ])
/// .unwrap();
/// let d = LoadDistances::from_problem(&problem);
/// assert!((d.depot_out(0) - 3.0).abs() < 1e-10);
/// assert!((d.haul(0) - 4.0).abs() < 1e-10);
/// assert!((d.deadhead(0, 1) - 3.0).abs() < 1e-10);
/// assert!((d.depot_back(1) - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LoadDistances {
    matrix: DistanceMatrix,
    depot_out: Vec<f64>,
    depot_back: Vec<f64>,
}

impl LoadDistances {
    /// Computes all tables from the problem geometry. O(n²).
    pub fn from_problem(problem: &Problem) -> Self {
        let loads = problem.loads();
        let depot = problem.depot();

        let matrix = DistanceMatrix::from_fn(loads.len(), |i, j| {
            if i == j {
                loads[i].haul_distance()
            } else {
                loads[i].dropoff().distance_to(&loads[j].pickup())
            }
        });
        let depot_out = loads.iter().map(|l| depot.distance_to(&l.pickup())).collect();
        let depot_back = loads.iter().map(|l| l.dropoff().distance_to(&depot)).collect();

        Self {
            matrix,
            depot_out,
            depot_back,
        }
    }

    /// Builds tables from explicit values.
    ///
    /// Returns `None` if the depot vectors don't match the matrix size.
    pub fn from_parts(
        matrix: DistanceMatrix,
        depot_out: Vec<f64>,
        depot_back: Vec<f64>,
    ) -> Option<Self> {
        let n = matrix.size();
        if depot_out.len() != n || depot_back.len() != n {
            return None;
        }
        Some(Self {
            matrix,
            depot_out,
            depot_back,
        })
    }

    /// The combined haul/deadhead matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Haul distance of the load at `idx`.
    pub fn haul(&self, idx: usize) -> f64 {
        self.matrix.get(idx, idx)
    }

    /// Empty travel from the dropoff of `from` to the pickup of `to`.
    pub fn deadhead(&self, from: usize, to: usize) -> f64 {
        self.matrix.get(from, to)
    }

    /// Depot to the pickup of the load at `idx`.
    pub fn depot_out(&self, idx: usize) -> f64 {
        self.depot_out[idx]
    }

    /// Dropoff of the load at `idx` back to the depot.
    pub fn depot_back(&self, idx: usize) -> f64 {
        self.depot_back[idx]
    }

    /// Number of loads covered.
    pub fn len(&self) -> usize {
        self.depot_out.len()
    }

    /// Returns `true` if no loads are covered.
    pub fn is_empty(&self) -> bool {
        self.depot_out.is_empty()
    }
}
