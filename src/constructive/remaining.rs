//! Removable set of unassigned loads.

use crate::distance::LoadDistances;
use crate::models::Problem;

/// Unassigned load ids with O(1) membership and removal.
///
/// Iteration is always in ascending id order, so every minimum search over
/// the set breaks ties toward the lowest load id.
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point, Problem};
/// use haul_routing::constructive::RemainingLoads;
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new(2, Point::new(3.0, 0.0), Point::new(4.0, 0.0)),
/// ])
/// .unwrap();
/// let mut remaining = RemainingLoads::new(&problem);
/// assert!(remaining.remove(1));
/// assert!(!remaining.remove(1));
/// assert_eq!(remaining.ids(), vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct RemainingLoads {
    active: Vec<bool>,
    count: usize,
}

impl RemainingLoads {
    /// Marks every load of `problem` as unassigned.
    pub fn new(problem: &Problem) -> Self {
        Self {
            active: vec![true; problem.len()],
            count: problem.len(),
        }
    }

    /// Returns `true` if `id` is still unassigned.
    pub fn contains(&self, id: usize) -> bool {
        id.checked_sub(1)
            .and_then(|idx| self.active.get(idx))
            .copied()
            .unwrap_or(false)
    }

    /// Marks `id` as assigned. Returns `false` if it already was.
    pub fn remove(&mut self, id: usize) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active[id - 1] = false;
        self.count -= 1;
        true
    }

    /// Unassigned ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(idx, _)| idx + 1)
    }

    /// Unassigned ids collected into a vector.
    pub fn ids(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Number of unassigned loads.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` once every load is assigned.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Unassigned load whose pickup is closest to the depot.
    pub fn closest_to_depot(&self, distances: &LoadDistances) -> Option<usize> {
        self.iter()
            .min_by(|&a, &b| distances.depot_out(a - 1).total_cmp(&distances.depot_out(b - 1)))
    }

    /// Unassigned load with the shortest deadhead after `from_id`.
    pub fn nearest_to(&self, distances: &LoadDistances, from_id: usize) -> Option<usize> {
        distances
            .matrix()
            .nearest_neighbor(from_id - 1, self.iter().map(|id| id - 1))
            .map(|idx| idx + 1)
    }
}
