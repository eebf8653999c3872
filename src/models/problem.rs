//! Problem instance: the depot plus every load to dispatch.

use crate::error::{Result, RoutingError};

use super::{Load, Point};

/// A read-only dispatch problem.
///
/// Loads are kept sorted by id, and ids are guaranteed to be exactly
/// `1..=n`, so `loads()[id - 1].id() == id`.
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point, Problem};
///
/// let problem = Problem::new(vec![
///     Load::new(2, Point::new(0.0, 2.0), Point::new(0.0, 3.0)),
///     Load::new(1, Point::new(0.0, 1.0), Point::new(0.0, 2.0)),
/// ])
/// .unwrap();
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.load(2).id(), 2);
/// assert_eq!(problem.load_ids().collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    depot: Point,
    loads: Vec<Load>,
}

impl Problem {
    /// Creates a problem with the depot at the origin.
    ///
    /// Fails with [`RoutingError::InvalidLoadIds`] unless the ids are a
    /// permutation of `1..=n`.
    pub fn new(mut loads: Vec<Load>) -> Result<Self> {
        let n = loads.len();
        let mut seen = vec![false; n];
        let mut offending = Vec::new();
        for load in &loads {
            let id = load.id();
            if id == 0 || id > n || seen[id - 1] {
                offending.push(id);
            } else {
                seen[id - 1] = true;
            }
        }
        if !offending.is_empty() {
            offending.sort_unstable();
            offending.dedup();
            return Err(RoutingError::InvalidLoadIds {
                count: n,
                offending,
            });
        }

        loads.sort_by_key(Load::id);
        Ok(Self {
            depot: Point::ORIGIN,
            loads,
        })
    }

    /// Depot location where every route starts and ends.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// All loads, ordered by id.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Returns the load with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in `1..=len()`.
    pub fn load(&self, id: usize) -> &Load {
        &self.loads[id - 1]
    }

    /// Returns the load with the given id, or `None` if out of range.
    pub fn get(&self, id: usize) -> Option<&Load> {
        id.checked_sub(1).and_then(|idx| self.loads.get(idx))
    }

    /// Load ids in ascending order.
    pub fn load_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.loads.iter().map(Load::id)
    }

    /// Number of loads.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if there is nothing to dispatch.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
