//! Transport load type.

use serde::{Deserialize, Serialize};

use super::Point;

/// A single transport job: drive to `pickup`, haul to `dropoff`.
///
/// Ids are dense integers starting at 1; `id - 1` is the load's row and
/// column in [`LoadDistances`](crate::distance::LoadDistances).
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(0.0, 3.0), Point::new(4.0, 3.0));
/// assert_eq!(load.id(), 1);
/// assert_eq!(load.index(), 0);
/// assert!((load.haul_distance() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: usize,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a load.
    pub fn new(id: usize, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
        }
    }

    /// Load id (1-based).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Position of this load in the distance tables (`id - 1`).
    ///
    /// # Panics
    ///
    /// Panics if the id is 0. [`Problem`](super::Problem) rejects such loads.
    pub fn index(&self) -> usize {
        self.id - 1
    }

    /// Pickup location.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Dropoff location.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Loaded distance from pickup to dropoff.
    pub fn haul_distance(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }
}
