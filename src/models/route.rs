//! Driver route type.

/// An ordered sequence of load ids assigned to a single driver.
///
/// A route starts and ends at the depot (not stored in `loads`). Order
/// determines the haul sequence and therefore the cost.
///
/// # Examples
///
/// ```
/// use haul_routing::models::Route;
///
/// let mut route = Route::starting_with(1, 4);
/// route.push(2);
/// assert_eq!(route.driver(), 1);
/// assert_eq!(route.load_ids(), &[4, 2]);
/// assert_eq!(route.last(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    driver: usize,
    loads: Vec<usize>,
}

impl Route {
    /// Creates an empty route for the given driver.
    pub fn new(driver: usize) -> Self {
        Self {
            driver,
            loads: Vec::new(),
        }
    }

    /// Creates a route whose only load is `load_id`.
    pub fn starting_with(driver: usize, load_id: usize) -> Self {
        Self {
            driver,
            loads: vec![load_id],
        }
    }

    /// Appends a load to the end of this route.
    pub fn push(&mut self, load_id: usize) {
        self.loads.push(load_id);
    }

    /// Driver index (1-based).
    pub fn driver(&self) -> usize {
        self.driver
    }

    /// Load ids in haul order.
    pub fn load_ids(&self) -> &[usize] {
        &self.loads
    }

    /// Last load on the route.
    pub fn last(&self) -> Option<usize> {
        self.loads.last().copied()
    }

    /// Number of loads on the route.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if the route has no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
