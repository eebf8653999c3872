//! Solution type and its schedule representation.

use super::Route;

/// Per-driver load id lists, in driver order.
///
/// This is the exchange format for scoring and display.
pub type Schedules = Vec<Vec<usize>>;

/// A dispatch plan: one [`Route`] per driver.
///
/// Drivers are numbered densely from 1 in the order they were opened.
///
/// # Examples
///
/// ```
/// use haul_routing::models::Solution;
///
/// let mut sol = Solution::new();
/// let d1 = sol.open_driver(3);
/// sol.route_mut(d1).push(1);
/// let d2 = sol.open_driver(2);
/// assert_eq!((d1, d2), (1, 2));
/// assert_eq!(sol.num_drivers(), 2);
/// assert_eq!(sol.schedules(), vec![vec![3, 1], vec![2]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Opens a new driver whose route starts with `load_id`.
    ///
    /// Returns the new driver's index.
    pub fn open_driver(&mut self, load_id: usize) -> usize {
        let driver = self.routes.len() + 1;
        self.routes.push(Route::starting_with(driver, load_id));
        driver
    }

    /// Returns the route of `driver`.
    ///
    /// # Panics
    ///
    /// Panics if the driver does not exist.
    pub fn route(&self, driver: usize) -> &Route {
        &self.routes[driver - 1]
    }

    /// Returns a mutable reference to the route of `driver`.
    ///
    /// # Panics
    ///
    /// Panics if the driver does not exist.
    pub fn route_mut(&mut self, driver: usize) -> &mut Route {
        &mut self.routes[driver - 1]
    }

    /// Returns all routes in driver order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.routes.len()
    }

    /// Total number of loads served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Converts the solution to per-driver load id lists.
    pub fn schedules(&self) -> Schedules {
        self.routes.iter().map(|r| r.load_ids().to_vec()).collect()
    }
}
