//! Randomized multi-start greedy construction.
//!
//! Shuffles the loads with a seeded generator, then walks the shuffled
//! order, appending each load to the current driver while the round trip
//! stays within the limit and opening a new driver otherwise. A closed
//! driver is never revisited.
//!
//! # Complexity
//!
//! O(n·k) where k is the longest route, since each tentative append
//! re-evaluates the whole route.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::evaluation::RouteEvaluator;
use crate::models::{Problem, Solution};

/// Builds a solution from a shuffled load order using `rng`.
///
/// The first load of every driver is accepted unconditionally, so a load
/// whose own round trip exceeds the limit still gets a single-load route.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use haul_routing::models::{Load, Point, Problem};
/// use haul_routing::distance::LoadDistances;
/// use haul_routing::evaluation::RouteEvaluator;
/// use haul_routing::constructive::shuffled_greedy;
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new(2, Point::new(2.0, 0.0), Point::new(3.0, 0.0)),
///     Load::new(3, Point::new(3.0, 0.0), Point::new(4.0, 0.0)),
/// ])
/// .unwrap();
/// let d = LoadDistances::from_problem(&problem);
/// let evaluator = RouteEvaluator::new(&d, 720.0);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let solution = shuffled_greedy(&problem, &evaluator, &mut rng);
/// assert_eq!(solution.num_drivers(), 1);
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn shuffled_greedy<R>(problem: &Problem, evaluator: &RouteEvaluator, rng: &mut R) -> Solution
where
    R: Rng + ?Sized,
{
    let mut order: Vec<usize> = problem.load_ids().collect();
    order.shuffle(rng);

    let mut solution = Solution::new();
    let mut current: Option<usize> = None;

    for id in order {
        match current {
            Some(driver) if evaluator.can_extend(solution.route(driver).load_ids(), id) => {
                solution.route_mut(driver).push(id);
            }
            _ => {
                let driver = solution.open_driver(id);
                debug!(driver, load = id, "opened driver");
                current = Some(driver);
            }
        }
    }

    solution
}

/// Runs [`shuffled_greedy`] with a [`StdRng`] seeded from `seed`.
///
/// The same problem, limit and seed always yield the same solution.
pub fn shuffled_greedy_with_seed(
    problem: &Problem,
    evaluator: &RouteEvaluator,
    seed: u64,
) -> Solution {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled_greedy(problem, evaluator, &mut rng)
}
