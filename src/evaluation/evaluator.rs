//! Route evaluator: total distance and round-trip feasibility.

use crate::distance::LoadDistances;
use crate::models::Solution;

/// A route whose round trip exceeds the duration limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Driver index of the offending route.
    pub driver: usize,
    /// Round-trip distance of the route.
    pub distance: f64,
    /// The duration limit it exceeds.
    pub limit: f64,
    /// Number of loads on the route.
    pub loads: usize,
}

/// Evaluates routes against the precomputed [`LoadDistances`].
///
/// Route distance is
/// `depot_out[r0] + Σ haul[ri] + Σ deadhead[r(i-1)][ri] + depot_back[r_last]`,
/// with every load addressed by `id - 1`.
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point, Problem};
/// use haul_routing::distance::LoadDistances;
/// use haul_routing::evaluation::RouteEvaluator;
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new(2, Point::new(3.0, 0.0), Point::new(4.0, 0.0)),
/// ])
/// .unwrap();
/// let d = LoadDistances::from_problem(&problem);
/// let evaluator = RouteEvaluator::new(&d, 720.0);
///
/// // 1 out + 1 haul + 1 deadhead + 1 haul + 4 back
/// assert!((evaluator.route_distance(&[1, 2]) - 8.0).abs() < 1e-10);
/// assert!(evaluator.is_feasible(&[1, 2]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    distances: &'a LoadDistances,
    max_duration: f64,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator with round-trip limit `max_duration`.
    pub fn new(distances: &'a LoadDistances, max_duration: f64) -> Self {
        Self {
            distances,
            max_duration,
        }
    }

    /// The shared distance tables.
    pub fn distances(&self) -> &'a LoadDistances {
        self.distances
    }

    /// Maximum round-trip distance of a route.
    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    /// Total distance of the route visiting `load_ids` in order.
    ///
    /// # Panics
    ///
    /// Panics if `load_ids` is empty or contains an id outside the tables.
    pub fn route_distance(&self, load_ids: &[usize]) -> f64 {
        assert!(!load_ids.is_empty(), "cannot evaluate an empty route");
        self.sequence_distance(load_ids.iter().copied())
    }

    /// Total distance of `load_ids` followed by `next`.
    ///
    /// Evaluates the tentative route without building it.
    pub fn extended_distance(&self, load_ids: &[usize], next: usize) -> f64 {
        self.sequence_distance(load_ids.iter().copied().chain(std::iter::once(next)))
    }

    /// Returns `true` if the route fits within the duration limit.
    pub fn is_feasible(&self, load_ids: &[usize]) -> bool {
        self.route_distance(load_ids) <= self.max_duration
    }

    /// Returns `true` if appending `next` keeps the route within the limit.
    pub fn can_extend(&self, load_ids: &[usize], next: usize) -> bool {
        self.extended_distance(load_ids, next) <= self.max_duration
    }

    /// Sum of route distances over every driver.
    pub fn total_distance(&self, solution: &Solution) -> f64 {
        solution
            .routes()
            .iter()
            .map(|r| self.route_distance(r.load_ids()))
            .sum()
    }

    /// Routes whose round trip exceeds the limit.
    ///
    /// Builders only produce these for single loads that cannot fit on
    /// their own.
    pub fn violations(&self, solution: &Solution) -> Vec<Violation> {
        solution
            .routes()
            .iter()
            .filter_map(|r| {
                let distance = self.route_distance(r.load_ids());
                (distance > self.max_duration).then(|| Violation {
                    driver: r.driver(),
                    distance,
                    limit: self.max_duration,
                    loads: r.len(),
                })
            })
            .collect()
    }

    fn sequence_distance<I>(&self, load_ids: I) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        let d = self.distances;
        let mut prev: Option<usize> = None;
        let mut distance = 0.0;

        for id in load_ids {
            let idx = id - 1;
            distance += match prev {
                None => d.depot_out(idx),
                Some(p) => d.deadhead(p, idx),
            };
            distance += d.haul(idx);
            prev = Some(idx);
        }

        prev.map_or(distance, |last| distance + d.depot_back(last))
    }
}
