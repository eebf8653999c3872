//! Solver facade: one problem, its distance tables, and every strategy.

use std::ops::Range;
use std::path::Path;

use tracing::info;

use crate::config::SolverConfig;
use crate::constructive::{nearest_neighbor, shuffled_greedy_with_seed};
use crate::distance::LoadDistances;
use crate::error::{Result, RoutingError};
use crate::evaluation::{DriverCostScorer, RouteEvaluator, ScheduleCost, ScheduleScorer};
use crate::io::load_problem;
use crate::models::{Problem, Solution};
use crate::search::{SeedSearch, SeedSearchResult};

/// Route construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One shuffled greedy run with the given seed.
    BruteForceSeed(u64),
    /// Depot-seeded nearest-neighbor construction.
    NearestNeighbor,
}

/// Owns a problem and its precomputed distances.
///
/// Distances are computed once in [`Solver::new`] and only read afterwards,
/// so one solver can serve any number of strategy runs.
///
/// # Examples
///
/// ```
/// use haul_routing::config::SolverConfig;
/// use haul_routing::io::parse_problem;
/// use haul_routing::solver::{Solver, Strategy};
///
/// let problem = parse_problem("1 (1,0) (2,0)\n2 (2,0) (3,0)\n").unwrap();
/// let solver = Solver::new(problem, SolverConfig::default()).unwrap();
///
/// let greedy = solver.solve(Strategy::BruteForceSeed(0)).unwrap();
/// let nearest = solver.solve(Strategy::NearestNeighbor).unwrap();
/// assert_eq!(greedy.num_drivers(), 1);
/// assert_eq!(nearest.schedules(), vec![vec![1, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    problem: Problem,
    distances: LoadDistances,
    config: SolverConfig,
}

impl Solver {
    /// Validates `config` and precomputes distances for `problem`.
    pub fn new(problem: Problem, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let distances = LoadDistances::from_problem(&problem);
        Ok(Self {
            problem,
            distances,
            config,
        })
    }

    /// Loads the problem file at `path` and builds a solver for it.
    pub fn from_file<P: AsRef<Path>>(path: P, config: SolverConfig) -> Result<Self> {
        Self::new(load_problem(path)?, config)
    }

    /// The problem being solved.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Precomputed distance tables.
    pub fn distances(&self) -> &LoadDistances {
        &self.distances
    }

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Route evaluator bound to the configured duration limit.
    pub fn evaluator(&self) -> RouteEvaluator<'_> {
        RouteEvaluator::new(&self.distances, self.config.max_route_duration)
    }

    /// Scorer using the configured driver cost.
    pub fn scorer(&self) -> DriverCostScorer {
        DriverCostScorer::new(self.config.driver_cost)
    }

    /// Builds a solution with `strategy`.
    pub fn solve(&self, strategy: Strategy) -> Result<Solution> {
        let evaluator = self.evaluator();
        let solution = match strategy {
            Strategy::BruteForceSeed(seed) => {
                shuffled_greedy_with_seed(&self.problem, &evaluator, seed)
            }
            Strategy::NearestNeighbor => nearest_neighbor(&self.problem, &evaluator)?,
        };
        info!(
            ?strategy,
            loads = self.problem.len(),
            drivers = solution.num_drivers(),
            "solved"
        );
        Ok(solution)
    }

    /// Scores `solution` with the configured scorer.
    pub fn score(&self, solution: &Solution) -> Result<ScheduleCost> {
        self.scorer().score(&self.problem, &solution.schedules())
    }

    /// Runs a seed search over `seeds` with the configured scorer.
    pub fn search_best_seed(&self, seeds: Range<u64>) -> Result<SeedSearchResult> {
        self.search_best_seed_with(seeds, &self.scorer())
    }

    /// Runs a seed search over `seeds` ranked by `scorer`.
    ///
    /// Uses a dedicated thread pool when `threads` is configured.
    pub fn search_best_seed_with(
        &self,
        seeds: Range<u64>,
        scorer: &dyn ScheduleScorer,
    ) -> Result<SeedSearchResult> {
        let evaluator = self.evaluator();
        let search = SeedSearch::new(&self.problem, &evaluator, scorer);

        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| RoutingError::Config(e.to_string()))?;
                pool.install(|| search.run(seeds))
            }
            None => search.run(seeds),
        }
    }

    /// Seed search over `0..seed_count` from the configuration.
    pub fn search_configured_seeds(&self) -> Result<SeedSearchResult> {
        self.search_best_seed(0..self.config.seed_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Load, Point};

    fn problem() -> Problem {
        Problem::new(vec![
            Load::new(1, Point::new(0.0, 300.0), Point::new(0.0, 350.0)),
            Load::new(2, Point::new(0.0, -300.0), Point::new(0.0, -350.0)),
            Load::new(3, Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
        ])
        .expect("dense ids")
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = SolverConfig {
            max_route_duration: -5.0,
            ..Default::default()
        };
        assert!(Solver::new(problem(), config).is_err());
    }

    #[test]
    fn test_strategies_cover_all_loads() {
        let solver = Solver::new(problem(), SolverConfig::default()).expect("valid");
        for strategy in [Strategy::BruteForceSeed(4), Strategy::NearestNeighbor] {
            let sol = solver.solve(strategy).expect("solved");
            let mut ids: Vec<usize> = sol.schedules().into_iter().flatten().collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3]);
            assert!(solver.score(&sol).is_ok());
        }
    }

    #[test]
    fn test_search_with_dedicated_pool() {
        let config = SolverConfig {
            threads: Some(2),
            seed_count: 16,
            ..Default::default()
        };
        let solver = Solver::new(problem(), config).expect("valid");
        let result = solver.search_configured_seeds().expect("searched");
        assert_eq!(result.tried, 16);
        let expected = solver
            .score(&solver.solve(Strategy::BruteForceSeed(result.best_seed)).expect("solved"))
            .expect("scored");
        assert_eq!(result.cost, expected);
    }

    #[test]
    fn test_driver_cost_from_config() {
        let config = SolverConfig {
            driver_cost: 0.0,
            ..Default::default()
        };
        let solver = Solver::new(problem(), config).expect("valid");
        let sol = solver.solve(Strategy::NearestNeighbor).expect("solved");
        let cost = solver.score(&sol).expect("scored");
        assert!((cost.total_cost - cost.total_distance()).abs() < 1e-10);
    }
}
