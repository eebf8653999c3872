//! Multi-start search over shuffle seeds.
//!
//! Every seed in the range runs [`shuffled_greedy_with_seed`] on its own
//! worker and is ranked by the [`ScheduleScorer`]. The builder is
//! deterministic, so the winning solution is rebuilt from its seed instead
//! of being kept from the parallel phase.

use std::ops::Range;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::constructive::shuffled_greedy_with_seed;
use crate::error::{Result, RoutingError};
use crate::evaluation::{RouteEvaluator, ScheduleCost, ScheduleScorer};
use crate::models::{Problem, Solution};

/// Scored result of a single seed.
#[derive(Debug)]
pub struct SeedOutcome {
    /// Shuffle seed.
    pub seed: u64,
    /// Total cost, or the scorer's error for this seed.
    pub cost: Result<f64>,
}

/// Best solution found by a seed search.
#[derive(Debug, Clone)]
pub struct SeedSearchResult {
    /// Smallest seed achieving the minimum cost.
    pub best_seed: u64,
    /// Every seed achieving the minimum cost, ascending.
    pub tied_seeds: Vec<u64>,
    /// Solution rebuilt from `best_seed`.
    pub solution: Solution,
    /// Official score of `solution`.
    pub cost: ScheduleCost,
    /// Number of seeds tried.
    pub tried: u64,
    /// Number of seeds whose schedules could not be scored.
    pub failed: u64,
}

/// Seed search over a shared problem, evaluator and scorer.
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point, Problem};
/// use haul_routing::distance::LoadDistances;
/// use haul_routing::evaluation::{DriverCostScorer, RouteEvaluator};
/// use haul_routing::search::SeedSearch;
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(0.0, 300.0), Point::new(0.0, 350.0)),
///     Load::new(2, Point::new(0.0, -300.0), Point::new(0.0, -350.0)),
///     Load::new(3, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
/// ])
/// .unwrap();
/// let d = LoadDistances::from_problem(&problem);
/// let evaluator = RouteEvaluator::new(&d, 720.0);
/// let scorer = DriverCostScorer::default();
///
/// let result = SeedSearch::new(&problem, &evaluator, &scorer).run(0..20).unwrap();
/// assert_eq!(result.tried, 20);
/// assert_eq!(result.solution.num_served(), 3);
/// ```
pub struct SeedSearch<'a> {
    problem: &'a Problem,
    evaluator: &'a RouteEvaluator<'a>,
    scorer: &'a dyn ScheduleScorer,
}

impl<'a> SeedSearch<'a> {
    /// Creates a search; nothing runs until [`run`](Self::run).
    pub fn new(
        problem: &'a Problem,
        evaluator: &'a RouteEvaluator<'a>,
        scorer: &'a dyn ScheduleScorer,
    ) -> Self {
        Self {
            problem,
            evaluator,
            scorer,
        }
    }

    /// Builds and scores one seed.
    pub fn evaluate_seed(&self, seed: u64) -> SeedOutcome {
        let solution = shuffled_greedy_with_seed(self.problem, self.evaluator, seed);
        let cost = self
            .scorer
            .score(self.problem, &solution.schedules())
            .map(|c| c.total_cost);
        SeedOutcome { seed, cost }
    }

    /// Scores every seed in `seeds` in parallel, in seed order.
    pub fn outcomes(&self, seeds: Range<u64>) -> Vec<SeedOutcome> {
        let mut outcomes: Vec<SeedOutcome> = seeds
            .into_par_iter()
            .map(|seed| self.evaluate_seed(seed))
            .collect();
        outcomes.sort_by_key(|o| o.seed);
        outcomes
    }

    /// Finds the minimum-cost seed in `seeds` and rebuilds its solution.
    ///
    /// Ties go to the smallest seed. A seed whose schedules fail scoring is
    /// logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::NoFeasibleSeed`] if the range is empty or
    /// every seed failed.
    pub fn run(&self, seeds: Range<u64>) -> Result<SeedSearchResult> {
        let tried = seeds.end.saturating_sub(seeds.start);
        info!(
            loads = self.problem.len(),
            seeds = tried,
            "starting seed search"
        );

        let mut scored = Vec::new();
        let mut failed = 0;
        for outcome in self.outcomes(seeds) {
            match outcome.cost {
                Ok(cost) => scored.push((outcome.seed, cost)),
                Err(e) => {
                    warn!(seed = outcome.seed, error = %e, "seed skipped");
                    failed += 1;
                }
            }
        }

        let (best_seed, best_cost) = scored
            .iter()
            .copied()
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .ok_or(RoutingError::NoFeasibleSeed { tried })?;
        let tied_seeds: Vec<u64> = scored
            .iter()
            .filter(|(_, cost)| *cost == best_cost)
            .map(|(seed, _)| *seed)
            .collect();

        let solution = shuffled_greedy_with_seed(self.problem, self.evaluator, best_seed);
        let cost = self.scorer.score(self.problem, &solution.schedules())?;

        info!(
            best_seed,
            cost = cost.total_cost,
            drivers = solution.num_drivers(),
            ties = tied_seeds.len(),
            failed,
            "seed search finished"
        );

        Ok(SeedSearchResult {
            best_seed,
            tied_seeds,
            solution,
            cost,
            tried,
            failed,
        })
    }
}
