//! Nearest-neighbor constructive heuristic.
//!
//! Driver 1 starts at the unassigned load whose pickup is closest to the
//! depot. Each pass then visits every open driver in index order and tries
//! to append the unassigned load with the shortest deadhead from the
//! driver's last dropoff. If the round trip would exceed the limit, a new
//! driver is opened at the unassigned load closest to the depot instead.
//! Drivers are never closed: one that could not be extended in this pass
//! tries again with its then-nearest load in the next.
//!
//! Drivers opened during a pass are first visited in the next pass. Each
//! visited driver consumes exactly one unassigned load per pass, either by
//! extending its own route or by opening a new one.
//!
//! # Complexity
//!
//! O(n²·k) where k is the longest route.

use tracing::debug;

use crate::distance::LoadDistances;
use crate::error::{Result, RoutingError};
use crate::evaluation::RouteEvaluator;
use crate::models::{Problem, Solution};

use super::RemainingLoads;

/// Constructs a solution using the nearest-neighbor heuristic.
///
/// Distance ties go to the lowest load id.
///
/// # Errors
///
/// Returns [`RoutingError::NoCandidate`] with every load id still
/// unassigned if the distance tables are not sized for `problem`, or if no
/// nearest load is found while loads remain unassigned.
///
/// # Examples
///
/// ```
/// use haul_routing::models::{Load, Point, Problem};
/// use haul_routing::distance::LoadDistances;
/// use haul_routing::evaluation::RouteEvaluator;
/// use haul_routing::constructive::nearest_neighbor;
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(3.0, 0.0), Point::new(4.0, 0.0)),
///     Load::new(2, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new(3, Point::new(5.0, 0.0), Point::new(6.0, 0.0)),
/// ])
/// .unwrap();
/// let d = LoadDistances::from_problem(&problem);
/// let evaluator = RouteEvaluator::new(&d, 720.0);
///
/// let solution = nearest_neighbor(&problem, &evaluator).unwrap();
/// assert_eq!(solution.schedules(), vec![vec![2, 1, 3]]);
/// ```
pub fn nearest_neighbor(problem: &Problem, evaluator: &RouteEvaluator) -> Result<Solution> {
    let distances = evaluator.distances();
    let mut remaining = RemainingLoads::new(problem);
    let mut solution = Solution::new();

    if distances.len() != problem.len() {
        return Err(RoutingError::NoCandidate {
            route_tail: 0,
            remaining: remaining.ids(),
        });
    }
    if remaining.is_empty() {
        return Ok(solution);
    }

    open_closest_to_depot(&mut solution, &mut remaining, distances, 0)?;

    while !remaining.is_empty() {
        let pass = solution.num_drivers();

        for driver in 1..=pass {
            if remaining.is_empty() {
                break;
            }

            let tail = solution
                .route(driver)
                .last()
                .expect("drivers are opened with a load");
            let nearest = remaining.nearest_to(distances, tail).ok_or_else(|| {
                RoutingError::NoCandidate {
                    route_tail: tail,
                    remaining: remaining.ids(),
                }
            })?;

            if evaluator.can_extend(solution.route(driver).load_ids(), nearest) {
                solution.route_mut(driver).push(nearest);
                remaining.remove(nearest);
            } else {
                let spilled = open_closest_to_depot(&mut solution, &mut remaining, distances, tail)?;
                debug!(driver, nearest, spilled, "extension exceeds limit, opened driver");
            }
        }
    }

    Ok(solution)
}

fn open_closest_to_depot(
    solution: &mut Solution,
    remaining: &mut RemainingLoads,
    distances: &LoadDistances,
    route_tail: usize,
) -> Result<usize> {
    let id = remaining
        .closest_to_depot(distances)
        .ok_or_else(|| RoutingError::NoCandidate {
            route_tail,
            remaining: remaining.ids(),
        })?;
    remaining.remove(id);
    Ok(solution.open_driver(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Load, Point};

    fn line_problem() -> Problem {
        Problem::new(vec![
            Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
            Load::new(2, Point::new(2.0, 0.0), Point::new(3.0, 0.0)),
            Load::new(3, Point::new(3.0, 0.0), Point::new(4.0, 0.0)),
        ])
        .expect("dense ids")
    }

    #[test]
    fn test_nn_all_on_one_route() {
        let p = line_problem();
        let d = LoadDistances::from_problem(&p);
        let eval = RouteEvaluator::new(&d, 720.0);
        let sol = nearest_neighbor(&p, &eval).expect("consistent tables");
        assert_eq!(sol.num_drivers(), 1);
        assert_eq!(sol.route(1).load_ids(), &[1, 2, 3]);
        // 1 out + 3 haul + 0 deadhead + 4 back
        assert!((eval.total_distance(&sol) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let p = Problem::new(vec![
            Load::new(1, Point::new(1.0, 0.0), Point::new(1.0, 1.0)),
            Load::new(2, Point::new(9.0, 1.0), Point::new(9.0, 2.0)),
            Load::new(3, Point::new(2.0, 1.0), Point::new(3.0, 1.0)),
        ])
        .expect("dense ids");
        let d = LoadDistances::from_problem(&p);
        let eval = RouteEvaluator::new(&d, 720.0);
        let sol = nearest_neighbor(&p, &eval).expect("consistent tables");
        assert_eq!(sol.schedules(), vec![vec![1, 3, 2]]);
    }

    #[test]
    fn test_nn_spills_to_new_driver() {
        let p = Problem::new(vec![
            Load::new(1, Point::new(0.0, 300.0), Point::new(0.0, 350.0)),
            Load::new(2, Point::new(0.0, -300.0), Point::new(0.0, -350.0)),
        ])
        .expect("dense ids");
        let d = LoadDistances::from_problem(&p);
        let eval = RouteEvaluator::new(&d, 720.0);
        let sol = nearest_neighbor(&p, &eval).expect("consistent tables");
        assert_eq!(sol.schedules(), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_nn_earlier_driver_goes_first() {
        // Two clusters far apart: north (1, 3) and south (2, 4).
        let p = Problem::new(vec![
            Load::new(1, Point::new(0.0, 100.0), Point::new(0.0, 110.0)),
            Load::new(2, Point::new(0.0, -101.0), Point::new(0.0, -111.0)),
            Load::new(3, Point::new(0.0, 112.0), Point::new(0.0, 120.0)),
            Load::new(4, Point::new(0.0, -113.0), Point::new(0.0, -121.0)),
        ])
        .expect("dense ids");
        let d = LoadDistances::from_problem(&p);
        let eval = RouteEvaluator::new(&d, 300.0);
        let sol = nearest_neighbor(&p, &eval).expect("consistent tables");
        // pass 1: driver 1 takes 3.
        // pass 2: driver 1 cannot take 2, driver 2 opens at 2.
        // pass 3: driver 1 is visited before driver 2, cannot take 4 and
        // opens driver 3 at 4 before driver 2 gets a turn.
        assert_eq!(sol.schedules(), vec![vec![1, 3], vec![2], vec![4]]);
        assert!(eval.violations(&sol).is_empty());
    }

    #[test]
    fn test_nn_new_driver_waits_for_next_pass() {
        let p = Problem::new(vec![
            Load::new(1, Point::new(0.0, 1.0), Point::new(0.0, 40.0)),
            Load::new(2, Point::new(0.0, 42.0), Point::new(0.0, 60.0)),
            Load::new(3, Point::new(3.0, 0.0), Point::new(6.0, 0.0)),
            Load::new(4, Point::new(8.0, 0.0), Point::new(10.0, 0.0)),
        ])
        .expect("dense ids");
        let d = LoadDistances::from_problem(&p);
        let eval = RouteEvaluator::new(&d, 100.0);
        let sol = nearest_neighbor(&p, &eval).expect("consistent tables");
        // pass 1: driver 1 wants 2 (too long), driver 2 opens at 3 and is
        // not visited again in this pass.
        // pass 2: driver 1 still wants 2, driver 3 opens at 4; driver 2
        // then wants 2 (too long), driver 4 opens at 2.
        assert_eq!(sol.schedules(), vec![vec![1], vec![3], vec![4], vec![2]]);
    }

    #[test]
    fn test_nn_asymmetric_tables() {
        let p = Problem::new(vec![
            Load::new(1, Point::ORIGIN, Point::ORIGIN),
            Load::new(2, Point::ORIGIN, Point::ORIGIN),
            Load::new(3, Point::ORIGIN, Point::ORIGIN),
        ])
        .expect("dense ids");
        // deadhead 1->3 is short but 3->2 is long; 1->2 is long, 2->3 short
        let m = DistanceMatrix::from_data(
            3,
            vec![
                1.0, 50.0, 2.0, //
                9.0, 1.0, 3.0, //
                4.0, 40.0, 1.0,
            ],
        )
        .expect("valid");
        let d = LoadDistances::from_parts(m, vec![1.0, 5.0, 5.0], vec![1.0, 1.0, 1.0])
            .expect("sizes");
        let eval = RouteEvaluator::new(&d, 720.0);
        let sol = nearest_neighbor(&p, &eval).expect("consistent tables");
        assert_eq!(sol.schedules(), vec![vec![1, 3, 2]]);
    }

    #[test]
    fn test_nn_mismatched_tables_fail() {
        let p = line_problem();
        let m = DistanceMatrix::new(2);
        let d = LoadDistances::from_parts(m, vec![1.0, 1.0], vec![1.0, 1.0]).expect("sizes");
        let eval = RouteEvaluator::new(&d, 720.0);
        match nearest_neighbor(&p, &eval) {
            Err(RoutingError::NoCandidate {
                route_tail,
                remaining,
            }) => {
                assert_eq!(route_tail, 0);
                assert_eq!(remaining, vec![1, 2, 3]);
            }
            other => panic!("expected NoCandidate, got {other:?}"),
        }
    }

    #[test]
    fn test_nn_empty() {
        let p = Problem::new(vec![]).expect("empty");
        let d = LoadDistances::from_problem(&p);
        let eval = RouteEvaluator::new(&d, 720.0);
        let sol = nearest_neighbor(&p, &eval).expect("nothing to do");
        assert_eq!(sol.num_drivers(), 0);
    }
}
