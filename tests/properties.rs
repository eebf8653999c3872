use haul_routing::constructive::{nearest_neighbor, shuffled_greedy_with_seed};
use haul_routing::distance::{DistanceMatrix, LoadDistances};
use haul_routing::evaluation::{DriverCostScorer, RouteEvaluator, ScheduleScorer};
use haul_routing::models::{Load, Point, Problem, Solution};
use haul_routing::search::SeedSearch;
use proptest::prelude::*;

const LIMIT: f64 = 720.0;

fn coords() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (
        -250.0..250.0f64,
        -250.0..250.0f64,
        -250.0..250.0f64,
        -250.0..250.0f64,
    )
}

fn problem_strategy() -> impl Strategy<Value = Problem> {
    prop::collection::vec(coords(), 1..30).prop_map(|raw| {
        let loads = raw
            .into_iter()
            .enumerate()
            .map(|(i, (px, py, dx, dy))| Load::new(i + 1, Point::new(px, py), Point::new(dx, dy)))
            .collect();
        Problem::new(loads).expect("ids are dense by construction")
    })
}

fn asymmetric_strategy() -> impl Strategy<Value = (Problem, LoadDistances)> {
    (2usize..15).prop_flat_map(|n| {
        (
            prop::collection::vec(0.0..200.0f64, n * n),
            prop::collection::vec(0.0..200.0f64, n),
            prop::collection::vec(0.0..200.0f64, n),
        )
            .prop_map(move |(matrix, out, back)| {
                let problem = Problem::new(
                    (1..=n)
                        .map(|id| Load::new(id, Point::ORIGIN, Point::ORIGIN))
                        .collect(),
                )
                .expect("dense ids");
                let matrix = DistanceMatrix::from_data(n, matrix).expect("n×n");
                let distances = LoadDistances::from_parts(matrix, out, back).expect("sizes");
                (problem, distances)
            })
    })
}

fn assert_covers(problem: &Problem, solution: &Solution) {
    let mut ids: Vec<usize> = solution.schedules().into_iter().flatten().collect();
    ids.sort_unstable();
    assert_eq!(ids, problem.load_ids().collect::<Vec<_>>());
}

fn assert_feasible(evaluator: &RouteEvaluator, solution: &Solution) {
    for route in solution.routes() {
        assert!(!route.is_empty());
        assert!(
            route.len() == 1 || evaluator.is_feasible(route.load_ids()),
            "driver {} exceeds the limit with {} loads",
            route.driver(),
            route.len()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn greedy_covers_each_load_once(problem in problem_strategy(), seed in 0u64..1000) {
        let d = LoadDistances::from_problem(&problem);
        let eval = RouteEvaluator::new(&d, LIMIT);
        let sol = shuffled_greedy_with_seed(&problem, &eval, seed);
        assert_covers(&problem, &sol);
        assert_feasible(&eval, &sol);
    }

    #[test]
    fn nearest_covers_each_load_once(problem in problem_strategy()) {
        let d = LoadDistances::from_problem(&problem);
        let eval = RouteEvaluator::new(&d, LIMIT);
        let sol = nearest_neighbor(&problem, &eval).expect("consistent tables");
        assert_covers(&problem, &sol);
        assert_feasible(&eval, &sol);
    }

    #[test]
    fn greedy_is_deterministic(problem in problem_strategy(), seed in 0u64..1000) {
        let d = LoadDistances::from_problem(&problem);
        let eval = RouteEvaluator::new(&d, LIMIT);
        let first = shuffled_greedy_with_seed(&problem, &eval, seed);
        let second = shuffled_greedy_with_seed(&problem, &eval, seed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn builders_handle_asymmetric_tables((problem, d) in asymmetric_strategy(), seed in 0u64..100) {
        let eval = RouteEvaluator::new(&d, 400.0);
        let greedy = shuffled_greedy_with_seed(&problem, &eval, seed);
        let nearest = nearest_neighbor(&problem, &eval).expect("consistent tables");
        assert_covers(&problem, &greedy);
        assert_covers(&problem, &nearest);
        assert_feasible(&eval, &greedy);
        assert_feasible(&eval, &nearest);
    }

    #[test]
    fn removal_delta_is_the_detour((problem, d) in asymmetric_strategy(), seed in 0u64..100) {
        let eval = RouteEvaluator::new(&d, 1e9);
        let sol = shuffled_greedy_with_seed(&problem, &eval, seed);
        let route = sol.routes()[0].load_ids().to_vec();
        prop_assume!(route.len() >= 2);

        let idx = |id: usize| id - 1;
        let full = eval.route_distance(&route);
        for k in 0..route.len() {
            let id = route[k];
            let incoming = if k == 0 {
                d.depot_out(idx(id))
            } else {
                d.deadhead(idx(route[k - 1]), idx(id))
            };
            let outgoing = if k + 1 == route.len() {
                d.depot_back(idx(id))
            } else {
                d.deadhead(idx(id), idx(route[k + 1]))
            };
            let bridge = match (k.checked_sub(1).map(|p| route[p]), route.get(k + 1).copied()) {
                (None, Some(next)) => d.depot_out(idx(next)),
                (Some(prev), None) => d.depot_back(idx(prev)),
                (Some(prev), Some(next)) => d.deadhead(idx(prev), idx(next)),
                (None, None) => unreachable!("route has at least two loads"),
            };

            let mut reduced = route.clone();
            reduced.remove(k);
            let delta = full - eval.route_distance(&reduced);
            let expected = d.haul(idx(id)) + incoming + outgoing - bridge;
            prop_assert!((delta - expected).abs() < 1e-6, "k={} delta={} expected={}", k, delta, expected);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn seed_search_is_minimal(problem in problem_strategy(), seeds in 1u64..24) {
        let d = LoadDistances::from_problem(&problem);
        let eval = RouteEvaluator::new(&d, LIMIT);
        let scorer = DriverCostScorer::default();
        let result = SeedSearch::new(&problem, &eval, &scorer)
            .run(0..seeds)
            .expect("default scorer accepts builder output");
        for seed in 0..seeds {
            let sol = shuffled_greedy_with_seed(&problem, &eval, seed);
            let cost = scorer.score(&problem, &sol.schedules()).expect("scored");
            prop_assert!(result.cost.total_cost <= cost.total_cost);
        }
        prop_assert!(result.tied_seeds.contains(&result.best_seed));
    }
}
