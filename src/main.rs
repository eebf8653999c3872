//! Command line dispatch planner.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgMatches, Command};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use haul_routing::config::SolverConfig;
use haul_routing::evaluation::ScheduleCost;
use haul_routing::io::format_schedules;
use haul_routing::models::Solution;
use haul_routing::solver::{Solver, Strategy};

fn cli() -> Command {
    Command::new("haul-routing")
        .about("Assigns pickup/dropoff loads to driver routes")
        .arg_required_else_help(true)
        .arg(
            arg!(--config [CONFIG] "Path to a JSON solver config")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            arg!(--"max-duration" [MINUTES] "Maximum depot-to-depot route duration")
                .value_parser(clap::value_parser!(f64))
                .global(true),
        )
        .arg(
            arg!(--"driver-cost" [COST] "Fixed cost charged per driver")
                .value_parser(clap::value_parser!(f64))
                .global(true),
        )
        .arg(
            arg!(--threads [N] "Worker threads for the seed search")
                .value_parser(clap::value_parser!(usize))
                .global(true),
        )
        .arg(arg!(--json "Print the result as JSON").global(true))
        .subcommand(
            Command::new("search")
                .about("Tries many shuffle seeds and keeps the cheapest plan")
                .arg(input_arg())
                .arg(
                    arg!(--seeds [N] "Number of seeds to try, starting at 0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("greedy")
                .about("Builds a plan from one shuffle seed")
                .arg(input_arg())
                .arg(
                    arg!(--seed [SEED] "Shuffle seed")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("42"),
                ),
        )
        .subcommand(
            Command::new("nearest")
                .about("Builds a plan with the nearest-neighbor heuristic")
                .arg(input_arg()),
        )
}

fn input_arg() -> clap::Arg {
    arg!(-i --input <PATH> "Path to the problem file").value_parser(clap::value_parser!(PathBuf))
}

#[derive(Serialize)]
struct Report<'a> {
    strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    cost: &'a ScheduleCost,
    schedules: Vec<Vec<usize>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("haul_routing=info")),
        )
        .init();

    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("No subcommand was used"))?;

    let config = build_config(sub_m)?;
    config.validate()?;
    let input = sub_m
        .get_one::<PathBuf>("input")
        .ok_or_else(|| anyhow!("--input is required"))?;
    let solver = Solver::from_file(input, config)
        .with_context(|| format!("Failed to load problem from {}", input.display()))?;
    let json = sub_m.get_flag("json");

    match name {
        "search" => {
            let result = solver.search_configured_seeds()?;
            report(
                &solver,
                "search",
                Some(result.best_seed),
                &result.solution,
                &result.cost,
                json,
            )
        }
        "greedy" => {
            let seed = *sub_m
                .get_one::<u64>("seed")
                .ok_or_else(|| anyhow!("--seed is required"))?;
            let solution = solver.solve(Strategy::BruteForceSeed(seed))?;
            let cost = solver.score(&solution)?;
            report(&solver, "greedy", Some(seed), &solution, &cost, json)
        }
        "nearest" => {
            let solution = solver.solve(Strategy::NearestNeighbor)?;
            let cost = solver.score(&solution)?;
            report(&solver, "nearest", None, &solution, &cost, json)
        }
        other => Err(anyhow!("Invalid subcommand: {other}")),
    }
}

fn build_config(sub_m: &ArgMatches) -> Result<SolverConfig> {
    let mut config = match sub_m.get_one::<PathBuf>("config") {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(&minutes) = sub_m.get_one::<f64>("max-duration") {
        config.max_route_duration = minutes;
    }
    if let Some(&cost) = sub_m.get_one::<f64>("driver-cost") {
        config.driver_cost = cost;
    }
    if let Some(&threads) = sub_m.get_one::<usize>("threads") {
        config.threads = Some(threads);
    }
    if let Ok(Some(&seeds)) = sub_m.try_get_one::<u64>("seeds") {
        config.seed_count = seeds;
    }
    Ok(config)
}

fn report(
    solver: &Solver,
    strategy: &str,
    seed: Option<u64>,
    solution: &Solution,
    cost: &ScheduleCost,
    json: bool,
) -> Result<()> {
    for v in solver.evaluator().violations(solution) {
        warn!(
            driver = v.driver,
            distance = v.distance,
            limit = v.limit,
            loads = v.loads,
            "route exceeds the duration limit"
        );
    }

    if json {
        let report = Report {
            strategy: strategy.to_string(),
            seed,
            cost,
            schedules: solution.schedules(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(seed) = seed {
            println!("Seed: {seed}");
        }
        println!("Cost: {}", cost.total_cost);
        print!("{}", format_schedules(&solution.schedules()));
    }
    Ok(())
}
