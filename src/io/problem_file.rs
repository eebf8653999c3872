//! Problem file reader.
//!
//! One load per line: an integer id followed by the pickup and dropoff
//! coordinates, each written as `(x,y)`. An optional `loadNumber` header
//! line and blank lines are skipped.
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, RoutingError};
use crate::models::{Load, Point, Problem};

const HEADER: &str = "loadNumber";

/// Reads and parses the problem file at `path`.
pub fn load_problem<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let problem = parse_problem(&text)?;
    debug!(path = %path.display(), loads = problem.len(), "loaded problem");
    Ok(problem)
}

/// Parses problem text.
///
/// # Examples
///
/// ```
/// use haul_routing::io::parse_problem;
///
/// let problem = parse_problem(
///     "loadNumber pickup dropoff\n1 (0,3) (4,3)\n2 (4, 0) (8, 0)\n",
/// )
/// .unwrap();
/// assert_eq!(problem.len(), 2);
/// assert!((problem.load(1).haul_distance() - 4.0).abs() < 1e-10);
/// ```
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut loads = Vec::new();
    let mut first = true;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let is_first = std::mem::replace(&mut first, false);
        if is_first && line.split_whitespace().next() == Some(HEADER) {
            continue;
        }
        loads.push(parse_line(line).map_err(|message| RoutingError::Parse {
            line: idx + 1,
            message,
        })?);
    }

    Problem::new(loads)
}

fn parse_line(line: &str) -> std::result::Result<Load, String> {
    let (id_token, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("expected `<id> (x,y) (x,y)`, got `{line}`"))?;
    let id: usize = id_token
        .parse()
        .map_err(|_| format!("invalid load id `{id_token}`"))?;

    let (pickup, rest) = parse_point(rest).ok_or("missing or malformed pickup")?;
    let (dropoff, rest) = parse_point(rest).ok_or("missing or malformed dropoff")?;
    if !rest.trim().is_empty() {
        return Err(format!("unexpected trailing text `{}`", rest.trim()));
    }

    Ok(Load::new(id, pickup, dropoff))
}

/// Parses a leading `(x,y)` and returns it with the unparsed remainder.
fn parse_point(s: &str) -> Option<(Point, &str)> {
    let s = s.trim_start().strip_prefix('(')?;
    let (inner, rest) = s.split_once(')')?;
    let (x, y) = inner.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some((Point::new(x, y), rest))
}
