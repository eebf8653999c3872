//! Error type shared by the loader, the builders and the seed search.

use std::fmt;

/// Errors raised while loading a problem, building routes or scoring
/// schedules.
///
/// Evaluating an empty route is not represented here: it is a programming
/// error and panics (see [`RouteEvaluator::route_distance`]).
///
/// [`RouteEvaluator::route_distance`]: crate::evaluation::RouteEvaluator::route_distance
#[derive(Debug)]
pub enum RoutingError {
    /// The problem file could not be read.
    Io(std::io::Error),
    /// A line of the problem file is malformed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
    /// Load ids are not exactly `1..=n`.
    InvalidLoadIds {
        /// Number of loads in the problem.
        count: usize,
        /// Offending ids (duplicates, out of range, zero).
        offending: Vec<usize>,
    },
    /// A schedule handed to the scorer does not cover the problem exactly once.
    InvalidSchedule(String),
    /// Nearest-neighbor search found no candidate while loads were still
    /// unassigned.
    NoCandidate {
        /// Last load of the route being extended, 0 if no route was open.
        route_tail: usize,
        /// Load ids still unassigned at the time of failure.
        remaining: Vec<usize>,
    },
    /// Every seed of a seed search failed.
    NoFeasibleSeed {
        /// Number of seeds that were tried.
        tried: u64,
    },
    /// Solver configuration is out of range.
    Config(String),
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read problem file: {e}"),
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
            Self::InvalidLoadIds { count, offending } => write!(
                f,
                "load ids must be dense 1..={count}, offending ids: {offending:?}"
            ),
            Self::InvalidSchedule(msg) => write!(f, "invalid schedule: {msg}"),
            Self::NoCandidate {
                route_tail,
                remaining,
            } => write!(
                f,
                "no nearest load found after load {route_tail}, remaining: {remaining:?}"
            ),
            Self::NoFeasibleSeed { tried } => {
                write!(f, "all {tried} seeds failed to produce a scored solution")
            }
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for RoutingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RoutingError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_parse() {
        let e = RoutingError::Parse {
            line: 3,
            message: "missing dropoff".into(),
        };
        assert_eq!(e.to_string(), "line 3: missing dropoff");
    }

    #[test]
    fn test_display_no_candidate() {
        let e = RoutingError::NoCandidate {
            route_tail: 4,
            remaining: vec![2, 7],
        };
        assert_eq!(
            e.to_string(),
            "no nearest load found after load 4, remaining: [2, 7]"
        );
    }

    #[test]
    fn test_io_source() {
        let e: RoutingError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(e.source().is_some());
        assert!(RoutingError::Config("x".into()).source().is_none());
    }
}
