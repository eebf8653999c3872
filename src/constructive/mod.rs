//! Constructive heuristics for building dispatch plans.
//!
//! - [`shuffled_greedy`] — seeded shuffle, then sequential first-fit per driver, O(n·k)
//! - [`nearest_neighbor`] — depot-seeded drivers extended by shortest deadhead, O(n²·k)

mod nearest_neighbor;
mod remaining;
mod shuffled_greedy;

pub use nearest_neighbor::nearest_neighbor;
pub use remaining::RemainingLoads;
pub use shuffled_greedy::{shuffled_greedy, shuffled_greedy_with_seed};
