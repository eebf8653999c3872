//! Seed search over the randomized greedy builder.
//!
//! - [`SeedSearch`] — parallel multi-start over a seed range, min-cost selection

mod seed_search;

pub use seed_search::{SeedOutcome, SeedSearch, SeedSearchResult};
