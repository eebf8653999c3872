//! Problem file input and schedule output.

mod problem_file;
mod schedules;

pub use problem_file::{load_problem, parse_problem};
pub use schedules::format_schedules;
