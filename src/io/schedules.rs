//! Text rendering of schedules.

use crate::models::Schedules;

/// Renders one line per driver, e.g. `[1, 3, 7]`.
///
/// # Examples
///
/// ```
/// use haul_routing::io::format_schedules;
///
/// assert_eq!(format_schedules(&vec![vec![1, 3], vec![2]]), "[1, 3]\n[2]\n");
/// ```
pub fn format_schedules(schedules: &Schedules) -> String {
    let mut out = String::new();
    for schedule in schedules {
        let ids: Vec<String> = schedule.iter().map(usize::to_string).collect();
        out.push('[');
        out.push_str(&ids.join(", "));
        out.push_str("]\n");
    }
    out
}
