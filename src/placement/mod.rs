//! Placement window search.
//!
//! Answers "where can a job of this length go on this crew-day?" by
//! walking the occupied timeline between the workday bounds. Results
//! feed both the interactive drop targets and server-side validation of
//! a proposed write.
//!
//! # Guarantees
//!
//! Every returned window:
//! - starts and ends on a grid line,
//! - is at least the requested duration long,
//! - lies inside one free gap (no overlap with any occupied block).
//!
//! No valid placement is an empty list, never an error.

mod finder;
mod request;

pub use finder::{compute_placement_windows, windows_in_timeline};
pub use request::PlacementRequest;

use crate::models::PlacementWindow;

/// Whether any window contains the minute offset.
pub fn is_time_in_placement_window(minutes: i64, windows: &[PlacementWindow]) -> bool {
    windows.iter().any(|w| w.contains(minutes))
}

/// First window containing the minute offset.
pub fn find_placement_window(
    minutes: i64,
    windows: &[PlacementWindow],
) -> Option<&PlacementWindow> {
    windows.iter().find(|w| w.contains(minutes))
}

/// Whether a proposed `[start, end)` lies entirely inside one window.
///
/// Used to reject a write whose placement was not offered.
pub fn placement_accepts(
    start_minutes: i64,
    end_minutes: i64,
    windows: &[PlacementWindow],
) -> bool {
    windows
        .iter()
        .any(|w| w.contains_interval(start_minutes, end_minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daykey::DayKey;

    fn windows() -> Vec<PlacementWindow> {
        let day = DayKey::from_ymd(2026, 9, 14).unwrap();
        vec![
            PlacementWindow::new("A", day, 0, 60),
            PlacementWindow::new("A", day, 240, 300),
        ]
    }

    #[test]
    fn test_is_time_in_placement_window() {
        let ws = windows();
        assert!(is_time_in_placement_window(0, &ws));
        assert!(is_time_in_placement_window(59, &ws));
        assert!(!is_time_in_placement_window(60, &ws)); // exclusive end
        assert!(!is_time_in_placement_window(120, &ws));
        assert!(is_time_in_placement_window(240, &ws));
        assert!(!is_time_in_placement_window(10, &[]));
    }

    #[test]
    fn test_find_placement_window() {
        let ws = windows();
        let w = find_placement_window(250, &ws).unwrap();
        assert_eq!((w.start_minutes, w.end_minutes), (240, 300));
        assert!(find_placement_window(300, &ws).is_none());
        assert!(find_placement_window(-5, &ws).is_none());
    }

    #[test]
    fn test_placement_accepts() {
        let ws = windows();
        assert!(placement_accepts(240, 300, &ws));
        assert!(placement_accepts(0, 30, &ws));
        assert!(!placement_accepts(30, 90, &ws));
        assert!(!placement_accepts(45, 250, &ws)); // spans two windows
        assert!(!placement_accepts(100, 160, &ws));
    }
}
