//! Placement window model.

use serde::{Deserialize, Serialize};

use crate::daykey::DayKey;

/// A grid-aligned free interval that can host a job.
///
/// Half-open: `[start_minutes, end_minutes)`. Windows are produced fresh
/// for each request and carry no identity beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementWindow {
    /// Crew the window belongs to.
    pub crew_id: String,
    /// Organization-local day.
    pub date: DayKey,
    /// Window start (minutes, inclusive).
    pub start_minutes: i64,
    /// Window end (minutes, exclusive).
    pub end_minutes: i64,
}

impl PlacementWindow {
    /// Creates a window.
    pub fn new(
        crew_id: impl Into<String>,
        date: DayKey,
        start_minutes: i64,
        end_minutes: i64,
    ) -> Self {
        Self {
            crew_id: crew_id.into(),
            date,
            start_minutes,
            end_minutes,
        }
    }

    /// Window length (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes - self.start_minutes
    }

    /// Whether a minute offset falls inside the window.
    #[inline]
    pub fn contains(&self, minutes: i64) -> bool {
        minutes >= self.start_minutes && minutes < self.end_minutes
    }

    /// Whether `[start, end)` lies entirely inside the window.
    pub fn contains_interval(&self, start: i64, end: i64) -> bool {
        start < end && start >= self.start_minutes && end <= self.end_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: i64, end: i64) -> PlacementWindow {
        PlacementWindow::new("crew-a", DayKey::from_ymd(2026, 7, 1).unwrap(), start, end)
    }

    #[test]
    fn test_window_contains_half_open() {
        let w = window(240, 300);
        assert_eq!(w.duration_minutes(), 60);
        assert!(w.contains(240));
        assert!(w.contains(299));
        assert!(!w.contains(300));
        assert!(!w.contains(239));
    }

    #[test]
    fn test_window_contains_interval() {
        let w = window(240, 300);
        assert!(w.contains_interval(240, 300));
        assert!(w.contains_interval(255, 285));
        assert!(!w.contains_interval(230, 290));
        assert!(!w.contains_interval(250, 310));
        assert!(!w.contains_interval(260, 260)); // empty
    }
}
