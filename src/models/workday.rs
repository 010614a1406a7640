//! Workday bounds.
//!
//! All minute offsets in this crate are relative to a fixed workday
//! origin (minute 0). A workday is the half-open interval a crew can be
//! booked in: `[start_minutes, end_minutes)`.

use serde::{Deserialize, Serialize};

/// Default workday length (minutes) when only defaults are configured.
pub const DEFAULT_WORKDAY_END_MINUTES: i64 = 720;

/// Bookable bounds of a crew's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workday {
    /// First bookable minute (inclusive).
    pub start_minutes: i64,
    /// End of the bookable day (exclusive).
    pub end_minutes: i64,
}

impl Workday {
    /// Creates workday bounds.
    pub fn new(start_minutes: i64, end_minutes: i64) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// A workday starting at the origin.
    pub fn until(end_minutes: i64) -> Self {
        Self::new(0, end_minutes)
    }

    /// Bookable length (minutes). Zero for inverted bounds.
    #[inline]
    pub fn length_minutes(&self) -> i64 {
        (self.end_minutes - self.start_minutes).max(0)
    }

    /// Whether a minute offset falls inside the workday.
    #[inline]
    pub fn contains(&self, minutes: i64) -> bool {
        minutes >= self.start_minutes && minutes < self.end_minutes
    }

    /// Clips `[start, end)` to the workday. `None` if nothing remains.
    pub fn clip(&self, start: i64, end: i64) -> Option<(i64, i64)> {
        let s = start.max(self.start_minutes);
        let e = end.min(self.end_minutes);
        if e > s {
            Some((s, e))
        } else {
            None
        }
    }
}

impl Default for Workday {
    fn default() -> Self {
        Self::until(DEFAULT_WORKDAY_END_MINUTES)
    }
}
