//! Fixed visual time grid.
//!
//! Placement boundaries are quantized to grid lines (15 minutes by
//! default). Starts snap backward and ends snap forward, so a snapped
//! interval is never shorter than the raw one it was derived from.

use serde::{Deserialize, Serialize};

/// Default grid size in minutes.
pub const DEFAULT_GRID_MINUTES: i64 = 15;

/// A quantization grid over workday minute offsets.
///
/// `minutes` must be positive; [`crate::config::PlacementConfig::validate`]
/// and [`crate::validation::validate_request`] reject anything else.
/// Check [`Grid::is_valid`] before snapping with a grid built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Grid slot length (minutes).
    pub minutes: i64,
}

impl Grid {
    /// Creates a grid with the given slot length.
    ///
    /// Non-positive sizes are accepted here so that settings can be
    /// reported by validation; see [`Grid::is_valid`].
    pub fn new(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Whether the grid can be snapped to (positive slot length).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.minutes > 0
    }

    /// Floors `minutes` to the grid line at or before it.
    ///
    /// # Panics
    /// Panics if the slot length is zero.
    #[inline]
    pub fn snap_start(&self, minutes: i64) -> i64 {
        minutes.div_euclid(self.minutes) * self.minutes
    }

    /// Ceils `minutes` to the grid line at or after it.
    ///
    /// # Panics
    /// Panics if the slot length is zero.
    #[inline]
    pub fn snap_end(&self, minutes: i64) -> i64 {
        let floor = self.snap_start(minutes);
        if floor == minutes {
            floor
        } else {
            floor + self.minutes
        }
    }

    /// Whether `minutes` lies on a grid line.
    ///
    /// # Panics
    /// Panics if the slot length is zero.
    #[inline]
    pub fn is_aligned(&self, minutes: i64) -> bool {
        minutes.rem_euclid(self.minutes) == 0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_MINUTES)
    }
}

/// [`Grid::snap_start`] on the default 15-minute grid.
pub fn snap_start(minutes: i64) -> i64 {
    Grid::default().snap_start(minutes)
}

/// [`Grid::snap_end`] on the default 15-minute grid.
pub fn snap_end(minutes: i64) -> i64 {
    Grid::default().snap_end(minutes)
}
