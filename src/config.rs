//! Organization placement settings.
//!
//! Loaded from organization settings (JSON). Every field has a default,
//! so an empty object `{}` is a valid configuration:
//!
//! | Field | Default |
//! |-------|---------|
//! | `workday_start_minutes` | `0` |
//! | `workday_end_minutes` | `720` |
//! | `grid_minutes` | `15` |
//! | `time_zone` | none (UTC) |
//! | `home_location_id` | none |
//!
//! Workday bounds must lie on grid lines. With aligned bounds the first
//! window of an empty day is exactly `[start, snap_end(start + duration))`.

use serde::{Deserialize, Serialize};

use crate::daykey::{DayKey, OrgTimeContext};
use crate::error::{PlacementError, Result};
use crate::grid::{Grid, DEFAULT_GRID_MINUTES};
use crate::models::{Workday, DEFAULT_WORKDAY_END_MINUTES};
use crate::placement::PlacementRequest;

/// Placement settings for one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// First bookable minute of the workday.
    pub workday_start_minutes: i64,
    /// End of the bookable workday (exclusive).
    pub workday_end_minutes: i64,
    /// Snapping grid size (minutes).
    pub grid_minutes: i64,
    /// IANA time zone of the organization.
    pub time_zone: Option<String>,
    /// Home-base location key for home-anchored travel.
    pub home_location_id: Option<String>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            workday_start_minutes: 0,
            workday_end_minutes: DEFAULT_WORKDAY_END_MINUTES,
            grid_minutes: DEFAULT_GRID_MINUTES,
            time_zone: None,
            home_location_id: None,
        }
    }
}

impl PlacementConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks bounds, grid size, grid alignment and time zone.
    pub fn validate(&self) -> Result<()> {
        if !self.grid().is_valid() {
            return Err(PlacementError::InvalidConfig(format!(
                "grid_minutes must be positive, got {}",
                self.grid_minutes
            )));
        }
        if self.workday_start_minutes < 0 {
            return Err(PlacementError::InvalidConfig(format!(
                "workday_start_minutes must not be negative, got {}",
                self.workday_start_minutes
            )));
        }
        if self.workday_end_minutes <= self.workday_start_minutes {
            return Err(PlacementError::InvalidConfig(format!(
                "workday [{}, {}) is empty",
                self.workday_start_minutes, self.workday_end_minutes
            )));
        }
        let grid = self.grid();
        for (name, bound) in [
            ("workday_start_minutes", self.workday_start_minutes),
            ("workday_end_minutes", self.workday_end_minutes),
        ] {
            if !grid.is_aligned(bound) {
                return Err(PlacementError::InvalidConfig(format!(
                    "{name} ({bound}) is not on the {}-minute grid",
                    grid.minutes
                )));
            }
        }
        self.time_context().map(|_| ())
    }

    /// Workday bounds.
    pub fn workday(&self) -> Workday {
        Workday::new(self.workday_start_minutes, self.workday_end_minutes)
    }

    /// Snapping grid.
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_minutes)
    }

    /// Organization time context; UTC when no zone is configured.
    pub fn time_context(&self) -> Result<OrgTimeContext> {
        match &self.time_zone {
            Some(name) => OrgTimeContext::from_tz_name(name),
            None => Ok(OrgTimeContext::utc()),
        }
    }

    /// A placement request with this organization's workday, grid and
    /// home base applied.
    ///
    /// The time context is owned by the caller; attach it with
    /// [`PlacementRequest::with_time_context`].
    pub fn request<'a>(
        &'a self,
        crew_id: &'a str,
        day: DayKey,
        job_duration_minutes: i64,
    ) -> PlacementRequest<'a> {
        let mut request = PlacementRequest::new(crew_id, day, job_duration_minutes)
            .with_workday(self.workday())
            .with_grid(self.grid());
        if let Some(home) = self.home_location_id.as_deref() {
            request = request.with_home(home);
        }
        request
    }
}
