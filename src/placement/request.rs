//! Placement request.

use crate::daykey::{DayKey, OrgTimeContext};
use crate::grid::Grid;
use crate::models::Workday;
use crate::timeline::TimelineQuery;

/// Input container for a placement search.
///
/// Defaults: workday `[0, 720)`, 15-minute grid, UTC, no home base, no
/// exclusion.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest<'a> {
    /// Length of the job to place (minutes). Must be positive.
    pub job_duration_minutes: i64,
    /// Crew to place on.
    pub crew_id: &'a str,
    /// Organization-local day.
    pub day: DayKey,
    /// Assignment being moved; it does not block its own new placement.
    pub exclude_assignment_id: Option<&'a str>,
    /// Crew home-base location for home-anchored travel.
    pub home_location_id: Option<&'a str>,
    /// Bookable bounds.
    pub workday: Workday,
    /// Snapping grid.
    pub grid: Grid,
    /// Organization time context. `None` = UTC.
    pub time_context: Option<&'a OrgTimeContext>,
}

impl<'a> PlacementRequest<'a> {
    /// Creates a request with default workday and grid.
    pub fn new(crew_id: &'a str, day: DayKey, job_duration_minutes: i64) -> Self {
        Self {
            job_duration_minutes,
            crew_id,
            day,
            exclude_assignment_id: None,
            home_location_id: None,
            workday: Workday::default(),
            grid: Grid::default(),
            time_context: None,
        }
    }

    /// Excludes the assignment being moved.
    pub fn excluding(mut self, assignment_id: &'a str) -> Self {
        self.exclude_assignment_id = Some(assignment_id);
        self
    }

    /// Sets the home-base location.
    pub fn with_home(mut self, location_id: &'a str) -> Self {
        self.home_location_id = Some(location_id);
        self
    }

    /// Sets the workday bounds.
    pub fn with_workday(mut self, workday: Workday) -> Self {
        self.workday = workday;
        self
    }

    /// Sets the snapping grid.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the organization time context.
    pub fn with_time_context(mut self, ctx: &'a OrgTimeContext) -> Self {
        self.time_context = Some(ctx);
        self
    }

    /// The timeline query this request lays out.
    pub fn timeline_query(&self) -> TimelineQuery<'a> {
        TimelineQuery {
            crew_id: self.crew_id,
            day: self.day,
            exclude_assignment_id: self.exclude_assignment_id,
            home_location_id: self.home_location_id,
            workday: self.workday,
            time_context: self.time_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let day = DayKey::from_ymd(2026, 11, 2).unwrap();
        let r = PlacementRequest::new("A", day, 60);
        assert_eq!(r.workday, Workday::until(720));
        assert_eq!(r.grid, Grid::new(15));
        assert!(r.exclude_assignment_id.is_none());
        assert!(r.time_context.is_none());
    }

    #[test]
    fn test_timeline_query_carries_fields() {
        let day = DayKey::from_ymd(2026, 11, 2).unwrap();
        let ctx = OrgTimeContext::utc();
        let r = PlacementRequest::new("A", day, 60)
            .excluding("J7")
            .with_home("yard")
            .with_workday(Workday::new(60, 600))
            .with_time_context(&ctx);

        let q = r.timeline_query();
        assert_eq!(q.crew_id, "A");
        assert_eq!(q.day, day);
        assert_eq!(q.exclude_assignment_id, Some("J7"));
        assert_eq!(q.home_location_id, Some("yard"));
        assert_eq!(q.workday, Workday::new(60, 600));
        assert!(q.time_context.is_some());
    }
}
