//! Crew assignment model.
//!
//! An assignment places one job on one crew for one calendar day. It is
//! owned by the persistence layer; this crate only reads it.
//!
//! # Time Model
//! `start_minutes`/`end_minutes` are minute offsets from the workday
//! origin, half-open: `[start_minutes, end_minutes)`. The calendar day
//! comes from `scheduled_on`, normalized through
//! [`crate::daykey::day_key`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::daykey::{day_key, DayKey, OrgTimeContext};

/// Lifecycle status of an assignment.
///
/// `Scheduled → InProgress → Completed`, with `Cancelled` reachable from
/// either non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Planned, not started.
    #[default]
    Scheduled,
    /// Crew is on site.
    InProgress,
    /// Work finished.
    Completed,
    /// Withdrawn; no longer occupies the crew's day.
    Cancelled,
}

impl AssignmentStatus {
    /// Whether no further transitions are allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition_to(&self, next: AssignmentStatus) -> bool {
        use AssignmentStatus::*;
        matches!(
            (self, next),
            (Scheduled, InProgress)
                | (InProgress, Completed)
                | (Scheduled, Cancelled)
                | (InProgress, Cancelled)
        )
    }

    /// Whether an assignment in this status blocks time on the timeline.
    pub fn occupies_time(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// A job placed on a crew's day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Crew performing the job.
    pub crew_id: String,
    /// Stored timestamp identifying the calendar day (any time that day).
    pub scheduled_on: DateTime<Utc>,
    /// Start offset from the workday origin (minutes, inclusive).
    pub start_minutes: i64,
    /// End offset from the workday origin (minutes, exclusive).
    pub end_minutes: i64,
    /// Job site, keyed the same way as the travel lookup. `None` when
    /// the job has no resolvable location.
    pub location_id: Option<String>,
    /// Crew travels from the home base to this job.
    pub starts_at_home: bool,
    /// Crew returns to the home base after this job.
    pub ends_at_home: bool,
    /// Lifecycle status.
    pub status: AssignmentStatus,
}

impl Assignment {
    /// Creates a scheduled assignment with no location or home flags.
    pub fn new(
        id: impl Into<String>,
        crew_id: impl Into<String>,
        scheduled_on: DateTime<Utc>,
        start_minutes: i64,
        end_minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            crew_id: crew_id.into(),
            scheduled_on,
            start_minutes,
            end_minutes,
            location_id: None,
            starts_at_home: false,
            ends_at_home: false,
            status: AssignmentStatus::Scheduled,
        }
    }

    /// Sets the job site.
    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    /// Marks the inbound leg as starting from the home base.
    pub fn starting_at_home(mut self) -> Self {
        self.starts_at_home = true;
        self
    }

    /// Marks the outbound leg as returning to the home base.
    pub fn ending_at_home(mut self) -> Self {
        self.ends_at_home = true;
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Duration (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes - self.start_minutes
    }

    /// Organization-local day this assignment belongs to.
    pub fn day_key(&self, ctx: Option<&OrgTimeContext>) -> DayKey {
        day_key(self.scheduled_on, ctx)
    }

    /// Whether this assignment belongs to the given crew-day.
    pub fn is_on(&self, crew_id: &str, day: DayKey, ctx: Option<&OrgTimeContext>) -> bool {
        self.crew_id == crew_id && self.day_key(ctx) == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_assignment_builder() {
        let a = Assignment::new("J1", "crew-a", day(), 120, 240)
            .with_location("site-1")
            .starting_at_home()
            .ending_at_home()
            .with_status(AssignmentStatus::InProgress);

        assert_eq!(a.id, "J1");
        assert_eq!(a.crew_id, "crew-a");
        assert_eq!(a.duration_minutes(), 120);
        assert_eq!(a.location_id.as_deref(), Some("site-1"));
        assert!(a.starts_at_home);
        assert!(a.ends_at_home);
        assert_eq!(a.status, AssignmentStatus::InProgress);
    }

    #[test]
    fn test_assignment_defaults() {
        let a = Assignment::new("J1", "crew-a", day(), 0, 30);
        assert!(a.location_id.is_none());
        assert!(!a.starts_at_home);
        assert!(!a.ends_at_home);
        assert_eq!(a.status, AssignmentStatus::Scheduled);
    }

    #[test]
    fn test_is_on_crew_day() {
        let a = Assignment::new("J1", "crew-a", day(), 0, 30);
        let key = DayKey::from_ymd(2026, 5, 4).unwrap();
        assert!(a.is_on("crew-a", key, None));
        assert!(!a.is_on("crew-b", key, None));
        let next_day = DayKey::from_ymd(2026, 5, 5).unwrap();
        assert!(!a.is_on("crew-a", next_day, None));
    }

    #[test]
    fn test_status_transitions() {
        use AssignmentStatus::*;
        assert!(Scheduled.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
        assert!(Scheduled.can_transition_to(Cancelled));
        assert!(InProgress.can_transition_to(Cancelled));

        assert!(!Scheduled.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Scheduled));
        assert!(!InProgress.can_transition_to(Scheduled));
    }

    #[test]
    fn test_status_terminal_and_occupancy() {
        use AssignmentStatus::*;
        assert!(!Scheduled.is_terminal());
        assert!(!InProgress.is_terminal());
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());

        assert!(Completed.occupies_time());
        assert!(!Cancelled.occupies_time());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&AssignmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
