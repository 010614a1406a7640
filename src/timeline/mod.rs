//! Occupied-timeline construction.
//!
//! Merges a crew-day's job intervals with synthesized travel buffers
//! into one chronologically sorted list of [`OccupiedBlock`]s.
//!
//! # Algorithm
//!
//! 1. Keep assignments for the requested crew and organization-local day.
//! 2. Drop the excluded assignment (the one being moved) and cancelled ones.
//! 3. Sort by start (ties: end, then id).
//! 4. Resolve travel buffers between consecutive stops, home anchors included.
//! 5. Merge and sort by start.
//!
//! Travel buffers are inserted between already-sorted jobs, so blocks do
//! not overlap as long as the jobs themselves do not. That is not
//! re-validated here; see [`crate::validation::check_timeline`].
//!
//! # Complexity
//! O(n log n) in the number of the crew-day's assignments.

mod index;
mod summary;

pub use index::CrewDayIndex;
pub use summary::CrewDaySummary;

use tracing::debug;

use crate::daykey::{DayKey, OrgTimeContext};
use crate::models::{Assignment, OccupiedBlock, Workday};
use crate::travel::{resolve_travel_buffers, TravelLookup};

/// Selects one crew-day and the context needed to lay it out.
#[derive(Debug, Clone, Copy)]
pub struct TimelineQuery<'a> {
    /// Crew to lay out.
    pub crew_id: &'a str,
    /// Organization-local day.
    pub day: DayKey,
    /// Assignment being repositioned; it must not block itself.
    pub exclude_assignment_id: Option<&'a str>,
    /// Location of the crew's home base, for home-anchored legs.
    pub home_location_id: Option<&'a str>,
    /// Workday bounds (home legs are clamped to them).
    pub workday: Workday,
    /// Organization time context. `None` = UTC.
    pub time_context: Option<&'a OrgTimeContext>,
}

impl<'a> TimelineQuery<'a> {
    /// Creates a query over the default workday in UTC.
    pub fn new(crew_id: &'a str, day: DayKey) -> Self {
        Self {
            crew_id,
            day,
            exclude_assignment_id: None,
            home_location_id: None,
            workday: Workday::default(),
            time_context: None,
        }
    }

    /// Excludes one assignment (the item being moved).
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

    /// Sets the organization time context.
    pub fn with_time_context(mut self, ctx: &'a OrgTimeContext) -> Self {
        self.time_context = Some(ctx);
        self
    }

    /// Whether an assignment blocks time for this crew-day, ignoring the day.
    fn keeps(&self, a: &Assignment) -> bool {
        a.crew_id == self.crew_id
            && a.status.occupies_time()
            && self.exclude_assignment_id != Some(a.id.as_str())
    }

    /// Whether an assignment blocks time for this crew-day.
    pub fn selects(&self, a: &Assignment) -> bool {
        self.keeps(a) && a.day_key(self.time_context) == self.day
    }
}

/// Builds the occupied timeline for one crew-day.
///
/// # Returns
/// Job and travel blocks sorted ascending by start. Empty when the crew
/// has nothing booked that day.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_placement::daykey::DayKey;
/// use u_placement::models::Assignment;
/// use u_placement::timeline::{build_occupied_timeline, TimelineQuery};
/// use u_placement::travel::TravelMatrix;
///
/// let on = Utc.with_ymd_and_hms(2026, 9, 14, 15, 0, 0).unwrap();
/// let jobs = vec![
///     Assignment::new("J1", "A", on, 60, 120).with_location("s1"),
///     Assignment::new("J2", "A", on, 180, 240).with_location("s2"),
/// ];
/// let travel = TravelMatrix::new().with_leg("s1", "s2", 25);
/// let query = TimelineQuery::new("A", DayKey::from_ymd(2026, 9, 14).unwrap());
///
/// let blocks = build_occupied_timeline(&jobs, &travel, &query);
/// let spans: Vec<_> = blocks.iter().map(|b| (b.start_minutes(), b.end_minutes())).collect();
/// assert_eq!(spans, vec![(60, 120), (120, 145), (180, 240)]);
/// ```
pub fn build_occupied_timeline<L>(
    assignments: &[Assignment],
    travel: &L,
    query: &TimelineQuery<'_>,
) -> Vec<OccupiedBlock>
where
    L: TravelLookup + ?Sized,
{
    let selected: Vec<&Assignment> = assignments.iter().filter(|a| query.selects(a)).collect();
    layout(selected, travel, query)
}

/// Sorts the crew-day's jobs and interleaves travel buffers.
fn layout<L>(
    mut jobs: Vec<&Assignment>,
    travel: &L,
    query: &TimelineQuery<'_>,
) -> Vec<OccupiedBlock>
where
    L: TravelLookup + ?Sized,
{
    jobs.sort_by(|a, b| {
        a.start_minutes
            .cmp(&b.start_minutes)
            .then(a.end_minutes.cmp(&b.end_minutes))
            .then_with(|| a.id.cmp(&b.id))
    });

    let buffers = resolve_travel_buffers(&jobs, travel, query.home_location_id, query.workday);

    let mut blocks: Vec<OccupiedBlock> = jobs
        .iter()
        .map(|a| OccupiedBlock::Assignment {
            assignment_id: a.id.clone(),
            start_minutes: a.start_minutes,
            end_minutes: a.end_minutes,
        })
        .chain(buffers.into_iter().map(OccupiedBlock::Travel))
        .collect();
    blocks.sort_by_key(|b| (b.start_minutes(), b.end_minutes()));

    debug!(
        crew_id = query.crew_id,
        day = %query.day,
        jobs = jobs.len(),
        blocks = blocks.len(),
        excluded = query.exclude_assignment_id,
        "built occupied timeline"
    );

    blocks
}
