//! Gap walk over an occupied timeline.
//!
//! # Algorithm
//!
//! 1. Start with `free_start = workday.start`.
//! 2. For each block (ascending), the gap is `[free_start, block.start)`.
//!    If it is at least the job duration long, place the job at the
//!    first grid line inside the gap and snap its end forward. Keep the
//!    window only if the snapped end still fits in the gap.
//! 3. Advance `free_start` to the block end.
//! 4. Repeat step 2 for the trailing gap `[free_start, workday.end)`.
//!
//! One window per gap: the earliest fit. Larger gaps are not enumerated
//! at every grid offset.
//!
//! # Complexity
//! O(b) in the number of blocks, after the timeline is built.

use tracing::{debug, warn};

use crate::grid::Grid;
use crate::models::{Assignment, OccupiedBlock, PlacementWindow};
use crate::timeline::build_occupied_timeline;
use crate::travel::TravelLookup;

use super::PlacementRequest;

/// Computes the valid placement windows for a job on one crew-day.
///
/// # Returns
/// Windows ordered by start; empty when nothing fits. A non-positive
/// duration is a caller error and also yields no windows.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_placement::daykey::DayKey;
/// use u_placement::models::Assignment;
/// use u_placement::placement::{compute_placement_windows, PlacementRequest};
/// use u_placement::travel::NoTravel;
///
/// let on = Utc.with_ymd_and_hms(2026, 9, 14, 15, 0, 0).unwrap();
/// let jobs = vec![Assignment::new("J1", "A", on, 120, 240)];
/// let day = DayKey::from_ymd(2026, 9, 14).unwrap();
///
/// let windows = compute_placement_windows(&jobs, &NoTravel, &PlacementRequest::new("A", day, 60));
/// let spans: Vec<_> = windows.iter().map(|w| (w.start_minutes, w.end_minutes)).collect();
/// assert_eq!(spans, vec![(0, 60), (240, 300)]);
/// ```
pub fn compute_placement_windows<L>(
    assignments: &[Assignment],
    travel: &L,
    request: &PlacementRequest<'_>,
) -> Vec<PlacementWindow>
where
    L: TravelLookup + ?Sized,
{
    let blocks = build_occupied_timeline(assignments, travel, &request.timeline_query());
    windows_in_timeline(&blocks, request)
}

/// Walks an already-built timeline and returns the placement windows.
///
/// `blocks` must be sorted by start, as [`build_occupied_timeline`] and
/// [`crate::timeline::CrewDayIndex::timeline`] return them.
pub fn windows_in_timeline(
    blocks: &[OccupiedBlock],
    request: &PlacementRequest<'_>,
) -> Vec<PlacementWindow> {
    let (crew_id, day) = (request.crew_id, request.day);
    let duration = request.job_duration_minutes;
    let workday = request.workday;
    let grid = request.grid;
    let mut windows = Vec::new();

    if duration <= 0 {
        warn!(duration, "non-positive job duration, no placement possible");
        return windows;
    }
    if !grid.is_valid() {
        warn!(
            grid = grid.minutes,
            "non-positive grid size, no placement possible"
        );
        return windows;
    }

    let mut free_start = workday.start_minutes;
    let mut last_end: Option<i64> = None;

    for block in blocks {
        if last_end.is_some_and(|end| block.start_minutes() < end) {
            warn!(
                crew_id,
                day = %day,
                start = block.start_minutes(),
                "occupied blocks overlap"
            );
        }
        let block_end = block.end_minutes();
        last_end = Some(last_end.map_or(block_end, |end| end.max(block_end)));

        let gap_end = block.start_minutes().min(workday.end_minutes);
        if let Some((start, end)) = fit_in_gap(free_start, gap_end, duration, grid) {
            windows.push(PlacementWindow::new(crew_id, day, start, end));
        }
        // Never walk backwards over an overlapping block.
        free_start = free_start.max(block_end);
    }

    if let Some((start, end)) = fit_in_gap(free_start, workday.end_minutes, duration, grid) {
        windows.push(PlacementWindow::new(crew_id, day, start, end));
    }

    debug!(
        crew_id,
        day = %day,
        duration,
        blocks = blocks.len(),
        windows = windows.len(),
        "computed placement windows"
    );

    windows
}

/// Earliest grid-aligned `[start, end)` of at least `duration` inside
/// `[gap_start, gap_end)`.
fn fit_in_gap(gap_start: i64, gap_end: i64, duration: i64, grid: Grid) -> Option<(i64, i64)> {
    if gap_end - gap_start < duration {
        return None;
    }
    let mut start = grid.snap_start(gap_start);
    if start < gap_start {
        // Flooring would reach into the preceding block.
        start += grid.minutes;
    }
    let end = grid.snap_end(start + duration);
    (end <= gap_end).then_some((start, end))
}
