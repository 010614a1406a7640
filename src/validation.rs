//! Boundary validation for placement input.
//!
//! The engine itself is total over well-formed input and never fails on
//! business rules. These checks belong to the validating boundary in
//! front of it and report every problem found, not just the first:
//! - Duplicate assignment IDs
//! - Inverted or empty intervals (`start >= end`)
//! - Intervals outside the workday
//! - Jobs overlapping on the same crew-day
//! - Non-positive job durations and unusable workday/grid settings
//! - Overlapping blocks in a built timeline

use std::collections::{HashMap, HashSet};

use crate::daykey::{DayKey, OrgTimeContext};
use crate::models::{Assignment, OccupiedBlock, Workday};
use crate::placement::PlacementRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two assignments share the same ID.
    DuplicateId,
    /// `start >= end`.
    InvalidInterval,
    /// Interval reaches outside the workday.
    OutsideWorkday,
    /// Two jobs or blocks of one crew-day overlap.
    Overlap,
    /// Requested job duration is zero or negative.
    InvalidDuration,
    /// Workday bounds or grid size are unusable.
    InvalidSettings,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an assignment snapshot before it reaches the engine.
///
/// Checks:
/// 1. No duplicate assignment IDs
/// 2. `0 <= start < end` and the interval fits the workday
/// 3. No two occupying jobs overlap on the same crew-day
pub fn validate_assignments(
    assignments: &[Assignment],
    workday: Workday,
    ctx: Option<&OrgTimeContext>,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut crew_days: HashMap<(&str, DayKey), Vec<&Assignment>> = HashMap::new();

    for a in assignments {
        if !ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate assignment ID: {}", a.id),
            ));
        }

        if a.start_minutes >= a.end_minutes {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Assignment '{}' has empty or inverted interval [{}, {})",
                    a.id, a.start_minutes, a.end_minutes
                ),
            ));
            continue;
        }

        if a.start_minutes < workday.start_minutes || a.end_minutes > workday.end_minutes {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutsideWorkday,
                format!(
                    "Assignment '{}' [{}, {}) is outside the workday [{}, {})",
                    a.id, a.start_minutes, a.end_minutes, workday.start_minutes, workday.end_minutes
                ),
            ));
        }

        if a.status.occupies_time() {
            crew_days
                .entry((a.crew_id.as_str(), a.day_key(ctx)))
                .or_default()
                .push(a);
        }
    }

    for ((crew, day), mut jobs) in crew_days {
        jobs.sort_by_key(|a| (a.start_minutes, a.end_minutes));
        for pair in jobs.windows(2) {
            if pair[1].start_minutes < pair[0].end_minutes {
                errors.push(ValidationError::new(
                    ValidationErrorKind::Overlap,
                    format!(
                        "Assignments '{}' and '{}' overlap for crew '{}' on {}",
                        pair[0].id, pair[1].id, crew, day
                    ),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates a placement request.
pub fn validate_request(request: &PlacementRequest<'_>) -> ValidationResult {
    let mut errors = Vec::new();

    if request.job_duration_minutes <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            format!(
                "Job duration must be positive, got {}",
                request.job_duration_minutes
            ),
        ));
    }
    if request.workday.end_minutes <= request.workday.start_minutes {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSettings,
            format!(
                "Workday [{}, {}) is empty",
                request.workday.start_minutes, request.workday.end_minutes
            ),
        ));
    }
    if !request.grid.is_valid() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSettings,
            format!("Grid size must be positive, got {}", request.grid.minutes),
        ));
    } else {
        let (start, end) = (request.workday.start_minutes, request.workday.end_minutes);
        if !request.grid.is_aligned(start) || !request.grid.is_aligned(end) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSettings,
                format!(
                    "Workday [{start}, {end}) is not on the {}-minute grid",
                    request.grid.minutes
                ),
            ));
        }
    }

    finish(errors)
}

/// Checks that a built timeline is sorted and non-overlapping.
///
/// The gap walk assumes this; it holds by construction for validated
/// input, but racing writes upstream can break it.
pub fn check_timeline(blocks: &[OccupiedBlock]) -> ValidationResult {
    let mut errors = Vec::new();

    for b in blocks {
        let (start, end) = (b.start_minutes(), b.end_minutes());
        if start > end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!("Block [{start}, {end}) is inverted"),
            ));
        }
    }

    for pair in blocks.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start_minutes() < prev.end_minutes() {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overlap,
                format!(
                    "Block [{}, {}) overlaps block [{}, {})",
                    next.start_minutes(),
                    next.end_minutes(),
                    prev.start_minutes(),
                    prev.end_minutes()
                ),
            ));
        }
    }

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::models::AssignmentStatus;
    use crate::timeline::{build_occupied_timeline, TimelineQuery};
    use crate::travel::TravelMatrix;
    use chrono::{DateTime, TimeZone, Utc};

    fn on(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, d, 16, 0, 0).unwrap()
    }

    fn day() -> DayKey {
        DayKey::from_ymd(2026, 9, 14).unwrap()
    }

    fn workday() -> Workday {
        Workday::until(720)
    }

    fn sample() -> Vec<Assignment> {
        vec![
            Assignment::new("J1", "A", on(14), 60, 120),
            Assignment::new("J2", "A", on(14), 120, 240),
            Assignment::new("J3", "B", on(14), 60, 120),
            Assignment::new("J4", "A", on(15), 60, 120),
        ]
    }

    #[test]
    fn test_valid_snapshot() {
        assert!(validate_assignments(&sample(), workday(), None).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut jobs = sample();
        jobs.push(Assignment::new("J1", "C", on(14), 0, 30));
        let errors = validate_assignments(&jobs, workday(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_invalid_interval() {
        let jobs = vec![
            Assignment::new("J1", "A", on(14), 120, 120),
            Assignment::new("J2", "A", on(14), 200, 150),
        ];
        let errors = validate_assignments(&jobs, workday(), None).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidInterval)
                .count(),
            2
        );
    }

    #[test]
    fn test_outside_workday() {
        let jobs = vec![Assignment::new("J1", "A", on(14), 700, 760)];
        let errors = validate_assignments(&jobs, workday(), None).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutsideWorkday));
    }

    #[test]
    fn test_overlap_same_crew_day() {
        let mut jobs = sample();
        jobs.push(Assignment::new("J5", "A", on(14), 100, 130));
        let errors = validate_assignments(&jobs, workday(), None).unwrap_err();
        let overlap = errors
            .iter()
            .find(|e| e.kind == ValidationErrorKind::Overlap)
            .unwrap();
        assert!(overlap.message.contains("J5"));
    }

    #[test]
    fn test_cancelled_overlap_ignored() {
        let mut jobs = sample();
        let status = AssignmentStatus::Cancelled;
        let cancelled = Assignment::new("J5", "A", on(14), 100, 130).with_status(status);
        jobs.push(cancelled);
        assert!(validate_assignments(&jobs, workday(), None).is_ok());
    }

    #[test]
    fn test_validate_request() {
        let ok = PlacementRequest::new("A", day(), 60);
        assert!(validate_request(&ok).is_ok());

        let errors = validate_request(&PlacementRequest::new("A", day(), 0)).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidDuration);

        let bad = PlacementRequest::new("A", day(), -5)
            .with_workday(Workday::new(300, 300))
            .with_grid(Grid::new(0));
        let errors = validate_request(&bad).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_request_off_grid_workday() {
        let off_grid = PlacementRequest::new("A", day(), 60).with_workday(Workday::new(50, 600));
        let errors = validate_request(&off_grid).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidSettings);

        let coarse = off_grid
            .with_workday(Workday::new(60, 600))
            .with_grid(Grid::new(40));
        assert!(validate_request(&coarse).is_err());
    }

    #[test]
    fn test_check_built_timeline() {
        let jobs = vec![
            Assignment::new("J1", "A", on(14), 60, 120).with_location("s1"),
            Assignment::new("J2", "A", on(14), 150, 240).with_location("s2"),
        ];
        let travel = TravelMatrix::new().with_default(45);
        let blocks = build_occupied_timeline(&jobs, &travel, &TimelineQuery::new("A", day()));
        assert!(check_timeline(&blocks).is_ok());
    }

    #[test]
    fn test_check_timeline_overlap() {
        let blocks = vec![
            OccupiedBlock::Assignment {
                assignment_id: "J1".into(),
                start_minutes: 0,
                end_minutes: 120,
            },
            OccupiedBlock::Assignment {
                assignment_id: "J2".into(),
                start_minutes: 90,
                end_minutes: 150,
            },
        ];
        let errors = check_timeline(&blocks).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::Overlap);
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![
            Assignment::new("J1", "A", on(14), 100, 50),
            Assignment::new("J1", "A", on(14), 700, 800),
        ];
        let errors = validate_assignments(&jobs, workday(), None).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
