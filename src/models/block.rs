//! Occupied timeline blocks.
//!
//! A crew-day timeline is a sorted list of [`OccupiedBlock`]s: either a
//! job assignment interval or a derived travel buffer between two stops.
//! Travel buffers are never persisted; they are rebuilt on every call.

use serde::{Deserialize, Serialize};

/// A stop on a crew's route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stop {
    /// The crew's home base.
    Home,
    /// A job site, by assignment.
    Site {
        assignment_id: String,
        location_id: Option<String>,
    },
}

impl Stop {
    /// Location key used for travel lookups, if known.
    ///
    /// `home_location_id` resolves the [`Stop::Home`] pseudo-stop.
    pub fn location<'a>(&'a self, home_location_id: Option<&'a str>) -> Option<&'a str> {
        match self {
            Stop::Home => home_location_id,
            Stop::Site { location_id, .. } => location_id.as_deref(),
        }
    }
}

/// Derived transit interval between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelBuffer {
    /// Stop the crew leaves.
    pub from: Stop,
    /// Stop the crew heads to.
    pub to: Stop,
    /// Interval start (minutes, inclusive).
    pub start_minutes: i64,
    /// Interval end (minutes, exclusive).
    pub end_minutes: i64,
}

impl TravelBuffer {
    /// Duration (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes - self.start_minutes
    }
}

/// An interval that cannot be used for a new placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OccupiedBlock {
    /// A job assignment.
    Assignment {
        assignment_id: String,
        start_minutes: i64,
        end_minutes: i64,
    },
    /// Travel between two stops.
    Travel(TravelBuffer),
}

impl OccupiedBlock {
    /// Block start (minutes, inclusive).
    #[inline]
    pub fn start_minutes(&self) -> i64 {
        match self {
            Self::Assignment { start_minutes, .. } => *start_minutes,
            Self::Travel(t) => t.start_minutes,
        }
    }

    /// Block end (minutes, exclusive).
    #[inline]
    pub fn end_minutes(&self) -> i64 {
        match self {
            Self::Assignment { end_minutes, .. } => *end_minutes,
            Self::Travel(t) => t.end_minutes,
        }
    }

    /// Duration (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes() - self.start_minutes()
    }

    /// Whether this block is a job assignment.
    pub fn is_assignment(&self) -> bool {
        matches!(self, Self::Assignment { .. })
    }

    /// Assignment id for job blocks.
    pub fn assignment_id(&self) -> Option<&str> {
        match self {
            Self::Assignment { assignment_id, .. } => Some(assignment_id),
            Self::Travel(_) => None,
        }
    }

    /// Whether `[start, end)` intersects this block.
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        start < self.end_minutes() && self.start_minutes() < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: &str, loc: Option<&str>) -> Stop {
        Stop::Site {
            assignment_id: id.into(),
            location_id: loc.map(String::from),
        }
    }

    #[test]
    fn test_stop_location() {
        assert_eq!(Stop::Home.location(Some("depot")), Some("depot"));
        assert_eq!(Stop::Home.location(None), None);
        assert_eq!(site("J1", Some("s1")).location(Some("depot")), Some("s1"));
        assert_eq!(site("J1", None).location(Some("depot")), None);
    }

    #[test]
    fn test_block_accessors() {
        let job = OccupiedBlock::Assignment {
            assignment_id: "J1".into(),
            start_minutes: 120,
            end_minutes: 240,
        };
        let travel = OccupiedBlock::Travel(TravelBuffer {
            from: site("J1", Some("s1")),
            to: Stop::Home,
            start_minutes: 240,
            end_minutes: 270,
        });

        assert_eq!(job.start_minutes(), 120);
        assert_eq!(job.duration_minutes(), 120);
        assert!(job.is_assignment());
        assert_eq!(job.assignment_id(), Some("J1"));

        assert_eq!(travel.end_minutes(), 270);
        assert!(!travel.is_assignment());
        assert_eq!(travel.assignment_id(), None);
    }

    #[test]
    fn test_block_overlap_half_open() {
        let job = OccupiedBlock::Assignment {
            assignment_id: "J1".into(),
            start_minutes: 100,
            end_minutes: 200,
        };
        assert!(job.overlaps(150, 250));
        assert!(job.overlaps(0, 101));
        assert!(!job.overlaps(200, 300)); // touching
        assert!(!job.overlaps(0, 100));
    }

    #[test]
    fn test_block_serde_tagged() {
        let job = OccupiedBlock::Assignment {
            assignment_id: "J1".into(),
            start_minutes: 0,
            end_minutes: 15,
        };
        let v = serde_json::to_value(&job).unwrap();
        assert_eq!(v["kind"], "assignment");
        assert_eq!(v["assignment_id"], "J1");
    }
}
