//! Travel durations and travel-buffer synthesis.
//!
//! Travel time itself is computed elsewhere (routing/geocoding); this
//! module only consumes it through [`TravelLookup`] and turns it into
//! [`TravelBuffer`] intervals between consecutive stops.
//!
//! # Missing Data
//! A pair the lookup cannot resolve (no entry, or a stop without a
//! location) contributes zero travel time. Placement is never blocked
//! by missing travel data; it only under-counts travel.
//!
//! # Buffer Placement
//! | Leg | Interval |
//! |-----|----------|
//! | home → first job | `[first.start - d, first.start)` |
//! | job → job | `[prev.end, prev.end + d)` |
//! | last job → home | `[last.end, last.end + d)` |
//!
//! Buffers are clamped so they never cross into the next job or outside
//! the workday, and zero-length buffers are dropped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Assignment, Stop, TravelBuffer, Workday};

/// Source of travel durations keyed by ordered location pair.
pub trait TravelLookup {
    /// Travel time from `from` to `to` in minutes, if known.
    fn travel_minutes(&self, from: &str, to: &str) -> Option<i64>;
}

/// A lookup that knows nothing. Every leg resolves to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTravel;

impl TravelLookup for NoTravel {
    fn travel_minutes(&self, _from: &str, _to: &str) -> Option<i64> {
        None
    }
}

impl TravelLookup for HashMap<(String, String), i64> {
    fn travel_minutes(&self, from: &str, to: &str) -> Option<i64> {
        self.get(&(from.to_string(), to.to_string())).copied()
    }
}

/// Adapts a closure into a [`TravelLookup`].
///
/// ```
/// use u_placement::travel::{FnTravel, TravelLookup};
///
/// let lookup = FnTravel(|from: &str, to: &str| (from != to).then_some(20));
/// assert_eq!(lookup.travel_minutes("a", "b"), Some(20));
/// assert_eq!(lookup.travel_minutes("a", "a"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnTravel<F>(pub F);

impl<F> TravelLookup for FnTravel<F>
where
    F: Fn(&str, &str) -> Option<i64>,
{
    fn travel_minutes(&self, from: &str, to: &str) -> Option<i64> {
        (self.0)(from, to)
    }
}

/// One directional entry of a [`TravelMatrix`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLeg {
    /// Origin location key.
    pub from: String,
    /// Destination location key.
    pub to: String,
    /// Travel time (minutes).
    pub minutes: i64,
}

/// Precomputed travel-time table.
///
/// Maps (from_location, to_location) → minutes. Pairs are directional;
/// use [`TravelMatrix::set_symmetric`] when both directions match.
///
/// Serializes as a list of [`TravelLeg`] entries:
///
/// ```
/// use u_placement::travel::{TravelLookup, TravelMatrix};
///
/// let json = r#"{"legs": [{"from": "yard", "to": "s1", "minutes": 25}], "default_minutes": 40}"#;
/// let matrix: TravelMatrix = serde_json::from_str(json).unwrap();
/// assert_eq!(matrix.travel_minutes("yard", "s1"), Some(25));
/// assert_eq!(matrix.travel_minutes("s1", "yard"), Some(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelMatrix {
    #[serde(default, with = "leg_list")]
    legs: HashMap<(String, String), i64>,
    /// Duration for pairs with no explicit entry. `None` = unknown.
    pub default_minutes: Option<i64>,
}

impl TravelMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback duration for unlisted pairs of distinct locations.
    pub fn with_default(mut self, minutes: i64) -> Self {
        self.default_minutes = Some(minutes);
        self
    }

    /// Builder: adds a directional leg.
    pub fn with_leg(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        minutes: i64,
    ) -> Self {
        self.set_leg(from, to, minutes);
        self
    }

    /// Defines a directional leg.
    pub fn set_leg(&mut self, from: impl Into<String>, to: impl Into<String>, minutes: i64) {
        self.legs.insert((from.into(), to.into()), minutes);
    }

    /// Defines the same duration in both directions.
    pub fn set_symmetric(&mut self, a: impl Into<String>, b: impl Into<String>, minutes: i64) {
        let (a, b) = (a.into(), b.into());
        self.legs.insert((b.clone(), a.clone()), minutes);
        self.legs.insert((a, b), minutes);
    }

    /// Number of explicitly defined legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}

impl FromIterator<TravelLeg> for TravelMatrix {
    fn from_iter<I: IntoIterator<Item = TravelLeg>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for leg in iter {
            matrix.set_leg(leg.from, leg.to, leg.minutes);
        }
        matrix
    }
}

/// Serde helper for the leg table as a `[{from, to, minutes}]` list.
///
/// JSON object keys must be strings, so the pair-keyed map cannot be
/// written directly.
mod leg_list {
    use std::collections::HashMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::TravelLeg;

    pub fn serialize<S>(
        legs: &HashMap<(String, String), i64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut list: Vec<TravelLeg> = legs
            .iter()
            .map(|((from, to), &minutes)| TravelLeg {
                from: from.clone(),
                to: to.clone(),
                minutes,
            })
            .collect();
        list.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<(String, String), i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<TravelLeg>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|leg| ((leg.from, leg.to), leg.minutes))
            .collect())
    }
}

impl TravelLookup for TravelMatrix {
    /// Explicit entry if present; same-location pairs are 0 otherwise,
    /// distinct pairs fall back to `default_minutes`.
    fn travel_minutes(&self, from: &str, to: &str) -> Option<i64> {
        if let Some(&m) = self.legs.get(&(from.to_string(), to.to_string())) {
            return Some(m);
        }
        if from == to {
            Some(0)
        } else {
            self.default_minutes
        }
    }
}

fn site_stop(a: &Assignment) -> Stop {
    Stop::Site {
        assignment_id: a.id.clone(),
        location_id: a.location_id.clone(),
    }
}

/// Resolves one leg to minutes, degrading to zero on any gap in the data.
fn leg_minutes<L>(lookup: &L, from: &Stop, to: &Stop, home: Option<&str>) -> i64
where
    L: TravelLookup + ?Sized,
{
    match (from.location(home), to.location(home)) {
        (Some(f), Some(t)) => match lookup.travel_minutes(f, t) {
            Some(m) => m.max(0),
            None if f == t => 0,
            None => {
                trace!(from = f, to = t, "no travel entry, using zero");
                0
            }
        },
        _ => {
            trace!(?from, ?to, "stop without location, using zero travel");
            0
        }
    }
}

/// Synthesizes travel buffers for one crew-day.
///
/// `sorted` must be the crew-day's assignments in ascending start order.
/// A home pseudo-stop precedes the first assignment when it
/// `starts_at_home` and follows the last when it `ends_at_home`.
///
/// # Returns
/// Buffers in chronological order, zero-length legs omitted.
pub fn resolve_travel_buffers<L>(
    sorted: &[&Assignment],
    lookup: &L,
    home_location_id: Option<&str>,
    workday: Workday,
) -> Vec<TravelBuffer>
where
    L: TravelLookup + ?Sized,
{
    let mut buffers = Vec::new();
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return buffers;
    };

    if first.starts_at_home {
        let to = site_stop(first);
        let d = leg_minutes(lookup, &Stop::Home, &to, home_location_id);
        let start = (first.start_minutes - d).max(workday.start_minutes);
        if start < first.start_minutes {
            buffers.push(TravelBuffer {
                from: Stop::Home,
                to,
                start_minutes: start,
                end_minutes: first.start_minutes,
            });
        }
    }

    for pair in sorted.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let from = site_stop(prev);
        let to = site_stop(next);
        let d = leg_minutes(lookup, &from, &to, home_location_id);
        let end = (prev.end_minutes + d).min(next.start_minutes);
        if end > prev.end_minutes {
            buffers.push(TravelBuffer {
                from,
                to,
                start_minutes: prev.end_minutes,
                end_minutes: end,
            });
        }
    }

    if last.ends_at_home {
        let from = site_stop(last);
        let d = leg_minutes(lookup, &from, &Stop::Home, home_location_id);
        let end = (last.end_minutes + d).min(workday.end_minutes);
        if end > last.end_minutes {
            buffers.push(TravelBuffer {
                from,
                to: Stop::Home,
                start_minutes: last.end_minutes,
                end_minutes: end,
            });
        }
    }

    buffers
}
