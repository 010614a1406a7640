//! Organization-local calendar-day keys.
//!
//! Assignments are stored with UTC timestamps, but crews work in the
//! organization's local time. Grouping by the UTC date would split a
//! single evening across two days (or merge two days) for any zone
//! away from UTC, so every grouping key is computed in local time.
//!
//! # Fallback
//! A missing [`OrgTimeContext`] means UTC. Callers filtering by day must
//! never drop data because the organization has no zone configured.
//!
//! # DST
//! The local date is taken from the zone's offset *at the instant*, so
//! 23-hour and 25-hour days group correctly.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, Result};

/// Canonical organization-local calendar-day identifier.
///
/// Displays and serializes as `YYYY-MM-DD`. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Wraps an already-local calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a key from year/month/day. `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a `YYYY-MM-DD` key.
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| PlacementError::InvalidDayKey(s.to_string()))
    }

    /// The underlying local date.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

/// Explicit organization time context.
///
/// Passed into every day-sensitive operation instead of being read from
/// ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrgTimeContext {
    /// Organization time zone.
    pub tz: Tz,
}

impl OrgTimeContext {
    /// Creates a context for the given zone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The UTC context (the fallback when none is configured).
    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// Creates a context from an IANA zone name (e.g. `"America/Denver"`).
    pub fn from_tz_name(name: &str) -> Result<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| PlacementError::InvalidTimeZone(name.to_string()))
    }

    /// Day key of a timestamp in this context.
    pub fn day_key(&self, timestamp: DateTime<Utc>) -> DayKey {
        DayKey(timestamp.with_timezone(&self.tz).date_naive())
    }
}

impl Default for OrgTimeContext {
    fn default() -> Self {
        Self::utc()
    }
}

/// Maps a timestamp to its organization-local day key.
///
/// Falls back to UTC when `ctx` is `None`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_placement::daykey::{day_key, OrgTimeContext};
///
/// let ts = Utc.with_ymd_and_hms(2026, 3, 10, 3, 30, 0).unwrap();
/// let denver = OrgTimeContext::from_tz_name("America/Denver").unwrap();
///
/// // 03:30 UTC is still the previous evening in Denver.
/// assert_eq!(day_key(ts, Some(&denver)).to_string(), "2026-03-09");
/// assert_eq!(day_key(ts, None).to_string(), "2026-03-10");
/// ```
pub fn day_key(timestamp: DateTime<Utc>, ctx: Option<&OrgTimeContext>) -> DayKey {
    match ctx {
        Some(ctx) => ctx.day_key(timestamp),
        None => OrgTimeContext::utc().day_key(timestamp),
    }
}
