//! Crew-day grouping by index.

use std::collections::HashMap;

use crate::daykey::{DayKey, OrgTimeContext};
use crate::models::{Assignment, OccupiedBlock};
use crate::travel::TravelLookup;

use super::{layout, TimelineQuery};

/// Groups a snapshot of assignments by `(crew_id, day)`.
///
/// Stores indices into the borrowed slice instead of copying
/// assignments, so laying out many crew-days from one snapshot costs a
/// single pass for grouping plus the per-day sort.
#[derive(Debug, Clone)]
pub struct CrewDayIndex<'a> {
    assignments: &'a [Assignment],
    groups: HashMap<String, HashMap<DayKey, Vec<usize>>>,
}

impl<'a> CrewDayIndex<'a> {
    /// Groups assignments by crew and organization-local day.
    ///
    /// `ctx` = `None` groups by UTC date.
    pub fn build(assignments: &'a [Assignment], ctx: Option<&OrgTimeContext>) -> Self {
        let mut groups: HashMap<String, HashMap<DayKey, Vec<usize>>> = HashMap::new();
        for (idx, a) in assignments.iter().enumerate() {
            groups
                .entry(a.crew_id.clone())
                .or_default()
                .entry(a.day_key(ctx))
                .or_default()
                .push(idx);
        }
        Self {
            assignments,
            groups,
        }
    }

    /// Indices of the crew-day's assignments, in input order.
    pub fn indices(&self, crew_id: &str, day: DayKey) -> &[usize] {
        self.groups
            .get(crew_id)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The crew-day's assignments, in input order.
    pub fn assignments_for(
        &self,
        crew_id: &str,
        day: DayKey,
    ) -> impl Iterator<Item = &'a Assignment> + '_ {
        let all = self.assignments;
        self.indices(crew_id, day).iter().map(move |&i| &all[i])
    }

    /// All grouped crew-days, sorted by crew then day.
    pub fn crew_days(&self) -> Vec<(&str, DayKey)> {
        let mut keys: Vec<(&str, DayKey)> = self
            .groups
            .iter()
            .flat_map(|(crew, days)| days.keys().map(move |d| (crew.as_str(), *d)))
            .collect();
        keys.sort();
        keys
    }

    /// Number of distinct crew-days.
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    /// Whether no assignments were grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Builds the occupied timeline for `query` from the grouped indices.
    ///
    /// Day membership comes from the context the index was built with;
    /// `query.time_context` is not consulted again.
    pub fn timeline<L>(&self, travel: &L, query: &TimelineQuery<'_>) -> Vec<OccupiedBlock>
    where
        L: TravelLookup + ?Sized,
    {
        let jobs: Vec<&Assignment> = self
            .assignments_for(query.crew_id, query.day)
            .filter(|a| query.keeps(a))
            .collect();
        layout(jobs, travel, query)
    }
}
