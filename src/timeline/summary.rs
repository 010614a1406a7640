//! Crew-day occupancy metrics.
//!
//! Summarizes a built timeline for dispatch boards and capacity views.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Job minutes | Sum of assignment blocks inside the workday |
//! | Travel minutes | Sum of travel buffers inside the workday |
//! | Free minutes | Workday length minus occupied minutes |
//! | Utilization | Occupied minutes / workday length |

use serde::{Deserialize, Serialize};

use crate::models::{OccupiedBlock, Workday};

/// Occupancy of one crew-day.
///
/// All time values are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewDaySummary {
    /// Number of job blocks.
    pub job_count: usize,
    /// Minutes booked on jobs.
    pub job_minutes: i64,
    /// Minutes spent travelling.
    pub travel_minutes: i64,
    /// Unoccupied minutes in the workday.
    pub free_minutes: i64,
    /// Occupied fraction of the workday (0.0..1.0).
    pub utilization: f64,
}

impl CrewDaySummary {
    /// Computes the summary of a timeline.
    ///
    /// # Arguments
    /// * `blocks` - Occupied blocks of one crew-day.
    /// * `workday` - Bounds to clip blocks to before counting.
    pub fn calculate(blocks: &[OccupiedBlock], workday: Workday) -> Self {
        let mut job_count = 0usize;
        let mut job_minutes = 0i64;
        let mut travel_minutes = 0i64;

        for block in blocks {
            let Some((s, e)) = workday.clip(block.start_minutes(), block.end_minutes()) else {
                if block.is_assignment() {
                    job_count += 1;
                }
                continue;
            };
            match block {
                OccupiedBlock::Assignment { .. } => {
                    job_count += 1;
                    job_minutes += e - s;
                }
                OccupiedBlock::Travel(_) => travel_minutes += e - s,
            }
        }

        let length = workday.length_minutes();
        let occupied = (job_minutes + travel_minutes).min(length);
        let utilization = if length > 0 {
            occupied as f64 / length as f64
        } else {
            0.0
        };

        Self {
            job_count,
            job_minutes,
            travel_minutes,
            free_minutes: length - occupied,
            utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Stop, TravelBuffer};

    fn job(id: &str, s: i64, e: i64) -> OccupiedBlock {
        OccupiedBlock::Assignment {
            assignment_id: id.into(),
            start_minutes: s,
            end_minutes: e,
        }
    }

    fn travel(s: i64, e: i64) -> OccupiedBlock {
        OccupiedBlock::Travel(TravelBuffer {
            from: Stop::Home,
            to: Stop::Home,
            start_minutes: s,
            end_minutes: e,
        })
    }

    #[test]
    fn test_summary() {
        let blocks = vec![
            travel(30, 60),
            job("J1", 60, 120),
            travel(120, 140),
            job("J2", 300, 360),
        ];
        let s = CrewDaySummary::calculate(&blocks, Workday::until(720));

        assert_eq!(s.job_count, 2);
        assert_eq!(s.job_minutes, 120);
        assert_eq!(s.travel_minutes, 50);
        assert_eq!(s.free_minutes, 550);
        assert!((s.utilization - 170.0 / 720.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_clips_to_workday() {
        let blocks = vec![job("J1", 0, 120), job("J2", 560, 700)];
        let s = CrewDaySummary::calculate(&blocks, Workday::new(60, 600));
        assert_eq!(s.job_minutes, 60 + 40);
        assert_eq!(s.free_minutes, 540 - 100);
    }

    #[test]
    fn test_summary_empty_day() {
        let s = CrewDaySummary::calculate(&[], Workday::until(480));
        assert_eq!(s.job_count, 0);
        assert_eq!(s.free_minutes, 480);
        assert!((s.utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_zero_length_workday() {
        let s = CrewDaySummary::calculate(&[job("J1", 0, 30)], Workday::new(100, 100));
        assert_eq!(s.job_count, 1);
        assert_eq!(s.job_minutes, 0);
        assert_eq!(s.free_minutes, 0);
        assert!((s.utilization - 0.0).abs() < 1e-10);
    }
}
