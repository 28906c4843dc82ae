//! Duty segments for one log-sheet day.
//!
//! A day's graph must cover [0, 24) with contiguous, non-overlapping segments. Days
//! planned by `TripPlanner` carry the timeline observed during simulation, which only
//! needs padding with trailing off-duty time. Ledgers that arrive with totals only are
//! reconstructed by `DutySegmentBuilder::build` using a fixed ordering heuristic.

use crate::hos::models::{DutyDay, DutySegment, DutyStatus, HOURS_EPSILON, HOURS_PER_DAY};

/// Longest off-duty block placed at the start of a reconstructed day.
const LEADING_OFF_DUTY_CAP: f64 = 8.0;
/// Longest pickup or dropoff on-duty block in a reconstructed day.
const HANDLING_BLOCK_CAP: f64 = 1.0;

pub struct DutySegmentBuilder;

impl DutySegmentBuilder {
    /// Segments for `day`: its recorded timeline when present, otherwise a reconstruction.
    pub fn for_day(day: &DutyDay) -> Vec<DutySegment> {
        if day.timeline.is_empty() {
            Self::build(day)
        } else {
            Self::pad(&day.timeline)
        }
    }

    /// Reconstructs a 24-hour timeline from the day's totals.
    ///
    /// Order: leading off duty (≤ 8h), pickup on duty (≤ 1h), all driving, dropoff on
    /// duty (≤ 1h, only when more than 1h of on-duty time was logged), sleeper berth,
    /// then off duty for whatever is left. Blocks are clamped to the time remaining in
    /// the day.
    pub fn build(day: &DutyDay) -> Vec<DutySegment> {
        let handling = (day.on_duty_not_driving_hours / 2.0).min(HANDLING_BLOCK_CAP);

        let mut timeline = DayTimeline::default();
        timeline.push(
            DutyStatus::OffDuty,
            day.off_duty_hours.min(LEADING_OFF_DUTY_CAP),
        );
        timeline.push(DutyStatus::OnDutyNotDriving, handling);
        timeline.push(DutyStatus::Driving, day.driving_hours);
        if day.on_duty_not_driving_hours > 1.0 {
            timeline.push(DutyStatus::OnDutyNotDriving, handling);
        }
        timeline.push(DutyStatus::SleeperBerth, day.sleeper_berth_hours);
        timeline.finish()
    }

    /// Extends a timeline that starts at hour 0 to a full day with off-duty time.
    pub fn pad(recorded: &[DutySegment]) -> Vec<DutySegment> {
        let mut timeline = DayTimeline::default();
        for segment in recorded {
            timeline.push(segment.status, segment.duration_hours);
        }
        timeline.finish()
    }
}

/// Checks that `segments` are contiguous, positive and cover exactly 24 hours.
pub fn verify_coverage(segments: &[DutySegment]) -> Result<(), String> {
    let mut expected_start = 0.0;
    for (i, segment) in segments.iter().enumerate() {
        if segment.duration_hours <= 0.0 {
            return Err(format!("segment {i} has non-positive duration"));
        }
        if (segment.start_hour - expected_start).abs() > HOURS_EPSILON {
            return Err(format!(
                "segment {i} starts at {:.6}, expected {expected_start:.6}",
                segment.start_hour
            ));
        }
        expected_start = segment.end_hour();
    }
    if (expected_start - HOURS_PER_DAY).abs() > HOURS_EPSILON {
        return Err(format!("segments cover {expected_start:.6}h instead of 24h"));
    }
    Ok(())
}

#[derive(Default)]
struct DayTimeline {
    cursor: f64,
    segments: Vec<DutySegment>,
}

impl DayTimeline {
    fn push(&mut self, status: DutyStatus, hours: f64) {
        let hours = hours.min(HOURS_PER_DAY - self.cursor);
        if hours <= HOURS_EPSILON {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.status == status => last.duration_hours += hours,
            _ => self.segments.push(DutySegment {
                status,
                start_hour: self.cursor,
                duration_hours: hours,
            }),
        }
        self.cursor += hours;
    }

    /// Fills the remainder with off duty and snaps the last segment to end at 24.
    ///
    /// # Panics
    /// If the result does not cover the day, which would mean the clamping above is broken.
    fn finish(mut self) -> Vec<DutySegment> {
        self.push(DutyStatus::OffDuty, HOURS_PER_DAY - self.cursor);
        match self.segments.last_mut() {
            Some(last) => last.duration_hours = HOURS_PER_DAY - last.start_hour,
            None => self.segments.push(DutySegment {
                status: DutyStatus::OffDuty,
                start_hour: 0.0,
                duration_hours: HOURS_PER_DAY,
            }),
        }

        if let Err(reason) = verify_coverage(&self.segments) {
            panic!("duty segments do not cover the day: {reason}");
        }
        self.segments
    }
}
