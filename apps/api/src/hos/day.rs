//! Mutable accumulator for the duty day currently being simulated.
//!
//! The planner owns exactly one `DayBuilder` at a time. Closing a day consumes the
//! builder and yields an immutable `DutyDay`, so the open day and the closed days can
//! never alias each other.

use crate::hos::models::{DutyDay, DutySegment, DutyStatus, HOURS_EPSILON, HOURS_PER_DAY};

#[derive(Debug)]
pub struct DayBuilder {
    index: u32,
    driving_hours: f64,
    on_duty_not_driving_hours: f64,
    sleeper_berth_hours: f64,
    off_duty_hours: f64,
    break_taken: bool,
    timeline: Vec<DutySegment>,
    remarks: Vec<String>,
}

impl DayBuilder {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            driving_hours: 0.0,
            on_duty_not_driving_hours: 0.0,
            sleeper_berth_hours: 0.0,
            off_duty_hours: 0.0,
            break_taken: false,
            timeline: Vec::new(),
            remarks: Vec::new(),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Hours elapsed since the start of this day.
    pub fn clock(&self) -> f64 {
        self.timeline.last().map_or(0.0, DutySegment::end_hour)
    }

    pub fn break_taken(&self) -> bool {
        self.break_taken
    }

    pub fn mark_break_taken(&mut self) {
        self.break_taken = true;
    }

    /// Appends `hours` of `status` to the ledger and the timeline.
    /// Consecutive entries of the same status are merged into one segment.
    pub fn record(&mut self, status: DutyStatus, hours: f64) {
        if hours <= 0.0 {
            return;
        }

        match status {
            DutyStatus::OffDuty => self.off_duty_hours += hours,
            DutyStatus::SleeperBerth => self.sleeper_berth_hours += hours,
            DutyStatus::Driving => self.driving_hours += hours,
            DutyStatus::OnDutyNotDriving => self.on_duty_not_driving_hours += hours,
        }

        match self.timeline.last_mut() {
            Some(last) if last.status == status => last.duration_hours += hours,
            _ => {
                let start_hour = self.clock();
                self.timeline.push(DutySegment {
                    status,
                    start_hour,
                    duration_hours: hours,
                });
            }
        }
    }

    pub fn remark(&mut self, text: impl Into<String>) {
        self.remarks.push(text.into());
    }

    /// Closes the day.
    ///
    /// # Panics
    /// If the recorded hours exceed 24, which means the simulation is broken.
    pub fn freeze(self) -> DutyDay {
        let day = DutyDay {
            index: self.index,
            driving_hours: self.driving_hours,
            on_duty_not_driving_hours: self.on_duty_not_driving_hours,
            sleeper_berth_hours: self.sleeper_berth_hours,
            off_duty_hours: self.off_duty_hours,
            break_taken: self.break_taken,
            timeline: self.timeline,
            remarks: self.remarks,
        };
        assert!(
            day.total_hours() <= HOURS_PER_DAY + HOURS_EPSILON,
            "duty day {} records {:.3}h, more than 24h",
            day.index,
            day.total_hours()
        );
        day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_day_is_empty() {
        let day = DayBuilder::new(3);
        assert_eq!(day.index(), 3);
        assert_eq!(day.clock(), 0.0);
        assert!(!day.break_taken());
        let frozen = day.freeze();
        assert_eq!(frozen.total_hours(), 0.0);
        assert!(frozen.timeline.is_empty());
    }

    #[test]
    fn test_record_updates_ledger_and_timeline() {
        let mut day = DayBuilder::new(1);
        day.record(DutyStatus::OnDutyNotDriving, 1.0);
        day.record(DutyStatus::Driving, 4.0);
        day.record(DutyStatus::OffDuty, 0.5);

        assert_eq!(day.clock(), 5.5);
        let frozen = day.freeze();
        assert_eq!(frozen.on_duty_not_driving_hours, 1.0);
        assert_eq!(frozen.driving_hours, 4.0);
        assert_eq!(frozen.off_duty_hours, 0.5);
        assert_eq!(frozen.timeline.len(), 3);
        assert_eq!(frozen.timeline[1].start_hour, 1.0);
        assert_eq!(frozen.timeline[2].start_hour, 5.0);
    }

    #[test]
    fn test_consecutive_same_status_merges() {
        let mut day = DayBuilder::new(1);
        day.record(DutyStatus::Driving, 3.0);
        day.record(DutyStatus::Driving, 2.0);
        let frozen = day.freeze();
        assert_eq!(frozen.timeline.len(), 1);
        assert_eq!(frozen.timeline[0].duration_hours, 5.0);
    }

    #[test]
    fn test_zero_hours_is_ignored() {
        let mut day = DayBuilder::new(1);
        day.record(DutyStatus::Driving, 0.0);
        assert_eq!(day.freeze().timeline.len(), 0);
    }

    #[test]
    #[should_panic(expected = "more than 24h")]
    fn test_freeze_panics_over_24_hours() {
        let mut day = DayBuilder::new(1);
        day.record(DutyStatus::OffDuty, 20.0);
        day.record(DutyStatus::Driving, 5.0);
        let _ = day.freeze();
    }
}
