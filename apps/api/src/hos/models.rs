use serde::{Deserialize, Serialize};

/// Tolerance used for every hour/mile comparison in the planner and segment builder.
pub const HOURS_EPSILON: f64 = 1e-6;

/// Hours in one log-sheet day.
pub const HOURS_PER_DAY: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Stops
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    Rest,
    Fuel,
    Break,
    Pickup,
    Dropoff,
}


/// A compliance or service stop along the route. Stops are emitted in chronological
/// order and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub kind: StopKind,
    pub mile_marker: f64,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Duty status and segments
// ────────────────────────────────────────────────────────────────────────────

/// The four duty statuses of a driver's log, in log-sheet row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Zero-based grid row on the log sheet.
    pub fn row(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDutyNotDriving => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF DUTY",
            DutyStatus::SleeperBerth => "SLEEPER BERTH",
            DutyStatus::Driving => "DRIVING",
            DutyStatus::OnDutyNotDriving => "ON DUTY",
        }
    }
}

/// A contiguous stretch of a single duty status within one log-sheet day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DutySegment {
    pub status: DutyStatus,
    pub start_hour: f64,
    pub duration_hours: f64,
}

impl DutySegment {
    pub fn end_hour(&self) -> f64 {
        self.start_hour + self.duration_hours
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Duty days
// ────────────────────────────────────────────────────────────────────────────

/// One closed duty day. Built by `DayBuilder` and read-only once frozen.
///
/// `timeline` is the sequence of segments the planner actually observed, starting at
/// hour 0 and not yet padded to 24 hours. It is empty for ledgers that arrive without
/// one, in which case rendering reconstructs a timeline from the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyDay {
    pub index: u32,
    pub driving_hours: f64,
    pub on_duty_not_driving_hours: f64,
    pub sleeper_berth_hours: f64,
    pub off_duty_hours: f64,
    pub break_taken: bool,
    #[serde(default)]
    pub timeline: Vec<DutySegment>,
    #[serde(default)]
    pub remarks: Vec<String>,
}

impl DutyDay {
    /// A ledger with totals only; `timeline` and `remarks` left empty.
    #[cfg(test)]
    pub fn from_totals(
        index: u32,
        driving_hours: f64,
        on_duty_not_driving_hours: f64,
        sleeper_berth_hours: f64,
        off_duty_hours: f64,
    ) -> Self {
        Self {
            index,
            driving_hours,
            on_duty_not_driving_hours,
            sleeper_berth_hours,
            off_duty_hours,
            break_taken: false,
            timeline: Vec::new(),
            remarks: Vec::new(),
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.driving_hours
            + self.on_duty_not_driving_hours
            + self.sleeper_berth_hours
            + self.off_duty_hours
    }

    /// Driving plus on-duty-not-driving, the hours that count toward the cycle.
    pub fn on_duty_hours(&self) -> f64 {
        self.driving_hours + self.on_duty_not_driving_hours
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Plan output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub total_distance: f64,
    pub stops: Vec<Stop>,
    pub days: Vec<DutyDay>,
    /// Sum over days of all four duty categories.
    pub total_time: f64,
    pub fuel_stops: Vec<Stop>,
    /// Cycle hours after the trip: starting cycle hours plus all on-duty time.
    pub cycle_hours_after: f64,
    pub cycle_limit_exceeded: bool,
}
