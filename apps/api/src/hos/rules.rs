//! Hours-of-Service rule set for property-carrying drivers (70-hour/8-day schedule).
//!
//! The planner never reads these limits from globals: a `HosRules` value is built once
//! at startup and injected into every `TripPlanner`, so an alternate rule set can be
//! substituted without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::hos::models::DutyStatus;

/// Regulatory limits and planning assumptions used by the trip simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HosRules {
    /// Maximum driving hours inside one duty window.
    pub max_driving_hours: f64,
    /// Maximum elapsed on-duty window before a rest is required.
    pub max_duty_window_hours: f64,
    /// Cumulative driving after which a break is required.
    pub break_after_driving_hours: f64,
    pub break_minutes: u32,
    /// Minimum consecutive off-duty hours that reset the duty window.
    pub min_rest_hours: f64,
    /// Whether the reset rest is logged as sleeper berth instead of off duty.
    pub rest_status: DutyStatus,
    pub max_cycle_hours: f64,
    pub cycle_days: u32,
    pub fuel_interval_miles: f64,
    pub fuel_stop_minutes: u32,
    pub average_speed_mph: f64,
    /// On-duty-not-driving time spent loading at pickup.
    pub pickup_hours: f64,
    /// On-duty-not-driving time spent unloading at dropoff.
    pub dropoff_hours: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            max_driving_hours: 11.0,
            max_duty_window_hours: 14.0,
            break_after_driving_hours: 8.0,
            break_minutes: 30,
            min_rest_hours: 10.0,
            rest_status: DutyStatus::OffDuty,
            max_cycle_hours: 70.0,
            cycle_days: 8,
            fuel_interval_miles: 1000.0,
            fuel_stop_minutes: 30,
            average_speed_mph: 55.0,
            pickup_hours: 1.0,
            dropoff_hours: 1.0,
        }
    }
}

impl HosRules {
    /// Property-carrier defaults with the environment overrides from `Config` applied.
    pub fn from_config(config: &Config) -> Self {
        Self {
            average_speed_mph: config.average_speed_mph,
            fuel_interval_miles: config.fuel_interval_miles,
            rest_status: if config.rest_in_sleeper {
                DutyStatus::SleeperBerth
            } else {
                DutyStatus::OffDuty
            },
            ..Self::default()
        }
    }

    pub fn break_hours(&self) -> f64 {
        f64::from(self.break_minutes) / 60.0
    }

    pub fn fuel_stop_hours(&self) -> f64 {
        f64::from(self.fuel_stop_minutes) / 60.0
    }

    pub fn rest_minutes(&self) -> u32 {
        (self.min_rest_hours * 60.0).round() as u32
    }
}
