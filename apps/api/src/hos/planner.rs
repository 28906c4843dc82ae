//! Trip Planner: simulates a trip under the Hours-of-Service rules.
//!
//! # Architecture
//! - `TripPlanner::plan` is the public entry point. It validates input, then drives a
//!   `Simulation` to completion. The simulation is pure: it owns all of its state and
//!   never performs I/O, so two calls with identical input produce identical plans.
//! - `Simulation::next_state` evaluates the guards in priority order and
//!   `Simulation::step` performs exactly one transition:
//!
//! ```text
//!   AwaitingBreak  driving >= 8h and no break in this window      → 30 min off duty
//!   AwaitingRest   driving >= 11h or window >= 14h                 → 10 h rest, close day
//!   AwaitingFuel   miles since fuel >= interval                    → 30 min on duty
//!   Driving        otherwise                                       → drive one increment
//!   Arrived        no distance left
//! ```
//!
//! # Driving increments
//! An increment stops at the first limit it would cross: the 11-hour driving limit,
//! the 14-hour window, the 8-hour break threshold (while the break is pending), the
//! next fuel interval, or the end of the route. Stops therefore land exactly on their
//! thresholds instead of one increment late.
//!
//! # Termination
//! Every `Driving` step either moves the truck forward or forces a rest. A forced rest
//! on a window with no time in it means no progress is possible, which is a defect and
//! panics instead of looping.

use std::mem;

use tracing::{debug, info};

use crate::hos::day::DayBuilder;
use crate::hos::models::{DutyDay, DutyStatus, Stop, StopKind, TripPlan, HOURS_EPSILON};
use crate::hos::rules::HosRules;
use crate::hos::validation::{validate_cycle_hours, validate_distance, ValidationError};
use crate::route::Route;

/// Remaining distance below this is treated as arrived.
const MILES_EPSILON: f64 = 1e-6;

// ────────────────────────────────────────────────────────────────────────────
// Input / state types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TripInput {
    pub route: Route,
    pub current_cycle_hours: f64,
    pub pickup_location: String,
    pub dropoff_location: String,
}

impl TripInput {
    /// A trip described by distance alone, with generic pickup/dropoff labels.
    #[cfg(test)]
    pub fn from_distance(total_distance: f64, current_cycle_hours: f64) -> Self {
        Self {
            route: Route::from_distance(total_distance),
            current_cycle_hours,
            pickup_location: "origin".to_string(),
            dropoff_location: "destination".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerState {
    Driving,
    AwaitingBreak,
    AwaitingRest,
    AwaitingFuel,
    Arrived,
}

/// Counters for the current duty window. Reset by every rest.
#[derive(Debug, Default, Clone, Copy)]
struct DutyWindow {
    driving: f64,
    /// Elapsed window time: driving, on-duty work and breaks.
    on_duty: f64,
}

fn reached(value: f64, limit: f64) -> bool {
    value >= limit - HOURS_EPSILON
}

// ────────────────────────────────────────────────────────────────────────────
// Planner
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TripPlanner {
    rules: HosRules,
}

impl TripPlanner {
    pub fn new(rules: HosRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Plans a trip from distance and starting cycle hours only.
    #[cfg(test)]
    pub fn plan_distance(
        &self,
        total_distance: f64,
        current_cycle_hours: f64,
    ) -> Result<TripPlan, ValidationError> {
        self.plan(&TripInput::from_distance(total_distance, current_cycle_hours))
    }

    pub fn plan(&self, trip: &TripInput) -> Result<TripPlan, ValidationError> {
        validate_distance(trip.route.total_distance)?;
        validate_cycle_hours(trip.current_cycle_hours, &self.rules)?;

        let mut sim = Simulation::new(&self.rules, trip);
        while sim.step() != PlannerState::Arrived {}
        let plan = sim.finish(trip.current_cycle_hours);

        info!(
            total_distance = plan.total_distance,
            days = plan.days.len(),
            stops = plan.stops.len(),
            fuel_stops = plan.fuel_stops.len(),
            total_time = plan.total_time,
            "Trip planned"
        );
        Ok(plan)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Simulation
// ────────────────────────────────────────────────────────────────────────────

struct Simulation<'a> {
    rules: &'a HosRules,
    trip: &'a TripInput,
    remaining_distance: f64,
    distance_since_fuel: f64,
    window: DutyWindow,
    current_day: DayBuilder,
    days: Vec<DutyDay>,
    stops: Vec<Stop>,
}

impl<'a> Simulation<'a> {
    /// Opens day 1 and logs the pickup before any driving.
    fn new(rules: &'a HosRules, trip: &'a TripInput) -> Self {
        let mut sim = Self {
            rules,
            trip,
            remaining_distance: trip.route.total_distance,
            distance_since_fuel: 0.0,
            window: DutyWindow::default(),
            current_day: DayBuilder::new(1),
            days: Vec::new(),
            stops: Vec::new(),
        };

        sim.push_stop(
            StopKind::Pickup,
            (rules.pickup_hours * 60.0).round() as u32,
            format!("Pickup at {}", trip.pickup_location),
        );
        sim.current_day
            .remark(format!("PICKUP - {}", trip.pickup_location));
        sim.current_day
            .record(DutyStatus::OnDutyNotDriving, rules.pickup_hours);
        sim.window.on_duty += rules.pickup_hours;
        sim
    }

    fn mile_marker(&self) -> f64 {
        self.trip.route.total_distance - self.remaining_distance
    }

    /// Guard evaluation in priority order: break, rest, fuel, drive.
    ///
    /// A break or fuel stop that would overrun the 14-hour window is deferred to
    /// the rest, which takes priority in that case.
    fn next_state(&self) -> PlannerState {
        let rules = self.rules;
        if self.remaining_distance <= MILES_EPSILON {
            return PlannerState::Arrived;
        }

        let window_full = reached(self.window.on_duty, rules.max_duty_window_hours);
        let fits_in_window =
            |hours: f64| self.window.on_duty + hours <= rules.max_duty_window_hours + HOURS_EPSILON;

        let break_due = reached(self.window.driving, rules.break_after_driving_hours)
            && !self.current_day.break_taken();
        if break_due && fits_in_window(rules.break_hours()) {
            return PlannerState::AwaitingBreak;
        }

        if reached(self.window.driving, rules.max_driving_hours) || window_full || break_due {
            return PlannerState::AwaitingRest;
        }

        if reached(self.distance_since_fuel, rules.fuel_interval_miles) {
            if fits_in_window(rules.fuel_stop_hours()) {
                return PlannerState::AwaitingFuel;
            }
            return PlannerState::AwaitingRest;
        }

        PlannerState::Driving
    }

    /// Performs one transition and returns the state that was handled.
    fn step(&mut self) -> PlannerState {
        let state = self.next_state();
        match state {
            PlannerState::AwaitingBreak => self.take_break(),
            PlannerState::AwaitingRest => self.take_rest(),
            PlannerState::AwaitingFuel => self.refuel(),
            PlannerState::Driving => {
                let hours = self.drive_increment();
                if hours > 0.0 {
                    self.drive(hours);
                } else {
                    self.take_rest();
                }
            }
            PlannerState::Arrived => {}
        }
        state
    }

    /// Hours the truck may drive before the next limit or stop.
    fn drive_increment(&self) -> f64 {
        let rules = self.rules;
        let speed = rules.average_speed_mph;

        let mut hours = (rules.max_driving_hours - self.window.driving)
            .min(rules.max_duty_window_hours - self.window.on_duty)
            .min(self.remaining_distance / speed)
            .min((rules.fuel_interval_miles - self.distance_since_fuel) / speed);

        if !self.current_day.break_taken()
            && !reached(self.window.driving, rules.break_after_driving_hours)
        {
            hours = hours.min(rules.break_after_driving_hours - self.window.driving);
        }
        hours.max(0.0)
    }

    fn drive(&mut self, hours: f64) {
        let miles = (hours * self.rules.average_speed_mph).min(self.remaining_distance);
        self.window.driving += hours;
        self.window.on_duty += hours;
        self.current_day.record(DutyStatus::Driving, hours);

        let before = self.remaining_distance;
        self.remaining_distance -= miles;
        assert!(
            self.remaining_distance < before,
            "planner cannot make progress at mile {:.3}: driving {miles} miles left {before} miles remaining",
            self.mile_marker()
        );
        self.distance_since_fuel += miles;
        debug!(
            hours,
            miles,
            remaining = self.remaining_distance,
            "Driving increment"
        );
    }

    fn take_break(&mut self) {
        let rules = self.rules;
        let mile = self.mile_marker();
        self.push_stop(
            StopKind::Break,
            rules.break_minutes,
            format!(
                "{}-minute break after {} hours of driving",
                rules.break_minutes, rules.break_after_driving_hours
            ),
        );
        self.current_day.remark(format!("BREAK - MILE {mile:.0}"));
        self.current_day.mark_break_taken();
        self.current_day
            .record(DutyStatus::OffDuty, rules.break_hours());
        self.window.on_duty += rules.break_hours();
    }

    /// Logs the rest, closes the current day and opens the next one.
    ///
    /// # Panics
    /// If the window holds no time, i.e. resting cannot unlock any further driving.
    fn take_rest(&mut self) {
        assert!(
            self.window.on_duty > 0.0,
            "planner cannot make progress at mile {:.3}: rest requested on an empty duty window",
            self.mile_marker()
        );

        let rules = self.rules;
        let mile = self.mile_marker();
        let place = match rules.rest_status {
            DutyStatus::SleeperBerth => "sleeper berth",
            _ => "off duty",
        };
        self.push_stop(
            StopKind::Rest,
            rules.rest_minutes(),
            format!("{}-hour rest ({place})", rules.min_rest_hours),
        );
        self.current_day.remark(format!("REST - MILE {mile:.0}"));
        self.current_day
            .record(rules.rest_status, rules.min_rest_hours);

        let next = DayBuilder::new(self.current_day.index() + 1);
        let closed = mem::replace(&mut self.current_day, next).freeze();
        debug!(day = closed.index, driving = closed.driving_hours, "Day closed by rest");
        self.days.push(closed);
        self.window = DutyWindow::default();
    }

    fn refuel(&mut self) {
        let rules = self.rules;
        let mile = self.mile_marker();
        self.push_stop(StopKind::Fuel, rules.fuel_stop_minutes, "Fuel stop".to_string());
        self.current_day.remark(format!("FUEL - MILE {mile:.0}"));
        self.current_day
            .record(DutyStatus::OnDutyNotDriving, rules.fuel_stop_hours());
        self.window.on_duty += rules.fuel_stop_hours();
        self.distance_since_fuel = 0.0;
    }

    fn push_stop(&mut self, kind: StopKind, duration_minutes: u32, description: String) {
        let mile_marker = self.mile_marker();
        self.stops.push(Stop {
            kind,
            mile_marker,
            duration_minutes,
            location: self.trip.route.position_at(mile_marker),
            description,
        });
    }

    /// Logs the dropoff on the final day and assembles the plan.
    fn finish(mut self, current_cycle_hours: f64) -> TripPlan {
        let rules = self.rules;
        if self.window.on_duty + rules.dropoff_hours > rules.max_duty_window_hours + HOURS_EPSILON
        {
            self.take_rest();
        }

        self.remaining_distance = 0.0;
        self.push_stop(
            StopKind::Dropoff,
            (rules.dropoff_hours * 60.0).round() as u32,
            format!("Dropoff at {}", self.trip.dropoff_location),
        );
        self.current_day
            .remark(format!("DROPOFF - {}", self.trip.dropoff_location));
        self.current_day
            .record(DutyStatus::OnDutyNotDriving, rules.dropoff_hours);
        self.days.push(self.current_day.freeze());

        let total_time = self.days.iter().map(DutyDay::total_hours).sum();
        let on_duty: f64 = self.days.iter().map(DutyDay::on_duty_hours).sum();
        let cycle_hours_after = current_cycle_hours + on_duty;
        let fuel_stops = self
            .stops
            .iter()
            .filter(|s| s.kind == StopKind::Fuel)
            .cloned()
            .collect();

        TripPlan {
            total_distance: self.trip.route.total_distance,
            stops: self.stops,
            days: self.days,
            total_time,
            fuel_stops,
            cycle_hours_after,
            cycle_limit_exceeded: cycle_hours_after > rules.max_cycle_hours + HOURS_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hos::models::{Coordinate, HOURS_PER_DAY};
    use crate::hos::validation::MAX_TRIP_MILES;
    use proptest::prelude::*;

    fn planner() -> TripPlanner {
        TripPlanner::new(HosRules::default())
    }

    fn kinds(plan: &TripPlan) -> Vec<StopKind> {
        plan.stops.iter().map(|s| s.kind).collect()
    }

    fn count(plan: &TripPlan, kind: StopKind) -> usize {
        plan.stops.iter().filter(|s| s.kind == kind).count()
    }

    // ── scenarios ───────────────────────────────────────────────────────────

    #[test]
    fn test_short_trip_single_day_no_rest_no_fuel() {
        let plan = planner().plan_distance(225.0, 20.5).unwrap();

        assert_eq!(plan.days.len(), 1);
        let day = &plan.days[0];
        assert!((day.driving_hours - 225.0 / 55.0).abs() < 1e-9);
        assert_eq!(day.on_duty_not_driving_hours, 2.0);
        assert_eq!(count(&plan, StopKind::Rest), 0);
        assert!(plan.fuel_stops.is_empty());
        assert!((plan.total_time - (225.0 / 55.0 + 2.0)).abs() < 1e-9);
        assert_eq!(kinds(&plan), vec![StopKind::Pickup, StopKind::Dropoff]);
    }

    #[test]
    fn test_700_miles_needs_exactly_one_rest() {
        let plan = planner().plan_distance(700.0, 0.0).unwrap();

        assert_eq!(count(&plan, StopKind::Rest), 1);
        assert_eq!(plan.days.len(), 2);
        assert!((plan.days[0].driving_hours - 11.0).abs() < 1e-9);
        let total_driving: f64 = plan.days.iter().map(|d| d.driving_hours).sum();
        assert!((total_driving - 700.0 / 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_1200_miles_fuels_at_1000() {
        let plan = planner().plan_distance(1200.0, 0.0).unwrap();

        assert_eq!(plan.fuel_stops.len(), 1);
        assert!((plan.fuel_stops[0].mile_marker - 1000.0).abs() < 1e-6);
        assert!(plan.stops.contains(&plan.fuel_stops[0]));
    }

    #[test]
    fn test_zero_distance_only_pickup_and_dropoff() {
        let plan = planner().plan_distance(0.0, 10.0).unwrap();

        assert_eq!(kinds(&plan), vec![StopKind::Pickup, StopKind::Dropoff]);
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].driving_hours, 0.0);
        assert_eq!(plan.days[0].on_duty_not_driving_hours, 2.0);
        assert_eq!(plan.total_time, 2.0);
    }

    // ── break placement ─────────────────────────────────────────────────────

    #[test]
    fn test_break_taken_at_exactly_eight_hours() {
        let plan = planner().plan_distance(500.0, 0.0).unwrap();

        let breaks: Vec<&Stop> = plan
            .stops
            .iter()
            .filter(|s| s.kind == StopKind::Break)
            .collect();
        assert_eq!(breaks.len(), 1);
        assert!((breaks[0].mile_marker - 8.0 * 55.0).abs() < 1e-6);
        assert_eq!(breaks[0].duration_minutes, 30);
        assert!(plan.days[0].break_taken);
        assert_eq!(plan.days[0].off_duty_hours, 0.5);
    }

    #[test]
    fn test_exactly_eight_hours_of_driving_needs_no_break() {
        let plan = planner().plan_distance(8.0 * 55.0, 0.0).unwrap();
        assert_eq!(count(&plan, StopKind::Break), 0);
        assert!(!plan.days[0].break_taken);
    }

    // ── day boundaries ──────────────────────────────────────────────────────

    #[test]
    fn test_stops_are_chronological() {
        let plan = planner().plan_distance(2500.0, 0.0).unwrap();
        for pair in plan.stops.windows(2) {
            assert!(pair[0].mile_marker <= pair[1].mile_marker + 1e-9);
        }
        assert_eq!(plan.stops.first().unwrap().kind, StopKind::Pickup);
        assert_eq!(plan.stops.last().unwrap().kind, StopKind::Dropoff);
    }

    #[test]
    fn test_rest_closes_every_day_but_the_last() {
        let plan = planner().plan_distance(2500.0, 0.0).unwrap();
        assert_eq!(count(&plan, StopKind::Rest), plan.days.len() - 1);

        for day in &plan.days[..plan.days.len() - 1] {
            assert!(day.remarks.iter().any(|r| r.starts_with("REST")));
            assert_eq!(day.off_duty_hours - if day.break_taken { 0.5 } else { 0.0 }, 10.0);
        }
        for (i, day) in plan.days.iter().enumerate() {
            assert_eq!(day.index as usize, i + 1);
        }
    }

    #[test]
    fn test_new_day_starts_with_driving_after_rest() {
        let plan = planner().plan_distance(1500.0, 0.0).unwrap();
        let second = &plan.days[1];
        assert_eq!(second.timeline[0].status, DutyStatus::Driving);
        assert_eq!(second.timeline[0].start_hour, 0.0);
    }

    #[test]
    fn test_rest_in_sleeper_berth_rules() {
        let rules = HosRules {
            rest_status: DutyStatus::SleeperBerth,
            ..HosRules::default()
        };
        let plan = TripPlanner::new(rules).plan_distance(700.0, 0.0).unwrap();
        assert_eq!(plan.days[0].sleeper_berth_hours, 10.0);
        assert!((plan.total_time - plan.days.iter().map(DutyDay::total_hours).sum::<f64>()).abs() < 1e-9);
    }

    // ── totals and cycle ────────────────────────────────────────────────────

    #[test]
    fn test_total_time_counts_every_category() {
        let plan = planner().plan_distance(700.0, 0.0).unwrap();
        let expected = 700.0 / 55.0 + 2.0 + 0.5 + 10.0;
        assert!((plan.total_time - expected).abs() < 1e-9, "got {}", plan.total_time);
    }

    #[test]
    fn test_cycle_hours_reported_not_enforced() {
        let plan = planner().plan_distance(1200.0, 60.0).unwrap();
        let on_duty: f64 = plan.days.iter().map(DutyDay::on_duty_hours).sum();
        assert!((plan.cycle_hours_after - (60.0 + on_duty)).abs() < 1e-9);
        assert!(plan.cycle_limit_exceeded);

        let short = planner().plan_distance(100.0, 10.0).unwrap();
        assert!(!short.cycle_limit_exceeded);
    }

    // ── validation ──────────────────────────────────────────────────────────

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert_eq!(
            planner().plan_distance(-5.0, 0.0).unwrap_err().field,
            "total_distance"
        );
        assert_eq!(
            planner().plan_distance(100.0, 71.0).unwrap_err().field,
            "current_cycle_hours"
        );
    }

    // ── locations and labels ────────────────────────────────────────────────

    #[test]
    fn test_stops_carry_interpolated_locations_and_labels() {
        let trip = TripInput {
            route: Route {
                total_distance: 225.0,
                waypoints: vec![
                    Coordinate { lat: 40.7128, lng: -74.0060 },
                    Coordinate { lat: 38.9072, lng: -77.0369 },
                ],
                legs: vec![],
            },
            current_cycle_hours: 0.0,
            pickup_location: "Philadelphia, PA".to_string(),
            dropoff_location: "Washington, DC".to_string(),
        };
        let plan = planner().plan(&trip).unwrap();

        assert_eq!(plan.stops[0].description, "Pickup at Philadelphia, PA");
        assert_eq!(plan.stops[1].description, "Dropoff at Washington, DC");
        let end = plan.stops[1].location.unwrap();
        assert!((end.lat - 38.9072).abs() < 1e-9);
    }

    // ── state machine ───────────────────────────────────────────────────────

    #[test]
    fn test_state_sequence_for_700_miles() {
        let rules = HosRules::default();
        let trip = TripInput::from_distance(700.0, 0.0);
        let mut sim = Simulation::new(&rules, &trip);

        let mut states = Vec::new();
        loop {
            let state = sim.step();
            states.push(state);
            if state == PlannerState::Arrived {
                break;
            }
        }
        assert_eq!(
            states,
            vec![
                PlannerState::Driving,
                PlannerState::AwaitingBreak,
                PlannerState::Driving,
                PlannerState::AwaitingRest,
                PlannerState::Driving,
                PlannerState::Arrived,
            ]
        );
    }

    #[test]
    fn test_break_has_priority_over_rest() {
        let rules = HosRules::default();
        let trip = TripInput::from_distance(1000.0, 0.0);
        let mut sim = Simulation::new(&rules, &trip);
        sim.window.driving = 11.0;
        sim.window.on_duty = 12.0;
        assert_eq!(sim.next_state(), PlannerState::AwaitingBreak);
    }

    #[test]
    fn test_fuel_deferred_when_window_cannot_absorb_it() {
        let rules = HosRules::default();
        let trip = TripInput::from_distance(3000.0, 0.0);
        let mut sim = Simulation::new(&rules, &trip);
        sim.current_day.mark_break_taken();
        sim.window.driving = 9.0;
        sim.window.on_duty = 13.8;
        sim.distance_since_fuel = 1000.0;
        assert_eq!(sim.next_state(), PlannerState::AwaitingRest);
    }

    #[test]
    #[should_panic(expected = "cannot make progress")]
    fn test_rest_on_empty_window_panics() {
        let rules = HosRules::default();
        let trip = TripInput::from_distance(100.0, 0.0);
        let mut sim = Simulation::new(&rules, &trip);
        sim.window = DutyWindow::default();
        sim.take_rest();
    }

    #[test]
    #[should_panic(expected = "cannot make progress")]
    fn test_drive_panics_when_distance_cannot_shrink() {
        // Unvalidated input: 440 miles vanish in f64 rounding against 1e20.
        let rules = HosRules::default();
        let trip = TripInput::from_distance(1e20, 0.0);
        let mut sim = Simulation::new(&rules, &trip);
        sim.step();
    }

    #[test]
    fn test_plan_rejects_distance_over_limit() {
        let err = planner().plan_distance(1e20, 0.0).unwrap_err();
        assert_eq!(err.field, "total_distance");
        assert!(planner().plan_distance(MAX_TRIP_MILES, 0.0).is_ok());
    }

    // ── properties ──────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_days_respect_driving_and_window_caps(distance in 0.0f64..6000.0, cycle in 0.0f64..=70.0) {
            let plan = planner().plan_distance(distance, cycle).unwrap();
            for day in &plan.days {
                prop_assert!(day.driving_hours <= 11.0 + 1e-6);
                prop_assert!(day.driving_hours + day.on_duty_not_driving_hours <= 14.0 + 1e-6);
                prop_assert!(day.total_hours() <= HOURS_PER_DAY + 1e-6);
            }
        }

        #[test]
        fn prop_break_iff_day_drives_more_than_eight_hours(distance in 0.0f64..6000.0) {
            let plan = planner().plan_distance(distance, 0.0).unwrap();
            for day in &plan.days {
                let breaks = day.remarks.iter().filter(|r| r.starts_with("BREAK")).count();
                prop_assert!(breaks <= 1);
                prop_assert_eq!(breaks == 1, day.driving_hours > 8.0 + 1e-6);
                prop_assert_eq!(day.break_taken, breaks == 1);
            }
        }

        #[test]
        fn prop_rest_precedes_every_day_boundary(distance in 0.0f64..6000.0) {
            let plan = planner().plan_distance(distance, 0.0).unwrap();
            let rests = plan.stops.iter().filter(|s| s.kind == StopKind::Rest).count();
            prop_assert_eq!(rests, plan.days.len() - 1);
            for day in &plan.days[1..] {
                prop_assert_eq!(day.timeline[0].start_hour, 0.0);
                prop_assert_ne!(day.timeline[0].status, DutyStatus::OffDuty);
            }
        }

        #[test]
        fn prop_distance_is_fully_driven(distance in 0.0f64..6000.0) {
            let plan = planner().plan_distance(distance, 0.0).unwrap();
            let driven: f64 = plan.days.iter().map(|d| d.driving_hours).sum::<f64>() * 55.0;
            prop_assert!((driven - distance).abs() < 1e-6);
        }

        #[test]
        fn prop_plan_is_idempotent(distance in 0.0f64..4000.0, cycle in 0.0f64..=70.0) {
            let p = planner();
            prop_assert_eq!(p.plan_distance(distance, cycle).unwrap(), p.plan_distance(distance, cycle).unwrap());
        }
    }
}
