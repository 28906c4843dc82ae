use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hos::models::Stop;
use crate::logs::LogSheet;
use crate::route::Route;

#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Hours already used in the current 70-hour/8-day cycle.
    pub current_cycle_hours: f64,
    /// Date of the first log sheet. Defaults to today (UTC).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub driver: Option<DriverDetails>,
    /// Route computed by the caller; when absent the configured provider supplies one.
    #[serde(default)]
    pub route: Option<Route>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverDetails {
    pub name: Option<String>,
    pub carrier: Option<String>,
    pub truck: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub trip_id: Uuid,
    pub route: Route,
    pub stops: Vec<Stop>,
    pub log_sheets: Vec<LogSheet>,
    pub total_distance: f64,
    pub total_time: f64,
    pub fuel_stops: Vec<Stop>,
    pub cycle_hours_after: f64,
    pub cycle_limit_exceeded: bool,
}
