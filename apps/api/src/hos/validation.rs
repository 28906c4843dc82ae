use thiserror::Error;

use crate::hos::rules::HosRules;

pub const MAX_LOCATION_CHARS: usize = 200;
/// Longest route accepted for planning. Every mile yields simulation steps and log
/// sheets, so the planner and the response stay bounded.
pub const MAX_TRIP_MILES: f64 = 10_000.0;

/// Malformed or out-of-range planning input, rejected before any simulation runs.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub fn validate_distance(total_distance: f64) -> Result<(), ValidationError> {
    if !total_distance.is_finite() {
        return Err(ValidationError::new(
            "total_distance",
            "must be a finite number",
        ));
    }
    if total_distance < 0.0 {
        return Err(ValidationError::new(
            "total_distance",
            format!("must be >= 0, got {total_distance}"),
        ));
    }
    if total_distance > MAX_TRIP_MILES {
        return Err(ValidationError::new(
            "total_distance",
            format!("must be at most {MAX_TRIP_MILES} miles, got {total_distance}"),
        ));
    }
    Ok(())
}

pub fn validate_cycle_hours(
    current_cycle_hours: f64,
    rules: &HosRules,
) -> Result<(), ValidationError> {
    if !current_cycle_hours.is_finite()
        || current_cycle_hours < 0.0
        || current_cycle_hours > rules.max_cycle_hours
    {
        return Err(ValidationError::new(
            "current_cycle_hours",
            format!(
                "must be between 0 and {} for the {}-day cycle, got {current_cycle_hours}",
                rules.max_cycle_hours, rules.cycle_days
            ),
        ));
    }
    Ok(())
}

/// Free-text locations are display-only; they just need to be present and bounded.
pub fn validate_location(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    if value.chars().count() > MAX_LOCATION_CHARS {
        return Err(ValidationError::new(
            field,
            format!("must be at most {MAX_LOCATION_CHARS} characters"),
        ));
    }
    Ok(())
}
