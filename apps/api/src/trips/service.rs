//! Trip calculation: validate, fetch the route, then plan and render on the blocking pool.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::hos::planner::TripInput;
use crate::hos::validation::{validate_cycle_hours, validate_location, ValidationError};
use crate::logs::DriverInfo;
use crate::route::RouteRequest;
use crate::state::AppState;
use crate::trips::models::{TripRequest, TripResponse};

pub async fn calculate_trip(
    state: &AppState,
    request: TripRequest,
) -> Result<TripResponse, AppError> {
    validate_location("current_location", &request.current_location)?;
    validate_location("pickup_location", &request.pickup_location)?;
    validate_location("dropoff_location", &request.dropoff_location)?;
    validate_cycle_hours(request.current_cycle_hours, state.planner.rules())?;

    let route = state
        .route_provider
        .route(&RouteRequest {
            current_location: request.current_location.clone(),
            pickup_location: request.pickup_location.clone(),
            dropoff_location: request.dropoff_location.clone(),
            supplied: request.route.clone(),
        })
        .await?;

    let driver = driver_info(&state.config, &request);
    let start_date = request
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let trip = TripInput {
        route: route.clone(),
        current_cycle_hours: request.current_cycle_hours,
        pickup_location: request.pickup_location,
        dropoff_location: request.dropoff_location,
    };

    // Planning and rendering are CPU-bound; keep them off the async executor.
    let planner = state.planner.clone();
    let generator = Arc::clone(&state.log_generator);
    let (plan, log_sheets) = tokio::task::spawn_blocking(move || {
        let plan = planner.plan(&trip)?;
        let sheets = generator.generate_logs(&plan.days, start_date, &driver)?;
        Ok::<_, ValidationError>((plan, sheets))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in trip planning: {e}")))??;

    let trip_id = Uuid::new_v4();
    info!(
        %trip_id,
        total_distance = plan.total_distance,
        days = log_sheets.len(),
        "Trip calculated"
    );

    Ok(TripResponse {
        trip_id,
        route,
        stops: plan.stops,
        log_sheets,
        total_distance: plan.total_distance,
        total_time: plan.total_time,
        fuel_stops: plan.fuel_stops,
        cycle_hours_after: plan.cycle_hours_after,
        cycle_limit_exceeded: plan.cycle_limit_exceeded,
    })
}

/// Sheet header details: request values first, then configured defaults.
fn driver_info(config: &Config, request: &TripRequest) -> DriverInfo {
    let details = request.driver.clone().unwrap_or_default();
    DriverInfo {
        name: details
            .name
            .unwrap_or_else(|| config.default_driver_name.clone()),
        carrier: details
            .carrier
            .unwrap_or_else(|| config.default_carrier.clone()),
        truck: details.truck.unwrap_or_else(|| "-".to_string()),
        from: request.current_location.clone(),
        to: request.dropoff_location.clone(),
    }
}
