use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::state::AppState;
use crate::trips::models::{TripRequest, TripResponse};
use crate::trips::service::calculate_trip;

/// POST /api/v1/trips/calculate
///
/// Plans an HOS-compliant trip and returns its stops and one log sheet per duty day.
pub async fn handle_calculate_trip(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let response = calculate_trip(&state, request).await?;
    Ok(Json(response))
}
