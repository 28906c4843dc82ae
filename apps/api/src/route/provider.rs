//! Route provider seam.
//!
//! `AppState` carries an `Arc<dyn RouteProvider>`. The default `StaticRouteProvider`
//! never calls out to a map service: it passes through a route supplied with the
//! request, or falls back to a fixed two-leg stand-in.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::route::{Route, RouteLeg};

/// Miles of the empty approach leg (current location to pickup) in the stand-in route.
const FALLBACK_APPROACH_MILES: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// A route already computed by the caller.
    pub supplied: Option<Route>,
}

#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(&self, request: &RouteRequest) -> Result<Route, AppError>;
}

pub struct StaticRouteProvider {
    fallback_miles: f64,
}

impl StaticRouteProvider {
    pub fn new(fallback_miles: f64) -> Self {
        Self { fallback_miles }
    }

    fn fallback_route(&self, request: &RouteRequest) -> Route {
        let approach = FALLBACK_APPROACH_MILES.min(self.fallback_miles);
        Route {
            total_distance: self.fallback_miles,
            waypoints: Vec::new(),
            legs: vec![
                RouteLeg {
                    from: request.current_location.clone(),
                    to: request.pickup_location.clone(),
                    distance: approach,
                },
                RouteLeg {
                    from: request.pickup_location.clone(),
                    to: request.dropoff_location.clone(),
                    distance: self.fallback_miles - approach,
                },
            ],
        }
    }
}

#[async_trait]
impl RouteProvider for StaticRouteProvider {
    async fn route(&self, request: &RouteRequest) -> Result<Route, AppError> {
        match &request.supplied {
            Some(route) => Ok(route.clone()),
            None => {
                debug!(
                    miles = self.fallback_miles,
                    "No route supplied, using static stand-in route"
                );
                Ok(self.fallback_route(request))
            }
        }
    }
}
