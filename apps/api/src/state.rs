use std::sync::Arc;

use crate::config::Config;
use crate::hos::{HosRules, TripPlanner};
use crate::logs::{default_sheet_layout, LogGenerator, LogSheetRenderer};
use crate::route::{RouteProvider, StaticRouteProvider};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Planner carrying the rule set built from config at startup.
    pub planner: TripPlanner,
    pub log_generator: Arc<LogGenerator>,
    /// Pluggable route source. Default: StaticRouteProvider.
    pub route_provider: Arc<dyn RouteProvider>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let rules = HosRules::from_config(&config);
        let renderer = LogSheetRenderer::new(default_sheet_layout());
        let route_provider = Arc::new(StaticRouteProvider::new(config.route_fallback_miles));

        AppState {
            planner: TripPlanner::new(rules),
            log_generator: Arc::new(LogGenerator::new(Box::new(renderer))),
            route_provider,
            config,
        }
    }
}
