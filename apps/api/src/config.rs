use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset variables fall back to `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub average_speed_mph: f64,
    pub fuel_interval_miles: f64,
    /// Log the 10-hour rest as sleeper berth instead of off duty.
    pub rest_in_sleeper: bool,
    pub default_driver_name: String,
    pub default_carrier: String,
    /// Length of the stand-in route used when a request carries no route.
    pub route_fallback_miles: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            average_speed_mph: 55.0,
            fuel_interval_miles: 1000.0,
            rest_in_sleeper: false,
            default_driver_name: "Driver".to_string(),
            default_carrier: "-".to_string(),
            route_fallback_miles: 380.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            average_speed_mph: env_or("HOS_AVERAGE_SPEED_MPH", defaults.average_speed_mph)?,
            fuel_interval_miles: env_or("HOS_FUEL_INTERVAL_MILES", defaults.fuel_interval_miles)?,
            rest_in_sleeper: env_or("HOS_REST_IN_SLEEPER", defaults.rest_in_sleeper)?,
            default_driver_name: std::env::var("DEFAULT_DRIVER_NAME")
                .unwrap_or(defaults.default_driver_name),
            default_carrier: std::env::var("DEFAULT_CARRIER").unwrap_or(defaults.default_carrier),
            route_fallback_miles: env_or("ROUTE_FALLBACK_MILES", defaults.route_fallback_miles)?,
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        anyhow::ensure!(
            self.average_speed_mph > 0.0,
            "HOS_AVERAGE_SPEED_MPH must be positive"
        );
        anyhow::ensure!(
            self.fuel_interval_miles > 0.0,
            "HOS_FUEL_INTERVAL_MILES must be positive"
        );
        anyhow::ensure!(
            self.route_fallback_miles >= 0.0,
            "ROUTE_FALLBACK_MILES must not be negative"
        );
        Ok(())
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
