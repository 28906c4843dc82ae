//! Route data handed to the planner by a route provider.
//!
//! Geography is not computed here. A route arrives with its total distance and,
//! optionally, waypoint coordinates; the only geometric work is placing a mile marker
//! on the waypoint polyline so stops can carry a coordinate.

pub mod provider;

use serde::{Deserialize, Serialize};

use crate::hos::models::Coordinate;

pub use provider::{RouteProvider, RouteRequest, StaticRouteProvider};

const EARTH_RADIUS_MILES: f64 = 3958.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Driving distance in miles.
    pub total_distance: f64,
    #[serde(default)]
    pub waypoints: Vec<Coordinate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<RouteLeg>,
}

impl Route {
    #[cfg(test)]
    pub fn from_distance(total_distance: f64) -> Self {
        Self {
            total_distance,
            waypoints: Vec::new(),
            legs: Vec::new(),
        }
    }

    /// Coordinate at `mile` along the waypoint polyline, or `None` without waypoints.
    ///
    /// The mile marker is mapped to a fraction of `total_distance`, and that fraction is
    /// walked along the polyline using great-circle segment lengths. Markers outside
    /// the route clamp to its ends.
    pub fn position_at(&self, mile: f64) -> Option<Coordinate> {
        let first = *self.waypoints.first()?;
        if self.waypoints.len() == 1 {
            return Some(first);
        }

        let lengths: Vec<f64> = self
            .waypoints
            .windows(2)
            .map(|w| haversine_miles(w[0], w[1]))
            .collect();
        let polyline_length: f64 = lengths.iter().sum();
        if polyline_length <= 0.0 || self.total_distance <= 0.0 {
            return Some(first);
        }

        let fraction = (mile / self.total_distance).clamp(0.0, 1.0);
        let mut remaining = fraction * polyline_length;

        for (pair, length) in self.waypoints.windows(2).zip(&lengths) {
            if remaining <= *length {
                let t = if *length > 0.0 { remaining / length } else { 0.0 };
                return Some(Coordinate {
                    lat: pair[0].lat + (pair[1].lat - pair[0].lat) * t,
                    lng: pair[0].lng + (pair[1].lng - pair[0].lng) * t,
                });
            }
            remaining -= length;
        }

        self.waypoints.last().copied()
    }
}

/// Great-circle distance between two coordinates, in miles.
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate { lat, lng }
    }

    fn east_coast() -> Route {
        Route {
            total_distance: 225.0,
            waypoints: vec![
                coord(40.7128, -74.0060),
                coord(39.9526, -75.1652),
                coord(38.9072, -77.0369),
            ],
            legs: vec![],
        }
    }

    #[test]
    fn test_haversine_known_distance() {
        // New York to Philadelphia is roughly 80 miles as the crow flies.
        let d = haversine_miles(coord(40.7128, -74.0060), coord(39.9526, -75.1652));
        assert!((d - 80.6).abs() < 2.0, "got {d}");
    }

    #[test]
    fn test_position_without_waypoints_is_none() {
        assert!(Route::from_distance(500.0).position_at(100.0).is_none());
    }

    #[test]
    fn test_position_endpoints() {
        let route = east_coast();
        assert_eq!(route.position_at(0.0), Some(route.waypoints[0]));

        let end = route.position_at(225.0).unwrap();
        assert!((end.lat - 38.9072).abs() < 1e-9);
        assert!((end.lng + 77.0369).abs() < 1e-9);
    }

    #[test]
    fn test_position_clamps_outside_route() {
        let route = east_coast();
        assert_eq!(route.position_at(-50.0), Some(route.waypoints[0]));
        let beyond = route.position_at(10_000.0).unwrap();
        assert!((beyond.lat - 38.9072).abs() < 1e-9);
    }

    #[test]
    fn test_position_midway_lies_between_endpoints() {
        let route = east_coast();
        let mid = route.position_at(112.5).unwrap();
        assert!(mid.lat < 40.7128 && mid.lat > 38.9072);
        assert!(mid.lng < -74.0060 && mid.lng > -77.0369);
    }

    #[test]
    fn test_single_waypoint_is_returned_for_any_mile() {
        let route = Route {
            total_distance: 10.0,
            waypoints: vec![coord(1.0, 2.0)],
            legs: vec![],
        };
        assert_eq!(route.position_at(7.0), Some(coord(1.0, 2.0)));
    }
}
