//! Great-circle distance and drive-time estimation.
//!
//! Straight-line Haversine distance with a flat urban speed assumption.
//! Deliberately ignores road topology; accurate enough to rank zones
//! and order stops, not to quote arrival times.

use serde::{Deserialize, Serialize};

/// Earth radius in statute miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Average urban driving speed assumption for time estimation.
const AVERAGE_SPEED_MPH: f64 = 25.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Value type; no range validation is performed here. Callers feeding in
/// NaN or out-of-range coordinates get NaN/garbage distances back —
/// address validation belongs upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Haversine distance between two points in miles.
///
/// Symmetric, non-negative, zero for identical points.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Estimate drive time in minutes for a straight-line distance,
/// assuming a flat 25 mph urban average.
pub fn estimate_drive_time_minutes(miles: f64) -> i64 {
    (miles / AVERAGE_SPEED_MPH * 60.0).round() as i64
}
