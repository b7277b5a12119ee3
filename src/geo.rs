//! # Geodesy
//!
//! Great-circle distance on a spherical earth. Accurate to well under a
//! tenth of a mile at the ranges the alert evaluator cares about (a 2 mile
//! radius), which is all the consistency the API contract needs.

use std::f64::consts::PI;

/// Earth's mean radius in statute miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Haversine distance in statute miles between two (latitude, longitude)
/// pairs given in degrees.
pub fn distance_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
