//! # Search
//!
//! Demo route planner and place lookup. The planner draws a straight-line
//! polyline between the endpoints and estimates drive time at a flat average
//! speed; place search is a case-insensitive substring match over a static
//! table of Illinois points of interest. Both are deterministic for a fixed
//! request.

use crate::geo::distance_miles;
use crate::models::{Place, PlaceRequest, PlaceResponse, RouteRequest, RouteResponse};

/// Assumed average trip speed for the time estimate.
const AVERAGE_SPEED_MPH: f64 = 55.0;

/// Number of segments in the interpolated polyline.
const POLYLINE_SEGMENTS: usize = 10;

struct PlaceRow {
    name: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
    category: &'static str,
}

const ILLINOIS_PLACES: [PlaceRow; 12] = [
    PlaceRow { name: "Chicago", address: "Chicago, IL", lat: 41.8781, lng: -87.6298, category: "City" },
    PlaceRow { name: "Springfield", address: "Springfield, IL", lat: 39.7817, lng: -89.6501, category: "City" },
    PlaceRow { name: "Peoria", address: "Peoria, IL", lat: 40.6936, lng: -89.5890, category: "City" },
    PlaceRow { name: "Rockford", address: "Rockford, IL", lat: 42.2711, lng: -89.0940, category: "City" },
    PlaceRow { name: "University of Illinois Urbana-Champaign", address: "601 E John St, Champaign, IL", lat: 40.1020, lng: -88.2272, category: "University" },
    PlaceRow { name: "Northwestern University", address: "633 Clark St, Evanston, IL", lat: 42.0565, lng: -87.6753, category: "University" },
    PlaceRow { name: "Grant Park", address: "337 E Randolph St, Chicago, IL", lat: 41.8763, lng: -87.6189, category: "Park" },
    PlaceRow { name: "Starved Rock State Park", address: "2668 E 875th Rd, Oglesby, IL", lat: 41.3192, lng: -88.9942, category: "Park" },
    PlaceRow { name: "O'Hare International Airport", address: "10000 W O'Hare Ave, Chicago, IL", lat: 41.9742, lng: -87.9073, category: "Airport" },
    PlaceRow { name: "Midway International Airport", address: "5700 S Cicero Ave, Chicago, IL", lat: 41.7868, lng: -87.7522, category: "Airport" },
    PlaceRow { name: "Abraham Lincoln Capital Airport", address: "1200 Capital Airport Dr, Springfield, IL", lat: 39.8441, lng: -89.6779, category: "Airport" },
    PlaceRow { name: "Navy Pier", address: "600 E Grand Ave, Chicago, IL", lat: 41.8917, lng: -87.6086, category: "Attraction" },
];

pub fn plan_route(request: &RouteRequest) -> RouteResponse {
    let start = (request.start_latitude, request.start_longitude);
    let end = (request.end_latitude, request.end_longitude);

    let distance = distance_miles(start, end);
    let distance_rounded = (distance * 10.0).round() / 10.0;

    let minutes = (distance / AVERAGE_SPEED_MPH * 60.0).round() as u32;

    let mut polyline = Vec::with_capacity(POLYLINE_SEGMENTS + 1);
    for step in 0..=POLYLINE_SEGMENTS {
        let t = step as f64 / POLYLINE_SEGMENTS as f64;
        polyline.push([
            start.0 + (end.0 - start.0) * t,
            start.1 + (end.1 - start.1) * t,
        ]);
    }

    let instructions = vec![
        "Head toward the nearest interstate on-ramp".to_string(),
        format!("Continue on the interstate for {:.1} miles", distance_rounded),
        "Take the exit toward your destination".to_string(),
        "Arrive at your destination".to_string(),
    ];

    RouteResponse {
        distance_miles: distance_rounded,
        estimated_time_minutes: minutes.max(1),
        polyline,
        instructions,
    }
}

pub fn search_places(request: &PlaceRequest) -> PlaceResponse {
    let query = request.query.to_lowercase();

    let results: Vec<Place> = ILLINOIS_PLACES
        .iter()
        .filter(|row| {
            query.is_empty()
                || row.name.to_lowercase().contains(&query)
                || row.category.to_lowercase().contains(&query)
        })
        .take(request.limit)
        .map(|row| Place {
            name: row.name.to_string(),
            address: row.address.to_string(),
            latitude: row.lat,
            longitude: row.lng,
            category: row.category.to_string(),
        })
        .collect();

    let count = results.len();
    PlaceResponse { results, count }
}
