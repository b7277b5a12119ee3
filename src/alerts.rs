//! # Look-Ahead Alerts
//!
//! Scans the four hazard layers (incidents, construction, closures, weather,
//! in that order) for the nearest hazard within 2 miles of the caller and
//! formats it as a driver advisory.
//!
//! The request carries a travel heading but the scan is radial: candidates
//! are not filtered by direction. That mirrors the deployed behavior and is
//! recorded as an open question in DESIGN.md rather than fixed here.

use crate::geo::distance_miles;
use crate::layers::HAZARD_LAYERS;
use crate::models::{AlertResponse, MapDataPoint};
use crate::store::LayerStore;

/// Hazards further than this are not worth announcing.
const ALERT_RADIUS_MILES: f64 = 2.0;

/// How much of the hazard details makes it into the spoken message.
const DETAILS_PREVIEW_CHARS: usize = 50;

pub fn evaluate(store: &LayerStore, latitude: f64, longitude: f64) -> AlertResponse {
    let caller = (latitude, longitude);

    let mut nearest: Option<(f64, MapDataPoint)> = None;

    for kind in HAZARD_LAYERS {
        let snapshot = store.get(kind);
        for point in snapshot.points.iter() {
            let distance =
                distance_miles(caller, (point.location.latitude, point.location.longitude));
            if distance > ALERT_RADIUS_MILES {
                continue;
            }

            // Strict comparison keeps the first point seen on a tie, so the
            // fixed layer order decides between equally distant hazards.
            let closer = match &nearest {
                Some((best, _)) => distance < *best,
                None => true,
            };
            if closer {
                nearest = Some((distance, point.clone()));
            }
        }
    }

    match nearest {
        Some((distance, hazard)) => AlertResponse {
            alert: true,
            message: Some(format_message(&hazard, distance)),
        },
        None => AlertResponse {
            alert: false,
            message: None,
        },
    }
}

fn format_message(hazard: &MapDataPoint, distance: f64) -> String {
    let rounded = (distance * 10.0).round() / 10.0;
    let unit = if rounded == 1.0 { "mile" } else { "miles" };
    let preview: String = hazard.details.chars().take(DETAILS_PREVIEW_CHARS).collect();

    format!("{} ahead, {:.1} {}. {}...", hazard.title, rounded, unit, preview)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::layers::LayerKind;
    use crate::models::LocationPoint;

    // Store with the hazard layers emptied so tests control every candidate.
    fn bare_store() -> LayerStore {
        let store = LayerStore::new();
        for kind in HAZARD_LAYERS {
            store.replace(kind, Vec::new());
        }
        store
    }

    fn hazard_at(kind: LayerKind, lat: f64, lng: f64, title: &str) -> MapDataPoint {
        MapDataPoint {
            id: Uuid::new_v4().to_string(),
            kind: kind.name().to_uppercase(),
            location: LocationPoint {
                latitude: lat,
                longitude: lng,
            },
            title: title.to_string(),
            details: "Emergency services on scene. Avoid area if possible. Clear time: 45 minutes."
                .to_string(),
            severity: "high".to_string(),
            timestamp: Utc::now(),
            image_url: None,
            is_active: None,
            network: None,
            available_stations: None,
            amenities: None,
        }
    }

    const PROBE_LAT: f64 = 41.8781;
    const PROBE_LNG: f64 = -87.6298;

    // One degree of latitude is ~69.09 statute miles on the haversine sphere.
    fn lat_offset_for_miles(miles: f64) -> f64 {
        miles / 69.09
    }

    #[test]
    fn test_no_hazards_at_all() {
        let store = bare_store();
        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);

        assert!(!response.alert);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_hazard_beyond_two_miles_is_ignored() {
        let store = bare_store();
        store.replace(
            LayerKind::Incidents,
            vec![hazard_at(
                LayerKind::Incidents,
                PROBE_LAT + lat_offset_for_miles(2.5),
                PROBE_LNG,
                "Incident: Accident",
            )],
        );

        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);
        assert!(!response.alert);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_hazard_at_one_point_five_miles() {
        let store = bare_store();
        store.replace(
            LayerKind::Incidents,
            vec![hazard_at(
                LayerKind::Incidents,
                PROBE_LAT + lat_offset_for_miles(1.5),
                PROBE_LNG,
                "Incident: Vehicle Breakdown",
            )],
        );

        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);
        assert!(response.alert);

        let message = response.message.unwrap();
        assert!(message.contains("Incident: Vehicle Breakdown"), "{message}");
        assert!(message.contains("1.5 miles"), "{message}");
    }

    #[test]
    fn test_nearest_hazard_wins() {
        let store = bare_store();
        store.replace(
            LayerKind::Construction,
            vec![hazard_at(
                LayerKind::Construction,
                PROBE_LAT + lat_offset_for_miles(1.8),
                PROBE_LNG,
                "Construction: Bridge Repair",
            )],
        );
        store.replace(
            LayerKind::Closures,
            vec![hazard_at(
                LayerKind::Closures,
                PROBE_LAT + lat_offset_for_miles(0.4),
                PROBE_LNG,
                "Ramp Closure",
            )],
        );

        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);
        let message = response.message.unwrap();
        assert!(message.starts_with("Ramp Closure ahead, 0.4 miles."), "{message}");
    }

    #[test]
    fn test_tie_goes_to_earlier_layer_in_scan_order() {
        let offset = lat_offset_for_miles(1.0);
        let store = bare_store();
        // Same spot, different layers. Incidents is scanned before weather.
        store.replace(
            LayerKind::Weather,
            vec![hazard_at(
                LayerKind::Weather,
                PROBE_LAT + offset,
                PROBE_LNG,
                "Weather: Fog",
            )],
        );
        store.replace(
            LayerKind::Incidents,
            vec![hazard_at(
                LayerKind::Incidents,
                PROBE_LAT + offset,
                PROBE_LNG,
                "Incident: Debris on Road",
            )],
        );

        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);
        let message = response.message.unwrap();
        assert!(message.starts_with("Incident: Debris on Road"), "{message}");
    }

    #[test]
    fn test_singular_mile_at_exactly_one() {
        let store = bare_store();
        store.replace(
            LayerKind::Incidents,
            vec![hazard_at(
                LayerKind::Incidents,
                PROBE_LAT + lat_offset_for_miles(1.0),
                PROBE_LNG,
                "Incident: Accident",
            )],
        );

        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);
        let message = response.message.unwrap();
        assert!(message.contains("1.0 mile."), "{message}");
        assert!(!message.contains("1.0 miles"), "{message}");
    }

    #[test]
    fn test_details_are_truncated_to_fifty_chars() {
        let mut hazard = hazard_at(LayerKind::Incidents, PROBE_LAT, PROBE_LNG, "Incident: Accident");
        hazard.details = "x".repeat(120);

        let store = bare_store();
        store.replace(LayerKind::Incidents, vec![hazard]);

        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);
        let message = response.message.unwrap();
        let preview = "x".repeat(50);
        assert!(message.ends_with(&format!("{preview}...")), "{message}");
        assert!(!message.contains(&"x".repeat(51)), "{message}");
    }

    #[test]
    fn test_non_hazard_layers_are_not_scanned() {
        let store = bare_store();
        // A nearby camera must not trigger a driver alert.
        store.replace(
            LayerKind::Cameras,
            vec![hazard_at(LayerKind::Cameras, PROBE_LAT, PROBE_LNG, "Traffic Camera")],
        );

        let response = evaluate(&store, PROBE_LAT, PROBE_LNG);
        assert!(!response.alert);
    }
}
