//! # Map Layers
//!
//! The fixed set of 15 map layers and their mock point generation.
//!
//! ## Layers
//!
//! Grouped into three priority tiers for the `/layers/all` summary:
//! - high (7): traffic, construction, closures, incidents, weather, winter, restrictions
//! - medium (4): cameras, rest-areas, ev-stations, toll-info
//! - lower (4): special-events, maintenance, emergency-services, travel-centers
//!
//! ## Generation
//!
//! Every point is anchored to a random Illinois city center with a uniform
//! offset of up to 0.1 degrees (~7 miles) per axis, which keeps all
//! coordinates well inside the state's bounding box. Titles and details are
//! drawn from per-layer vocabulary tables lifted from IDOT-style advisories.

use chrono::Utc;
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

use crate::models::{LocationPoint, MapDataPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Traffic,
    Construction,
    Closures,
    Incidents,
    Weather,
    Winter,
    Restrictions,
    Cameras,
    RestAreas,
    EvStations,
    TollInfo,
    SpecialEvents,
    Maintenance,
    EmergencyServices,
    TravelCenters,
}

pub const ALL_LAYERS: [LayerKind; 15] = [
    LayerKind::Traffic,
    LayerKind::Construction,
    LayerKind::Closures,
    LayerKind::Incidents,
    LayerKind::Weather,
    LayerKind::Winter,
    LayerKind::Restrictions,
    LayerKind::Cameras,
    LayerKind::RestAreas,
    LayerKind::EvStations,
    LayerKind::TollInfo,
    LayerKind::SpecialEvents,
    LayerKind::Maintenance,
    LayerKind::EmergencyServices,
    LayerKind::TravelCenters,
];

pub const HIGH_PRIORITY: [LayerKind; 7] = [
    LayerKind::Traffic,
    LayerKind::Construction,
    LayerKind::Closures,
    LayerKind::Incidents,
    LayerKind::Weather,
    LayerKind::Winter,
    LayerKind::Restrictions,
];

pub const MEDIUM_PRIORITY: [LayerKind; 4] = [
    LayerKind::Cameras,
    LayerKind::RestAreas,
    LayerKind::EvStations,
    LayerKind::TollInfo,
];

pub const LOWER_PRIORITY: [LayerKind; 4] = [
    LayerKind::SpecialEvents,
    LayerKind::Maintenance,
    LayerKind::EmergencyServices,
    LayerKind::TravelCenters,
];

/// Layers scanned by the look-ahead alert evaluator, in scan order.
pub const HAZARD_LAYERS: [LayerKind; 4] = [
    LayerKind::Incidents,
    LayerKind::Construction,
    LayerKind::Closures,
    LayerKind::Weather,
];

impl LayerKind {
    /// Canonical name as it appears in URLs (hyphenated, lowercase).
    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Traffic => "traffic",
            LayerKind::Construction => "construction",
            LayerKind::Closures => "closures",
            LayerKind::Incidents => "incidents",
            LayerKind::Weather => "weather",
            LayerKind::Winter => "winter",
            LayerKind::Restrictions => "restrictions",
            LayerKind::Cameras => "cameras",
            LayerKind::RestAreas => "rest-areas",
            LayerKind::EvStations => "ev-stations",
            LayerKind::TollInfo => "toll-info",
            LayerKind::SpecialEvents => "special-events",
            LayerKind::Maintenance => "maintenance",
            LayerKind::EmergencyServices => "emergency-services",
            LayerKind::TravelCenters => "travel-centers",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_LAYERS.iter().copied().find(|kind| kind.name() == name)
    }
}

struct City {
    lat: f64,
    lng: f64,
}

const ILLINOIS_CITIES: [City; 10] = [
    City { lat: 41.8781, lng: -87.6298 }, // Chicago
    City { lat: 41.7606, lng: -88.3201 }, // Aurora
    City { lat: 42.2711, lng: -89.0940 }, // Rockford
    City { lat: 41.5250, lng: -88.0817 }, // Joliet
    City { lat: 41.7508, lng: -88.1535 }, // Naperville
    City { lat: 39.7817, lng: -89.6501 }, // Springfield
    City { lat: 40.6936, lng: -89.5890 }, // Peoria
    City { lat: 42.0354, lng: -88.2826 }, // Elgin
    City { lat: 42.3636, lng: -87.8448 }, // Waukegan
    City { lat: 41.8456, lng: -87.7539 }, // Cicero
];

const SEVERITIES: [&str; 3] = ["low", "medium", "high"];

const TRAFFIC_CONDITIONS: [&str; 5] = [
    "Light Traffic",
    "Moderate Traffic",
    "Heavy Traffic",
    "Stop and Go",
    "Accident Delays",
];

const WORK_TYPES: [&str; 5] = [
    "Road Resurfacing",
    "Bridge Repair",
    "Lane Expansion",
    "Utility Work",
    "Shoulder Repair",
];

const CLOSURE_TYPES: [&str; 4] = [
    "Lane Closure",
    "Ramp Closure",
    "Full Road Closure",
    "Shoulder Closure",
];

const INCIDENT_TYPES: [&str; 5] = [
    "Vehicle Breakdown",
    "Accident",
    "Debris on Road",
    "Disabled Vehicle",
    "Emergency Response",
];

const WEATHER_CONDITIONS: [&str; 6] = [
    "Rain",
    "Snow",
    "Fog",
    "Ice Warning",
    "High Winds",
    "Poor Visibility",
];

const WINTER_CONDITIONS: [&str; 5] = [
    "Ice on Roadway",
    "Snow Covered",
    "Salt Trucks Active",
    "Chains Required",
    "Winter Weather Advisory",
];

const RESTRICTION_TYPES: [&str; 5] = [
    "Weight Restriction",
    "Height Restriction",
    "Hazmat Prohibited",
    "No Trucks",
    "Load Limit",
];

const CAMERA_ROADS: [&str; 5] = ["I-55", "I-57", "I-74", "I-80", "I-90"];

const REST_AREA_AMENITIES: [&str; 6] = [
    "Restrooms",
    "Vending",
    "Picnic Area",
    "Pet Area",
    "Truck Parking",
    "WiFi",
];

const EV_NETWORKS: [&str; 4] = ["ChargePoint", "Electrify America", "EVgo", "Tesla Supercharger"];

const TOLL_PLAZAS: [&str; 4] = [
    "Main Line Plaza",
    "Ramp Plaza",
    "Bridge Toll",
    "Express Lane Gantry",
];

const EVENT_TYPES: [&str; 5] = [
    "County Fair",
    "Marathon Road Race",
    "Farmers Market",
    "Parade Route",
    "Stadium Event",
];

const MAINTENANCE_WORK: [&str; 5] = [
    "Pothole Patching",
    "Mowing Operations",
    "Striping Crew",
    "Bridge Inspection",
    "Guardrail Repair",
];

const EMERGENCY_FACILITIES: [&str; 4] = [
    "Fire Station",
    "State Police Post",
    "Hospital ER",
    "Towing Service",
];

const TRAVEL_CENTER_NAMES: [&str; 4] = [
    "Welcome Center",
    "Tourist Information",
    "Oasis Travel Plaza",
    "Visitor Center",
];

fn random_location_near_illinois<R: Rng>(rng: &mut R) -> LocationPoint {
    // Arrays are non-empty, choose cannot fail.
    let city = ILLINOIS_CITIES.choose(rng).unwrap();
    LocationPoint {
        latitude: city.lat + rng.gen_range(-0.1..=0.1),
        longitude: city.lng + rng.gen_range(-0.1..=0.1),
    }
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).unwrap()
}

/// Produce `count` synthetic points for one layer. Ids are fresh uuids, so
/// every batch is unique; the `type` field is the layer name upper-cased.
pub fn generate_points(kind: LayerKind, count: usize) -> Vec<MapDataPoint> {
    let mut rng = rand::thread_rng();
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let mut point = MapDataPoint {
            id: Uuid::new_v4().to_string(),
            kind: kind.name().to_uppercase(),
            location: random_location_near_illinois(&mut rng),
            title: String::new(),
            details: String::new(),
            severity: pick(&mut rng, &SEVERITIES).to_string(),
            timestamp: Utc::now(),
            image_url: None,
            is_active: None,
            network: None,
            available_stations: None,
            amenities: None,
        };

        fill_layer_fields(kind, &mut point, &mut rng);
        points.push(point);
    }

    points
}

fn fill_layer_fields<R: Rng>(kind: LayerKind, point: &mut MapDataPoint, rng: &mut R) {
    match kind {
        LayerKind::Traffic => {
            point.title = format!("Traffic: {}", pick(rng, &TRAFFIC_CONDITIONS));
            point.details = format!(
                "Average speed: {} mph. Estimated delay: {} minutes.",
                rng.gen_range(15..=65),
                rng.gen_range(2..=30)
            );
        }
        LayerKind::Construction => {
            point.title = format!("Construction: {}", pick(rng, &WORK_TYPES));
            point.details = format!(
                "Work zone active. Expect delays. Estimated completion: {} days.",
                rng.gen_range(1..=90)
            );
        }
        LayerKind::Closures => {
            point.title = pick(rng, &CLOSURE_TYPES).to_string();
            point.details = format!(
                "Duration: {} hours. Use alternate route recommended.",
                rng.gen_range(2..=24)
            );
        }
        LayerKind::Incidents => {
            point.title = format!("Incident: {}", pick(rng, &INCIDENT_TYPES));
            point.details = format!(
                "Emergency services on scene. Avoid area if possible. Clear time: {} minutes.",
                rng.gen_range(30..=180)
            );
        }
        LayerKind::Weather => {
            point.title = format!("Weather: {}", pick(rng, &WEATHER_CONDITIONS));
            point.details = format!(
                "Drive with caution. Visibility: {} feet. Speed limit reduced.",
                rng.gen_range(100..=1000)
            );
        }
        LayerKind::Winter => {
            point.title = format!("Winter Condition: {}", pick(rng, &WINTER_CONDITIONS));
            point.details = format!(
                "Winter driving conditions. Reduce speed. Snow depth: {} inches.",
                rng.gen_range(1..=12)
            );
        }
        LayerKind::Restrictions => {
            point.title = format!("Vehicle Restriction: {}", pick(rng, &RESTRICTION_TYPES));
            point.details = format!(
                "Commercial vehicle restrictions in effect. Max weight: {}k lbs.",
                rng.gen_range(20..=80)
            );
        }
        LayerKind::Cameras => {
            let road = pick(rng, &CAMERA_ROADS);
            let milepost = rng.gen_range(1..=120);
            point.title = format!("Traffic Camera: {} MP {}", road, milepost);
            point.details = format!("Live camera feed on {} at milepost {}.", road, milepost);
            point.image_url = Some(format!(
                "https://cameras.gettingaroundillinois.com/{}/mp{}.jpg",
                road.to_lowercase(),
                milepost
            ));
            point.is_active = Some(rng.gen_bool(0.9));
        }
        LayerKind::RestAreas => {
            point.title = format!("Rest Area: {}", pick(rng, &CAMERA_ROADS));
            point.details = "Open 24 hours. Facilities available.".to_string();
            let picks = rng.gen_range(2..=4);
            let mut amenities: Vec<String> = REST_AREA_AMENITIES
                .choose_multiple(rng, picks)
                .map(|s| s.to_string())
                .collect();
            amenities.sort();
            point.amenities = Some(amenities);
        }
        LayerKind::EvStations => {
            let total = rng.gen_range(4..=12);
            point.title = format!("EV Charging: {}", pick(rng, &EV_NETWORKS));
            point.details = format!("DC fast charging. {} total stalls.", total);
            point.network = Some(pick(rng, &EV_NETWORKS).to_string());
            point.available_stations = Some(rng.gen_range(0..=total));
        }
        LayerKind::TollInfo => {
            point.title = format!("Toll: {}", pick(rng, &TOLL_PLAZAS));
            point.details = format!(
                "Passenger vehicle rate: ${}.{:02}. I-PASS accepted.",
                rng.gen_range(0..=3),
                rng.gen_range(0..=95)
            );
        }
        LayerKind::SpecialEvents => {
            point.title = format!("Event: {}", pick(rng, &EVENT_TYPES));
            point.details = format!(
                "Expect increased traffic. Event duration: {} hours.",
                rng.gen_range(2..=12)
            );
        }
        LayerKind::Maintenance => {
            point.title = format!("Maintenance: {}", pick(rng, &MAINTENANCE_WORK));
            point.details = format!(
                "Scheduled roadway maintenance. Crews on site for {} days.",
                rng.gen_range(1..=14)
            );
        }
        LayerKind::EmergencyServices => {
            point.title = pick(rng, &EMERGENCY_FACILITIES).to_string();
            point.details = "Emergency services facility. Available 24/7.".to_string();
        }
        LayerKind::TravelCenters => {
            point.title = pick(rng, &TRAVEL_CENTER_NAMES).to_string();
            point.details = format!(
                "Maps, local information, and staff assistance. Open {} AM to {} PM.",
                rng.gen_range(6..=9),
                rng.gen_range(5..=9)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const LAT_MIN: f64 = 36.97;
    const LAT_MAX: f64 = 42.51;
    const LNG_MIN: f64 = -91.51;
    const LNG_MAX: f64 = -87.02;

    #[test]
    fn test_fifteen_layers_in_three_tiers() {
        assert_eq!(ALL_LAYERS.len(), 15);
        assert_eq!(
            HIGH_PRIORITY.len() + MEDIUM_PRIORITY.len() + LOWER_PRIORITY.len(),
            15
        );

        let tiered: HashSet<_> = HIGH_PRIORITY
            .iter()
            .chain(MEDIUM_PRIORITY.iter())
            .chain(LOWER_PRIORITY.iter())
            .collect();
        assert_eq!(tiered.len(), 15);
    }

    #[test]
    fn test_name_round_trip() {
        for kind in ALL_LAYERS {
            assert_eq!(LayerKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(LayerKind::from_name("submarines"), None);
        assert_eq!(LayerKind::from_name("rest_areas"), None);
    }

    #[test]
    fn test_points_within_illinois_bounds() {
        for kind in ALL_LAYERS {
            for point in generate_points(kind, 40) {
                let LocationPoint {
                    latitude,
                    longitude,
                } = point.location;
                assert!(
                    (LAT_MIN..=LAT_MAX).contains(&latitude),
                    "latitude {latitude} outside Illinois"
                );
                assert!(
                    (LNG_MIN..=LNG_MAX).contains(&longitude),
                    "longitude {longitude} outside Illinois"
                );
            }
        }
    }

    #[test]
    fn test_point_invariants() {
        for kind in ALL_LAYERS {
            let points = generate_points(kind, 30);
            assert_eq!(points.len(), 30);

            let ids: HashSet<_> = points.iter().map(|p| p.id.clone()).collect();
            assert_eq!(ids.len(), points.len(), "duplicate ids in one batch");

            for point in &points {
                assert_eq!(point.kind, kind.name().to_uppercase());
                assert!(["low", "medium", "high"].contains(&point.severity.as_str()));
                assert!(!point.title.is_empty());
                assert!(!point.details.is_empty());
            }
        }
    }

    #[test]
    fn test_layer_specific_fields() {
        for point in generate_points(LayerKind::Cameras, 20) {
            assert!(point.image_url.is_some());
            assert!(point.is_active.is_some());
            assert!(point.network.is_none());
        }

        for point in generate_points(LayerKind::EvStations, 20) {
            assert!(point.network.is_some());
            assert!(point.available_stations.is_some());
            assert!(point.image_url.is_none());
        }

        for point in generate_points(LayerKind::Traffic, 20) {
            assert!(point.image_url.is_none());
            assert!(point.amenities.is_none());
        }
    }
}
