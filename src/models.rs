//! # Wire Types
//!
//! Request/response payloads shared by the HTTP handlers.
//!
//! `MapDataPoint` is the one record every map layer serves. Layer-specific
//! attributes (camera feeds, charger availability, rest area amenities) are
//! optional fields that stay out of the JSON entirely for layers that do not
//! carry them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDataPoint {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: LocationPoint,
    pub title: String,
    pub details: String,
    pub severity: String,
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_stations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct LayerResponse {
    pub data: Vec<MapDataPoint>,
    pub last_updated: DateTime<Utc>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct LookAheadRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Direction of travel in degrees (0-360). Accepted but not used to
    /// filter candidates. See DESIGN.md.
    #[allow(dead_code)]
    pub heading: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AlertResponse {
    pub alert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct RouteRequest {
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_latitude: f64,
    pub end_longitude: f64,
}

#[derive(Serialize)]
pub struct RouteResponse {
    pub distance_miles: f64,
    pub estimated_time_minutes: u32,
    pub polyline: Vec<[f64; 2]>,
    pub instructions: Vec<String>,
}

#[derive(Deserialize)]
pub struct PlaceRequest {
    pub query: String,
    #[serde(default = "default_place_limit")]
    pub limit: usize,
}

fn default_place_limit() -> usize {
    10
}

#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
}

#[derive(Serialize)]
pub struct PlaceResponse {
    pub results: Vec<Place>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}
