//! HTTP handlers for every `/api` endpoint. Thin glue: each one validates
//! through its extractors, calls into the relevant module, and wraps the
//! result in JSON.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::{
    admin::{self, BroadcastRequest, BroadcastResponse},
    alerts,
    auth::{self, AdminClaims, LoginRequest, LoginResponse},
    error::AppError,
    layers::{LayerKind, HIGH_PRIORITY, LOWER_PRIORITY, MEDIUM_PRIORITY},
    models::{
        AlertResponse, LayerResponse, LookAheadRequest, PlaceRequest, PlaceResponse, RouteRequest,
        RouteResponse, StatusCheck, StatusCheckCreate,
    },
    search,
    state::AppState,
};

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "GAIMA API - Getting Around Illinois Mobile Application"
    }))
}

pub async fn get_layer(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<LayerResponse> {
    let snapshot = state.store.get_by_name(&name);

    Json(LayerResponse {
        count: snapshot.points.len(),
        data: snapshot.points.as_ref().clone(),
        last_updated: snapshot.last_updated,
    })
}

#[derive(Serialize)]
pub struct LayerSummary {
    pub count: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct LayersAllResponse {
    pub high_priority: BTreeMap<&'static str, LayerSummary>,
    pub medium_priority: BTreeMap<&'static str, LayerSummary>,
    pub lower_priority: BTreeMap<&'static str, LayerSummary>,
    pub total_layers: usize,
    pub total_data_points: usize,
}

fn summarize_tier(state: &AppState, tier: &[LayerKind]) -> BTreeMap<&'static str, LayerSummary> {
    tier.iter()
        .map(|&kind| {
            let snapshot = state.store.get(kind);
            (
                kind.name(),
                LayerSummary {
                    count: snapshot.points.len(),
                    last_updated: snapshot.last_updated,
                },
            )
        })
        .collect()
}

pub async fn layers_summary(State(state): State<Arc<AppState>>) -> Json<LayersAllResponse> {
    let high_priority = summarize_tier(&state, &HIGH_PRIORITY);
    let medium_priority = summarize_tier(&state, &MEDIUM_PRIORITY);
    let lower_priority = summarize_tier(&state, &LOWER_PRIORITY);

    Json(LayersAllResponse {
        total_layers: high_priority.len() + medium_priority.len() + lower_priority.len(),
        total_data_points: state.store.total_points(),
        high_priority,
        medium_priority,
        lower_priority,
    })
}

pub async fn lookahead(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LookAheadRequest>,
) -> Json<AlertResponse> {
    Json(alerts::evaluate(
        &state.store,
        request.latitude,
        request.longitude,
    ))
}

pub async fn search_route(Json(request): Json<RouteRequest>) -> Json<RouteResponse> {
    Json(search::plan_route(&request))
}

pub async fn search_place(Json(request): Json<PlaceRequest>) -> Json<PlaceResponse> {
    Json(search::search_places(&request))
}

pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    auth::login(&state.config, &request).map(Json)
}

pub async fn admin_dashboard(
    _claims: AdminClaims,
    State(state): State<Arc<AppState>>,
) -> Json<admin::DashboardResponse> {
    Json(admin::dashboard(&state))
}

pub async fn admin_users(_claims: AdminClaims) -> Json<Vec<admin::AdminUser>> {
    Json(admin::users())
}

pub async fn admin_content(_claims: AdminClaims) -> Json<admin::ContentResponse> {
    Json(admin::content())
}

pub async fn admin_alerts(_claims: AdminClaims) -> Json<admin::AlertsResponse> {
    Json(admin::alerts())
}

pub async fn admin_audit(_claims: AdminClaims) -> Json<admin::AuditResponse> {
    Json(admin::audit())
}

pub async fn admin_broadcast(
    _claims: AdminClaims,
    Json(request): Json<BroadcastRequest>,
) -> Json<BroadcastResponse> {
    Json(admin::broadcast(&request))
}

pub async fn create_status(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = StatusCheck::new(request.client_name);
    state.status.insert(&check).await?;

    Ok(Json(check))
}

pub async fn list_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    state.status.fetch().await.map(Json)
}
