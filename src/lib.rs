//! # GAIMA Backend
//!
//! Demo backend for the Getting Around Illinois Mobile Application. Serves
//! mock road condition layers (traffic, construction, incidents, weather and
//! eleven more) over a JSON API, with a look-ahead hazard alert, a toy route
//! planner and place search, and a JWT-protected admin surface.
//!
//! All map data is generated in memory at startup. One background task
//! regenerates the incidents layer every 30 seconds; nothing else mutates
//! the store. See DESIGN.md for the module-by-module breakdown.
//!
//! ```sh
//! RUST_LOG=info cargo run
//! curl localhost:8000/api/layers/traffic
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod admin;
pub mod alerts;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod geo;
pub mod layers;
pub mod models;
pub mod routes;
pub mod search;
pub mod state;
pub mod store;

use state::AppState;
use store::spawn_incident_refresh;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(routes::root))
        .route("/layers/all", get(routes::layers_summary))
        .route("/layers/{name}", get(routes::get_layer))
        .route("/alerts/lookahead", post(routes::lookahead))
        .route("/search/route", post(routes::search_route))
        .route("/search/place", post(routes::search_place))
        .route("/admin/login", post(routes::admin_login))
        .route("/admin/dashboard", get(routes::admin_dashboard))
        .route("/admin/users", get(routes::admin_users))
        .route("/admin/content", get(routes::admin_content))
        .route("/admin/alerts", get(routes::admin_alerts))
        .route("/admin/audit", get(routes::admin_audit))
        .route("/admin/broadcast", post(routes::admin_broadcast))
        .route("/status", post(routes::create_status).get(routes::list_status))
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting incidents refresh task");
    spawn_incident_refresh(state.store.clone());

    // Demo frontend runs on another origin; keep CORS permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .nest("/api", api_router())
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
