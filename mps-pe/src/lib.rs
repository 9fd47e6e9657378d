//! mps-pe library - Playlist Engine module
//!
//! Stateless fabrication of mood playlists behind a JSON HTTP API, plus an
//! embedded browser UI for driving it.

use axum::Router;
use mps_common::config::ListenConfig;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod synthesis;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved listen address (surfaced in logs and build info)
    pub listen: ListenConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(listen: ListenConfig) -> Self {
        Self { listen }
    }
}

/// Build application router
///
/// CORS is permissive so a separately served client can reach the API
/// during development.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/generate-playlist", post(api::generate_playlist))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
}
