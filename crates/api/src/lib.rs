//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Request and response types
//! - Error mapping to HTTP responses

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use divvy_shared::AppConfig;

/// Application state shared across handlers.
///
/// The split engine itself is stateless; the only shared data is the
/// loaded configuration.
#[derive(Clone)]
pub struct AppState {
    /// Loaded application configuration.
    pub config: Arc<AppConfig>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
