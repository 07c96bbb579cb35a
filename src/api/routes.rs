//! API Routes
//!
//! Configures the Axum router with all profile service endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    character_handler, clear_handler, delete_profile_handler, equipment_handler, health_handler,
    profile_handler, ranking_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /profile/:name` - Character profile, cached
/// - `DELETE /profile/:name` - Drop one cached profile
/// - `GET /character/:name` - Nexon basic info and union overview
/// - `GET /equipment/:name` - Nexon equipped items
/// - `GET /ranking/:name` - Nexon overall ranking (KMS only)
/// - `DELETE /cache` - Empty the cache
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/profile/:name",
            get(profile_handler).delete(delete_profile_handler),
        )
        .route("/character/:name", get(character_handler))
        .route("/equipment/:name", get(equipment_handler))
        .route("/ranking/:name", get(ranking_handler))
        .route("/cache", delete(clear_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
