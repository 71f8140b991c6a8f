//! API Routes
//!
//! Configures the Axum router, wrapping every handler with the request tracker.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, metrics_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint (tracked as `health`)
/// - `GET /stats` - JSON stats snapshot (tracked as `stats`)
/// - `GET /metrics` - Plain-text stats snapshot (tracked as `metrics`)
///
/// # Middleware
/// - Tracking: each route records latency and outcome into the metrics store
/// - Compression: gzip for `/stats` and `/metrics` when the client accepts it
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let tracker = state.tracker.clone();

    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let exposition = Router::new()
        .route("/stats", get(stats_handler).layer(tracker.layer("stats")))
        .route("/metrics", get(metrics_handler).layer(tracker.layer("metrics")))
        .layer(CompressionLayer::new());

    Router::new()
        .route("/health", get(health_handler).layer(tracker.layer("health")))
        .merge(exposition)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
