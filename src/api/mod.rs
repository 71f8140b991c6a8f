//! API Module
//!
//! HTTP handlers and routing exposing the telemetry core.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Stats snapshot as JSON
//! - `GET /metrics` - Stats snapshot as `name value` lines

pub mod exposition;
pub mod handlers;
pub mod routes;

pub use exposition::render_metrics;
pub use handlers::*;
pub use routes::create_router;
