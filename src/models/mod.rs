//! Response models for the HTTP layer
//!
//! DTOs serialized into response bodies. The stats body is the
//! [`StatsSnapshot`](crate::metrics::StatsSnapshot) itself.

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse};
