//! Stats Snapshot
//!
//! Immutable point-in-time copy of the metrics handed to readers.

use serde::Serialize;

// == Stats Snapshot ==
/// Aggregated request statistics plus process figures.
///
/// Every field is exposed by both the JSON stats endpoint and the plain-text
/// metrics endpoint, which are rendered from the same serialized value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Number of tracked requests
    pub request_count: u64,
    /// Mean request latency in milliseconds, 0 when nothing was tracked
    pub avg_latency: f64,
    /// Number of tracked requests classified as errors
    pub error_count: u64,
    /// Time of the most recent tracked request (RFC 3339)
    pub last_request_time: String,
    /// Alive tasks on the current async runtime
    pub live_tasks: usize,
    /// Resident memory of the process in KB
    pub memory_usage: u64,
}
