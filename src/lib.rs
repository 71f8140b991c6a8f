//! Telemon - In-process request telemetry for HTTP services
//!
//! Records per-request latency and outcome, exposes aggregated runtime
//! statistics, and memoizes derived values in a TTL cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod tasks;
pub mod tracker;

pub use api::AppState;
pub use cache::TtlCache;
pub use config::Config;
pub use metrics::{MetricsStore, StatsSnapshot};
pub use tasks::spawn_cleanup_task;
pub use tracker::RequestTracker;
