//! API Handlers
//!
//! HTTP request handlers for the health, stats and metrics endpoints.

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, Json};

use crate::api::render_metrics;
use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::Result;
use crate::metrics::{MetricsStore, StatsSnapshot};
use crate::models::HealthResponse;
use crate::tracker::RequestTracker;

/// Cache key under which the latest stats snapshot is memoized
pub const STATS_CACHE_KEY: &str = "stats";

/// Application state shared across all handlers.
///
/// Every store is explicitly constructed and shared through `Arc`, so tests
/// can build as many independent instances as they like.
#[derive(Clone)]
pub struct AppState {
    /// Request metrics fed by the tracker
    pub metrics: Arc<MetricsStore>,
    /// Memoized stats snapshots
    pub stats_cache: Arc<TtlCache<StatsSnapshot>>,
    /// Wraps route handlers, recording into `metrics`
    pub tracker: RequestTracker,
}

impl AppState {
    /// Creates a new AppState from existing stores.
    pub fn new(metrics: Arc<MetricsStore>, stats_cache: Arc<TtlCache<StatsSnapshot>>) -> Self {
        let tracker = RequestTracker::new(Arc::clone(&metrics));
        Self {
            metrics,
            stats_cache,
            tracker,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The configured TTL is applied to the stats cache before first use.
    pub fn from_config(config: &Config) -> Self {
        let stats_cache = TtlCache::default();
        stats_cache.configure_ttl(config.cache_ttl());
        Self::new(Arc::new(MetricsStore::new()), Arc::new(stats_cache))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MetricsStore::new()), Arc::new(TtlCache::default()))
    }
}

/// Returns the memoized snapshot, computing and caching a fresh one on miss.
pub fn current_stats(state: &AppState) -> StatsSnapshot {
    if let Some(snapshot) = state.stats_cache.get(STATS_CACHE_KEY) {
        return snapshot;
    }

    let snapshot = state.metrics.stats();
    state.stats_cache.set(STATS_CACHE_KEY, snapshot.clone());
    snapshot
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /stats
///
/// Returns the stats snapshot as a JSON object.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(current_stats(&state))
}

/// Handler for GET /metrics
///
/// Returns the stats snapshot as plain-text `name value` lines.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = render_metrics(&current_stats(&state))?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}
