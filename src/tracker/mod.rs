//! Request Tracker Module
//!
//! Wraps request handlers so every call is timed, classified by response
//! status and recorded into the shared [`MetricsStore`].
//!
//! The label given to each wrapped handler only shows up in logs. All routes
//! feed one global set of counters; there are no per-label buckets.

mod guard;
mod layer;

pub use guard::RequestGuard;
pub use layer::{TrackLayer, Tracked};

use std::sync::Arc;

use crate::metrics::MetricsStore;

// == Request Tracker ==
/// Factory for tracked handlers sharing one metrics store.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    metrics: Arc<MetricsStore>,
}

impl RequestTracker {
    /// Creates a tracker recording into `metrics`.
    pub fn new(metrics: Arc<MetricsStore>) -> Self {
        Self { metrics }
    }

    /// Returns a layer that tracks whatever service it wraps under `label`.
    pub fn layer(&self, label: impl Into<Arc<str>>) -> TrackLayer {
        TrackLayer::new(label, Arc::clone(&self.metrics))
    }

    /// Wraps `service` directly; same as applying [`RequestTracker::layer`].
    pub fn track<S>(&self, label: impl Into<Arc<str>>, service: S) -> Tracked<S> {
        Tracked::new(service, label.into(), Arc::clone(&self.metrics))
    }

    /// The store this tracker records into.
    pub fn metrics(&self) -> &Arc<MetricsStore> {
        &self.metrics
    }
}
