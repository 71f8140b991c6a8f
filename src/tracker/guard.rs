//! Request Guard
//!
//! Per-request recorder that reports to the metrics store when dropped.

use std::sync::Arc;

use axum::http::StatusCode;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::metrics::MetricsStore;

// == Request Guard ==
/// Times one tracked request and records it on drop.
///
/// Only the first captured status counts. A guard dropped without a status
/// (handler panicked, failed or was cancelled) is recorded as an error with
/// the time elapsed so far.
#[derive(Debug)]
pub struct RequestGuard {
    metrics: Arc<MetricsStore>,
    label: Arc<str>,
    start: Instant,
    status: Option<StatusCode>,
}

impl RequestGuard {
    /// Starts timing a request.
    pub fn start(metrics: Arc<MetricsStore>, label: Arc<str>) -> Self {
        Self {
            metrics,
            label,
            start: Instant::now(),
            status: None,
        }
    }

    /// Captures the response status if none was captured yet.
    pub fn capture(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    /// The captured status, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();

        let has_error = match self.status {
            Some(status) => {
                debug!(
                    route = %self.label,
                    status = status.as_u16(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "request tracked"
                );
                status.as_u16() >= 400
            }
            None => {
                warn!(
                    route = %self.label,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "request ended without a response"
                );
                true
            }
        };

        self.metrics.track_request(elapsed, has_error);
    }
}
