//! Tracking Layer
//!
//! `tower` layer and service wrapper that forward every call to the inner
//! service and only observe the response status.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{Request, Response};
use tower::{Layer, Service};

use crate::metrics::MetricsStore;
use crate::tracker::RequestGuard;

// == Track Layer ==
/// Layer producing [`Tracked`] services.
#[derive(Debug, Clone)]
pub struct TrackLayer {
    label: Arc<str>,
    metrics: Arc<MetricsStore>,
}

impl TrackLayer {
    /// Creates a layer recording into `metrics` under `label`.
    pub fn new(label: impl Into<Arc<str>>, metrics: Arc<MetricsStore>) -> Self {
        Self {
            label: label.into(),
            metrics,
        }
    }
}

impl<S> Layer<S> for TrackLayer {
    type Service = Tracked<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Tracked::new(inner, Arc::clone(&self.label), Arc::clone(&self.metrics))
    }
}

// == Tracked Service ==
/// A service with the same request/response signature as the one it wraps.
#[derive(Debug, Clone)]
pub struct Tracked<S> {
    inner: S,
    label: Arc<str>,
    metrics: Arc<MetricsStore>,
}

impl<S> Tracked<S> {
    pub(crate) fn new(inner: S, label: Arc<str>, metrics: Arc<MetricsStore>) -> Self {
        Self {
            inner,
            label,
            metrics,
        }
    }

    /// Label this service is tracked under.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<S, B, ResBody> Service<Request<B>> for Tracked<S>
where
    S: Service<Request<B>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        // Timing starts before the inner service sees the request
        let mut guard = RequestGuard::start(Arc::clone(&self.metrics), Arc::clone(&self.label));
        let future = self.inner.call(req);

        Box::pin(async move {
            let result = future.await;
            if let Ok(response) = &result {
                guard.capture(response.status());
            }
            // Guard drops here, or earlier on panic or cancellation
            result
        })
    }
}
