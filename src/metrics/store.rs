//! Metrics Store Module
//!
//! Request count, latency total, error count and last request time, updated
//! together under one lock.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::RwLock;

use crate::metrics::{RuntimeProbe, StatsSnapshot};

// == Metrics ==
/// Raw aggregates behind the store's lock.
#[derive(Debug, Clone)]
struct Metrics {
    request_count: u64,
    total_latency: Duration,
    error_count: u64,
    last_request_time: DateTime<Utc>,
}

impl Metrics {
    fn new() -> Self {
        Self {
            request_count: 0,
            total_latency: Duration::ZERO,
            error_count: 0,
            last_request_time: Utc::now(),
        }
    }

    /// Mean latency in milliseconds, guarding the zero-request case.
    fn avg_latency_ms(&self) -> f64 {
        if self.request_count == 0 {
            0.0
        } else {
            self.total_latency.as_millis() as f64 / self.request_count as f64
        }
    }
}

// == Metrics Store ==
/// Thread-safe request metrics.
///
/// Writers go through `track_request`, readers through `stats`. The store
/// never fails; reading before anything was tracked yields zeros.
#[derive(Debug)]
pub struct MetricsStore {
    inner: RwLock<Metrics>,
    probe: RuntimeProbe,
}

impl MetricsStore {
    // == Constructor ==
    /// Creates a store with zeroed counters.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Metrics::new()),
            probe: RuntimeProbe::new(),
        }
    }

    // == Track Request ==
    /// Records one finished request.
    ///
    /// All four aggregates change in a single critical section, so readers
    /// never see a count without its latency and timestamp.
    pub fn track_request(&self, duration: Duration, has_error: bool) {
        let now = Utc::now();
        let mut metrics = self.inner.write();

        metrics.request_count += 1;
        metrics.total_latency = metrics.total_latency.saturating_add(duration);
        if has_error {
            metrics.error_count += 1;
        }
        // Wall clock may step backwards
        metrics.last_request_time = metrics.last_request_time.max(now);
    }

    // == Stats ==
    /// Returns a snapshot of the aggregates plus current runtime figures.
    ///
    /// The lock is released before the runtime is probed.
    pub fn stats(&self) -> StatsSnapshot {
        let metrics = self.inner.read().clone();

        StatsSnapshot {
            request_count: metrics.request_count,
            avg_latency: metrics.avg_latency_ms(),
            error_count: metrics.error_count,
            last_request_time: metrics
                .last_request_time
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            live_tasks: self.probe.live_tasks(),
            memory_usage: self.probe.memory_usage_kb(),
        }
    }
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_zero_state_snapshot() {
        let store = MetricsStore::new();
        let stats = store.stats();

        assert_eq!(stats.request_count, 0);
        assert_eq!(stats.error_count, 0);
        assert_eq!(stats.avg_latency, 0.0);
    }

    #[test]
    fn test_track_request_and_stats() {
        let store = MetricsStore::new();

        store.track_request(Duration::from_millis(100), false);
        store.track_request(Duration::from_millis(200), true);

        let stats = store.stats();
        assert_eq!(stats.request_count, 2);
        assert_eq!(stats.error_count, 1);
        assert_eq!(stats.avg_latency, 150.0);
    }

    #[test]
    fn test_last_request_time_is_recent_rfc3339() {
        let store = MetricsStore::new();
        store.track_request(Duration::from_millis(5), false);

        let stats = store.stats();
        let parsed = DateTime::parse_from_rfc3339(&stats.last_request_time).unwrap();
        let age = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));

        assert!(age.num_seconds() < 2, "last request time too old: {}", age);
    }

    #[test]
    fn test_last_request_time_monotonic() {
        let store = MetricsStore::new();

        store.track_request(Duration::from_millis(1), false);
        let first = store.inner.read().last_request_time;
        store.track_request(Duration::from_millis(1), false);
        let second = store.inner.read().last_request_time;

        assert!(second >= first);
    }

    #[test]
    fn test_concurrent_tracking() {
        let store = Arc::new(MetricsStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..250 {
                        store.track_request(Duration::from_millis(10), (t + i) % 5 == 0);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = store.stats();
        assert_eq!(stats.request_count, 2000);
        assert_eq!(stats.error_count, 400);
        assert_eq!(stats.avg_latency, 10.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Counts and mean latency equal those of the tracked sequence.
        #[test]
        fn prop_metrics_additivity(
            requests in prop::collection::vec((0u64..5_000, any::<bool>()), 0..100)
        ) {
            let store = MetricsStore::new();

            for (millis, has_error) in &requests {
                store.track_request(Duration::from_millis(*millis), *has_error);
            }

            let stats = store.stats();
            let expected_errors = requests.iter().filter(|(_, e)| *e).count() as u64;
            let expected_avg = if requests.is_empty() {
                0.0
            } else {
                requests.iter().map(|(ms, _)| *ms as f64).sum::<f64>() / requests.len() as f64
            };

            prop_assert_eq!(stats.request_count, requests.len() as u64);
            prop_assert_eq!(stats.error_count, expected_errors);
            prop_assert!(stats.error_count <= stats.request_count);
            prop_assert!((stats.avg_latency - expected_avg).abs() < 1e-6);
        }
    }
}
