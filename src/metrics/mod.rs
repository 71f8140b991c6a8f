//! Metrics Module
//!
//! Request counters, latency aggregates and the runtime figures reported
//! alongside them.

mod probe;
mod snapshot;
mod store;

pub use probe::RuntimeProbe;
pub use snapshot::StatsSnapshot;
pub use store::MetricsStore;
