//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between sweeps.
/// Reads never delete expired entries, so this task is what keeps the cache
/// from growing without bound.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(TtlCache::<String>::new(Duration::from_secs(10)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(5));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: Arc<TtlCache<V>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {}ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
