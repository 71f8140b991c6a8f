//! TTL Cache Module
//!
//! Thread-safe expiring key/value store. Reads apply lazy expiry, memory is
//! reclaimed by an explicit `cleanup` sweep.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::cache::{CacheEntry, DEFAULT_TTL};

// == Inner State ==
#[derive(Debug)]
struct Inner<V> {
    /// Expiry window applied to entries created from now on
    ttl: Duration,
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
}

// == TTL Cache ==
/// Generic expiring cache guarded by a single readers-writer lock.
///
/// `get` takes the shared lock; `set`, `configure_ttl` and `cleanup` take the
/// exclusive one. The ttl lives under the same lock as the map so a `set`
/// always observes a fully written ttl.
#[derive(Debug)]
pub struct TtlCache<V> {
    inner: RwLock<Inner<V>>,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache with the given default TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(Inner {
                ttl,
                entries: HashMap::new(),
            }),
        }
    }

    // == Configure TTL ==
    /// Sets the expiry window for future `set` calls.
    ///
    /// Entries already stored keep the expiration computed when they were set.
    pub fn configure_ttl(&self, ttl: Duration) {
        self.inner.write().ttl = ttl;
    }

    /// Returns the currently configured TTL.
    pub fn ttl(&self) -> Duration {
        self.inner.read().ttl
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Returns `None` if the key is missing or its entry has expired. Expired
    /// entries are left in place for `cleanup` to remove.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let inner = self.inner.read();

        inner
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key`, overwriting any previous entry.
    ///
    /// The entry expires one TTL (as configured at call time) from now.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let now = Instant::now();
        let mut inner = self.inner.write();

        let entry = CacheEntry::new(value, now, inner.ttl);
        inner.entries.insert(key.into(), entry);
    }

    // == Cleanup ==
    /// Removes every entry expired as of the start of the sweep.
    ///
    /// Holds the exclusive lock for the whole sweep. Returns the number of
    /// entries removed.
    pub fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut inner = self.inner.write();

        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - inner.entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::time::advance;

    #[test]
    fn test_cache_new() {
        let cache: TtlCache<u32> = TtlCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.ttl(), DEFAULT_TTL);
    }

    #[test]
    fn test_cache_set_and_get() {
        let cache = TtlCache::new(Duration::from_secs(60));

        cache.set("key1", 123);
        assert_eq!(cache.get("key1"), Some(123));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_missing() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_cache_overwrite() {
        let cache = TtlCache::new(Duration::from_secs(60));

        cache.set("key1", "value1".to_string());
        cache.set("key1", "value2".to_string());

        assert_eq!(cache.get("key1").as_deref(), Some("value2"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_expiry_is_lazy() {
        let cache = TtlCache::new(Duration::from_secs(2));

        cache.set("test", 123);
        assert_eq!(cache.get("test"), Some(123));

        advance(Duration::from_secs(3)).await;

        // Invisible to readers but still stored until swept
        assert_eq!(cache.get("test"), None);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_cleanup_removes_expired_only() {
        let cache = TtlCache::new(Duration::from_secs(2));

        cache.set("short1", 1);
        cache.set("short2", 2);
        cache.configure_ttl(Duration::from_secs(60));
        cache.set("long", 3);

        advance(Duration::from_secs(3)).await;

        assert_eq!(cache.cleanup(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("long"), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_idempotent() {
        let cache = TtlCache::new(Duration::from_secs(1));

        cache.set("a", 1);
        cache.set("b", 2);
        advance(Duration::from_secs(2)).await;

        assert_eq!(cache.cleanup(), 2);
        assert_eq!(cache.cleanup(), 0);
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_configure_ttl_not_retroactive() {
        let cache = TtlCache::new(Duration::from_secs(10));

        cache.set("old", 1);
        cache.configure_ttl(Duration::from_secs(1));
        cache.set("new", 2);

        advance(Duration::from_secs(5)).await;

        assert_eq!(cache.get("old"), Some(1));
        assert_eq!(cache.get("new"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_expiry() {
        let cache = TtlCache::new(Duration::from_secs(2));

        cache.set("key", 1);
        advance(Duration::from_secs(1)).await;
        cache.set("key", 2);
        advance(Duration::from_millis(1500)).await;

        assert_eq!(cache.get("key"), Some(2));
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        let key = format!("t{}-k{}", t, i);
                        cache.set(key.clone(), i);
                        assert_eq!(cache.get(&key), Some(i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 800);
    }
}
