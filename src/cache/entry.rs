//! Cache Entry Module
//!
//! Defines a single expiring cache slot.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached value together with the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic expiration instant, computed once at insertion
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    pub fn new(value: V, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is expired as of `now`.
    ///
    /// An entry is visible only while `now < expires_at`, so it is expired
    /// from the exact expiration instant onwards.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_not_expired_before_deadline() {
        let now = Instant::now();
        let entry = CacheEntry::new(7u32, now, Duration::from_secs(10));

        assert_eq!(entry.value, 7);
        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + Duration::from_secs(9)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new("v", now, Duration::from_secs(2));

        assert!(entry.is_expired_at(now + Duration::from_secs(2)));
        assert!(entry.is_expired_at(now + Duration::from_secs(3)));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let now = Instant::now();
        let entry = CacheEntry::new("v", now, Duration::ZERO);

        assert!(entry.is_expired_at(now));
    }
}
