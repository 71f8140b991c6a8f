//! Cache Module
//!
//! Generic in-memory cache with per-entry TTL expiration.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::TtlCache;

use std::time::Duration;

// == Public Constants ==
/// Expiry window used when no TTL is configured
pub const DEFAULT_TTL: Duration = Duration::from_secs(10);
