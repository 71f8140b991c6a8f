//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for memoized stats snapshots
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TELEMON_SERVER_PORT` - HTTP server port (default: 8080)
    /// - `TELEMON_CACHE_TTL` - Stats cache TTL in seconds (default: 10)
    /// - `TELEMON_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("TELEMON_SERVER_PORT", defaults.server_port),
            cache_ttl: env_or("TELEMON_CACHE_TTL", defaults.cache_ttl),
            cleanup_interval: env_or("TELEMON_CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Stats cache TTL as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Cleanup interval as a duration, never shorter than one second.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_ttl: 10,
            cleanup_interval: 5,
        }
    }
}

/// Reads and parses `key`, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
