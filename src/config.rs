//! Configuration Module
//!
//! Handles loading and managing CLI configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;

/// Public PokeAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Rolls above this value let the pokemon escape
pub const DEFAULT_CATCH_THRESHOLD: u32 = 50;

/// CLI configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry lifetime in seconds, also the reaper interval
    pub cache_ttl: u64,
    /// Root of the PokeAPI, without trailing slash
    pub base_url: String,
    /// Highest catch roll that still catches the pokemon
    pub catch_threshold: u32,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache TTL and reap interval in seconds (default: 300)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CATCH_THRESHOLD` - Highest roll that catches (default: 50)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            catch_threshold: env::var("CATCH_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.catch_threshold),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache TTL as a Duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
            catch_threshold: DEFAULT_CATCH_THRESHOLD,
            http_timeout: 10,
        }
    }
}
