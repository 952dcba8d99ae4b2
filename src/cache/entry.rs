//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age checks.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached response body and the instant it was stored.
///
/// Entries are never mutated in place; an overwriting `add` replaces the
/// whole entry with a fresh timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// When the entry was stored
    pub created_at: Instant,
    /// The stored bytes, opaque to the cache
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` exactly is still
    /// fresh. Only an age strictly greater than `ttl` makes it eligible for
    /// reaping.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
