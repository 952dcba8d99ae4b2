//! Cache Store Module
//!
//! The unsynchronized entry map behind the expiring cache. Every method here
//! is called with the cache lock already held.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// URL-keyed response storage with a fixed time-to-live.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum age before an entry may be reaped
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and its timestamp.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Lookup ==
    /// Returns a copy of the bytes stored under `key`.
    ///
    /// Staleness is not checked here: an entry past its TTL stays visible
    /// until the reaper removes it.
    pub fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_stale(ttl));
        before - self.entries.len()
    }

    // == TTL ==
    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
