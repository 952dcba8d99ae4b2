//! Expiring Cache Module
//!
//! Thread-safe handle over a [`CacheStore`] that owns the background reaper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// A concurrent key/value cache whose entries are swept after a fixed TTL.
///
/// The same duration serves as both the entry lifetime and the reap interval,
/// so a caller may observe an entry up to roughly twice the TTL old.
///
/// Each instance spawns exactly one reaper task on the current tokio runtime.
/// The reaper runs for as long as the cache exists and is aborted when the
/// cache is dropped or [`Cache::stop`] is called.
#[derive(Debug)]
pub struct Cache {
    /// Entry map shared with the reaper
    store: Arc<Mutex<CacheStore>>,
    /// Handle of this instance's reaper
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper_task(store.clone(), ttl);

        Self { store, reaper }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any existing entry.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.lock().await.insert(key.into(), value);
    }

    // == Get ==
    /// Returns the bytes stored under `key`, stale or not, if still present.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.lookup(key)
    }

    // == Length ==
    /// Returns the number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true if the cache holds nothing.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stop ==
    /// Cancels the reaper. Entries stop expiring afterwards.
    pub fn stop(&self) {
        self.reaper.abort();
    }

    /// Returns true once the reaper is no longer running.
    pub fn is_stopped(&self) -> bool {
        self.reaper.is_finished()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
