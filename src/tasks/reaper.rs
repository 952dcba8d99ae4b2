//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, trace};

use crate::cache::CacheStore;

/// Shortest period the reaper will tick at. `tokio::time::interval` rejects zero.
const MIN_REAP_INTERVAL: Duration = Duration::from_millis(1);

/// Longest period the reaper will tick at. Larger values overflow `Instant` arithmetic.
const MAX_REAP_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Spawns a background task that sweeps expired entries out of `store`.
///
/// The first sweep happens one `interval` after the call, then at a fixed rate.
/// Each sweep holds the store lock for the whole scan, so `add`/`get` calls that
/// arrive mid-sweep wait for it to finish.
///
/// # Arguments
/// * `store` - Arc<Mutex<CacheStore>> shared with the owning cache
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task. The task never returns on its own;
/// aborting the handle is the only way to stop it.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(300))));
/// let reaper = spawn_reaper_task(store.clone(), Duration::from_secs(300));
/// // Later, in teardown:
/// reaper.abort();
/// ```
pub fn spawn_reaper_task(store: Arc<Mutex<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    let period = interval.clamp(MIN_REAP_INTERVAL, MAX_REAP_INTERVAL);

    tokio::spawn(async move {
        debug!("Starting cache reaper with interval of {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);

        loop {
            ticker.tick().await;

            let (removed, remaining) = {
                let mut guard = store.lock().await;
                let removed = guard.reap_expired();
                (removed, guard.len())
            };

            if removed > 0 {
                debug!(removed, remaining, "Cache reaper evicted expired entries");
            } else {
                trace!(remaining, "Cache reaper found no expired entries");
            }
        }
    })
}
