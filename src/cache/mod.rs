//! Cache Module
//!
//! Provides the in-memory response cache with periodic TTL reaping.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use store::CacheStore;

// == Public Constants ==
/// Default entry lifetime and reap interval
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;
