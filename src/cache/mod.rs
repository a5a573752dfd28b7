//! Cache Module
//!
//! Provides the shared balance cache with a freshness window and
//! success-only writes.

mod entry;
mod stats;
mod store;

#[cfg(test)]
pub(crate) mod testing;

// Re-export public types
pub use entry::BalanceEntry;
pub use stats::{CacheCounters, CacheStats};
pub use store::BalanceCache;

// == Public Constants ==
/// Default freshness window for a fetched balance, in seconds
pub const CACHE_TIMEOUT: u64 = 300;
