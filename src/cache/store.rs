//! Balance Cache Module
//!
//! Time-bounded memoization of external balance lookups, keyed by address.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::balance::{format_satoshis, BalanceSource, ZERO_BALANCE};
use crate::cache::{BalanceEntry, CacheCounters, CacheStats};

// == Balance Cache ==
/// Shared balance cache in front of a `BalanceSource`.
///
/// Only successful lookups are stored. A failed lookup returns
/// `ZERO_BALANCE` and leaves any existing entry untouched, so the next call
/// retries the source. Entries are replaced whole, never evicted.
pub struct BalanceCache {
    /// address -> last successful balance
    entries: RwLock<HashMap<String, BalanceEntry>>,
    source: Arc<dyn BalanceSource>,
    /// Freshness window in seconds
    timeout_secs: u64,
    counters: CacheCounters,
}

impl BalanceCache {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `source` - Where balances are fetched on a miss
    /// * `timeout_secs` - How long a fetched balance stays fresh
    pub fn new(source: Arc<dyn BalanceSource>, timeout_secs: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            source,
            timeout_secs,
            counters: CacheCounters::new(),
        }
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    // == Get Balance ==
    /// Returns the balance of `address`, fetching it when no fresh entry exists.
    ///
    /// The lock is released while the source is queried; concurrent misses on
    /// the same address may each fetch.
    pub async fn get_balance(&self, address: &str) -> String {
        if let Some(balance) = self.fresh(address).await {
            self.counters.record_hit();
            debug!("Balance cache hit for {}", address);
            return balance;
        }

        self.counters.record_miss();
        debug!("Balance cache miss for {}", address);

        match self.source.fetch_satoshis(address).await {
            Ok(satoshis) => {
                self.counters.record_fetch();
                let balance = format_satoshis(satoshis);
                self.entries
                    .write()
                    .await
                    .insert(address.to_string(), BalanceEntry::new(balance.clone()));
                balance
            }
            Err(err) => {
                self.counters.record_failure();
                warn!("Error fetching balance for {}: {}", address, err);
                ZERO_BALANCE.to_string()
            }
        }
    }

    // == Fresh ==
    /// Returns the cached balance if it is still fresh, without any I/O.
    pub async fn fresh(&self, address: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(address)
            .filter(|entry| entry.is_fresh(self.timeout_secs))
            .map(|entry| entry.balance.clone())
    }

    // == Entry ==
    /// Returns the stored entry for `address`, fresh or stale.
    pub async fn entry(&self, address: &str) -> Option<BalanceEntry> {
        self.entries.read().await.get(address).cloned()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.entries.read().await.len();
        self.counters.snapshot(total_entries)
    }

    // == Length ==
    /// Returns the number of cached addresses.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl std::fmt::Debug for BalanceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceCache")
            .field("timeout_secs", &self.timeout_secs)
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}
