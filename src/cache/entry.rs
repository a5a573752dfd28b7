//! Balance Entry Module
//!
//! Defines a cached balance together with the time it was fetched.

use std::time::{SystemTime, UNIX_EPOCH};

// == Balance Entry ==
/// A successfully fetched balance and when it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    /// Formatted balance, 8 fractional digits
    pub balance: String,
    /// Fetch timestamp (Unix milliseconds)
    pub fetched_at: u64,
}

impl BalanceEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(balance: String) -> Self {
        Self {
            balance,
            fetched_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds since the entry was fetched.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.fetched_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still within its freshness window.
    ///
    /// Boundary condition: an entry whose age equals the timeout is stale, so a
    /// timeout of zero makes every entry stale immediately.
    pub fn is_fresh(&self, timeout_secs: u64) -> bool {
        self.age_ms() < timeout_secs.saturating_mul(1000)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
