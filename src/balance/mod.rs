//! Balance Module
//!
//! External balance lookup for addresses.
//!
//! # Sources
//! - `BlockchainInfoClient` - HTTP client for the `/balance?active=` endpoint

mod client;

use async_trait::async_trait;

use crate::error::BalanceError;

pub use client::BlockchainInfoClient;

// == Public Constants ==
/// Satoshis per displayed coin unit
pub const SATOSHIS_PER_COIN: u64 = 100_000_000;

/// Balance shown when no fresh figure is available
pub const ZERO_BALANCE: &str = "0.00000000";

// == Balance Source ==
/// Something that can report the confirmed balance of an address in satoshis.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn fetch_satoshis(&self, address: &str) -> Result<u64, BalanceError>;
}

// == Format Satoshis ==
/// Renders satoshis as a coin amount with exactly 8 fractional digits.
pub fn format_satoshis(satoshis: u64) -> String {
    format!(
        "{}.{:08}",
        satoshis / SATOSHIS_PER_COIN,
        satoshis % SATOSHIS_PER_COIN
    )
}
