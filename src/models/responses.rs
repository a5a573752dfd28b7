//! Response DTOs for the explorer API
//!
//! Defines the structure of outgoing HTTP response bodies. Exponents and page
//! numbers exceed every JSON number type, so they are sent as decimal strings.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::keys::{KeyRecord, KeySpace};
use crate::page::{KeyRow, Page};

/// One derived key (GET /key/:exponent, and each row of a page)
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    /// Private key exponent, decimal
    pub exponent: String,
    /// Uncompressed WIF private key
    pub wif: String,
    /// Uncompressed address
    pub address: String,
    /// Compressed address
    pub compressed_address: String,
    /// Balance of the uncompressed address
    pub balance: String,
    /// Page listing this key
    pub page: String,
}

impl KeyResponse {
    /// Creates a KeyResponse from an assembled row
    pub fn from_row(row: KeyRow, space: &KeySpace) -> Self {
        let KeyRow { record, balance } = row;
        let page = space.page_of(&record.exponent).to_string();
        Self {
            exponent: record.exponent.to_string(),
            wif: record.wif,
            address: record.address,
            compressed_address: record.compressed_address,
            balance,
            page,
        }
    }
}

/// Response body for GET /page/:page
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    /// Page number actually served
    pub page: String,
    /// Total number of pages
    pub max_pages: String,
    /// Keys on the page
    pub keys: Vec<KeyResponse>,
}

impl PageResponse {
    /// Creates a PageResponse from an assembled page
    pub fn from_page(page: Page, space: &KeySpace) -> Self {
        Self {
            page: page.number.to_string(),
            max_pages: page.max_pages.to_string(),
            keys: page
                .rows
                .into_iter()
                .map(|row| KeyResponse::from_row(row, space))
                .collect(),
        }
    }
}

/// Response body for GET /gen_pair
#[derive(Debug, Clone, Serialize)]
pub struct PairResponse {
    /// Uncompressed WIF private key
    pub wif: String,
    /// Uncompressed address
    pub address: String,
}

impl From<KeyRecord> for PairResponse {
    fn from(record: KeyRecord) -> Self {
        Self {
            wif: record.wif,
            address: record.address,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups served from a fresh entry
    pub hits: u64,
    /// Lookups that went to the balance service
    pub misses: u64,
    /// Successful balance fetches
    pub fetches: u64,
    /// Failed balance fetches
    pub fetch_failures: u64,
    /// Cached addresses
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Freshness window in seconds
    pub cache_timeout: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: CacheStats, cache_timeout: u64) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            fetches: stats.fetches,
            fetch_failures: stats.fetch_failures,
            total_entries: stats.total_entries,
            cache_timeout,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
