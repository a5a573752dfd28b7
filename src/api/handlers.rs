//! API Handlers
//!
//! HTTP request handlers for each explorer endpoint.

use std::sync::Arc;

use alloy_primitives::U256;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::balance::BalanceSource;
use crate::cache::BalanceCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::keys::{KeyDeriver, KeySpace};
use crate::models::{HealthResponse, KeyResponse, PageResponse, PairResponse, StatsResponse};
use crate::page::PageAssembler;

/// Application state shared across all handlers.
///
/// Owns the page assembler and, through it, the process-wide balance cache.
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<PageAssembler>,
}

impl AppState {
    /// Creates a new AppState around an assembler.
    pub fn new(assembler: PageAssembler) -> Self {
        Self {
            assembler: Arc::new(assembler),
        }
    }

    /// Creates a new AppState over the secp256k1 key space.
    ///
    /// Initializes the balance cache with the configured freshness window.
    pub fn from_config(config: &Config, source: Arc<dyn BalanceSource>) -> Self {
        let cache = Arc::new(BalanceCache::new(source, config.cache_timeout));
        Self::new(PageAssembler::new(KeyDeriver::new(KeySpace::secp256k1()), cache))
    }

    fn space(&self) -> &KeySpace {
        self.assembler.space()
    }
}

// == Path Parsing ==
fn is_decimal(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a key path segment. Only plain decimal digits are accepted; a
/// number too large for 256 bits is reported as out of range.
pub fn parse_exponent(raw: &str, space: &KeySpace) -> Result<U256> {
    if !is_decimal(raw) {
        return Err(ApiError::InvalidKey);
    }
    raw.parse::<U256>()
        .map_err(|_| ApiError::OutOfRange(space.max_exponent() - U256::from(1u64)))
}

/// Parses a page path segment. Anything that is not a plain decimal number
/// means page 1; a number too large for 256 bits means the last page.
pub fn parse_page(raw: &str) -> U256 {
    if !is_decimal(raw) {
        return U256::from(1u64);
    }
    raw.parse::<U256>().unwrap_or(U256::MAX)
}

/// Handler for GET /key/:exponent
///
/// Derives one key and reports the balance of its uncompressed address.
pub async fn key_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<KeyResponse>> {
    let exponent = parse_exponent(&raw, state.space())?;
    let row = state.assembler.build_key(exponent).await?;

    Ok(Json(KeyResponse::from_row(row, state.space())))
}

/// Handler for GET /key/
pub async fn missing_key_handler() -> ApiError {
    ApiError::InvalidKey
}

/// Handler for GET /page/:page
///
/// Serves the requested page, clamped into the valid page range.
pub async fn page_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Json<PageResponse> {
    let page = state.assembler.build_page(parse_page(&raw)).await;
    Json(PageResponse::from_page(page, state.space()))
}

/// Handler for GET /page/
pub async fn first_page_handler(State(state): State<AppState>) -> Json<PageResponse> {
    let page = state.assembler.build_page(U256::from(1u64)).await;
    Json(PageResponse::from_page(page, state.space()))
}

/// Handler for GET /gen_pair
///
/// Returns the WIF and address of a uniformly drawn exponent. No balance
/// lookup is made.
pub async fn gen_pair_handler(State(state): State<AppState>) -> Result<Json<PairResponse>> {
    let exponent = state
        .space()
        .random_exponent(&mut rand::thread_rng())
        .ok_or(ApiError::KeyGeneration)?;
    let record = state.assembler.deriver().derive(exponent)?;

    Ok(Json(PairResponse::from(record)))
}

/// Handler for GET /stats
///
/// Returns current balance cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.assembler.cache();
    let stats = cache.stats().await;

    Json(StatsResponse::new(stats, cache.timeout_secs()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unknown routes
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
