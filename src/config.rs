//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CACHE_TIMEOUT;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_BALANCE_API_URL: &str = "https://blockchain.info";
const DEFAULT_BALANCE_TIMEOUT: u64 = 5;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Seconds a fetched balance stays fresh
    pub cache_timeout: u64,
    /// Base URL of the balance service
    pub balance_api_url: String,
    /// Per-request timeout for balance lookups, in seconds
    pub balance_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TIMEOUT` - Balance freshness window in seconds (default: 300)
    /// - `BALANCE_API_URL` - Balance service base URL (default: https://blockchain.info)
    /// - `BALANCE_TIMEOUT` - Balance request timeout in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT),
            cache_timeout: parse_var("CACHE_TIMEOUT", CACHE_TIMEOUT),
            balance_api_url: env::var("BALANCE_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BALANCE_API_URL.to_string()),
            balance_timeout: parse_var("BALANCE_TIMEOUT", DEFAULT_BALANCE_TIMEOUT),
        }
    }

    /// Balance request timeout as a Duration
    pub fn balance_timeout(&self) -> Duration {
        Duration::from_secs(self.balance_timeout)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            cache_timeout: CACHE_TIMEOUT,
            balance_api_url: DEFAULT_BALANCE_API_URL.to_string(),
            balance_timeout: DEFAULT_BALANCE_TIMEOUT,
        }
    }
}
