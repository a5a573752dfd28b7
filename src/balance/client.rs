//! HTTP client for a blockchain.info style balance service.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::balance::BalanceSource;
use crate::error::BalanceError;

/// Per-address entry of the `/balance` response
#[derive(Debug, Clone, Deserialize)]
struct AddressBalance {
    final_balance: u64,
}

/// Queries `GET {base_url}/balance?active=<address>`.
#[derive(Debug, Clone)]
pub struct BlockchainInfoClient {
    client: reqwest::Client,
    base_url: String,
}

impl BlockchainInfoClient {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BalanceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BalanceSource for BlockchainInfoClient {
    async fn fetch_satoshis(&self, address: &str) -> Result<u64, BalanceError> {
        let url = format!("{}/balance", self.base_url);
        debug!("Fetching balance for {}", address);

        let response = self
            .client
            .get(&url)
            .query(&[("active", address)])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(BalanceError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let balances: HashMap<String, AddressBalance> = serde_json::from_str(&body)
            .map_err(|e| BalanceError::Malformed(e.to_string()))?;

        balances
            .get(address)
            .map(|entry| entry.final_balance)
            .ok_or_else(|| BalanceError::Malformed(format!("no entry for {}", address)))
    }
}
