//! Page Assembler Module
//!
//! Composes the key space, deriver, and balance cache into displayable pages.

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::debug;

use crate::cache::BalanceCache;
use crate::error::KeyError;
use crate::keys::{KeyDeriver, KeyRecord, KeySpace};

// == Key Row ==
/// A derived key paired with the balance of its uncompressed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    pub record: KeyRecord,
    pub balance: String,
}

// == Page ==
/// One assembled page of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page number after clamping
    pub number: U256,
    pub max_pages: U256,
    /// Rows in ascending exponent order; underivable exponents are absent
    pub rows: Vec<KeyRow>,
}

// == Page Assembler ==
/// Builds pages and single-key views.
#[derive(Debug)]
pub struct PageAssembler {
    deriver: KeyDeriver,
    cache: Arc<BalanceCache>,
}

impl PageAssembler {
    pub fn new(deriver: KeyDeriver, cache: Arc<BalanceCache>) -> Self {
        Self { deriver, cache }
    }

    pub fn space(&self) -> &KeySpace {
        self.deriver.space()
    }

    pub fn deriver(&self) -> &KeyDeriver {
        &self.deriver
    }

    pub fn cache(&self) -> &Arc<BalanceCache> {
        &self.cache
    }

    // == Build Page ==
    /// Assembles page `page`, clamped into `[1, max_pages]`.
    ///
    /// Balances are looked up one row at a time, in order.
    pub async fn build_page(&self, page: U256) -> Page {
        let space = self.space();
        let number = space.clamp_page(page);
        let mut rows = Vec::new();

        for exponent in space.page_range(number) {
            // errors are already logged by the deriver
            let Ok(record) = self.deriver.derive(exponent) else {
                continue;
            };
            let balance = self.cache.get_balance(&record.address).await;
            rows.push(KeyRow { record, balance });
        }

        debug!("Assembled page {} with {} rows", number, rows.len());

        Page {
            number,
            max_pages: space.max_pages(),
            rows,
        }
    }

    // == Build Key ==
    /// Derives a single exponent and attaches its balance.
    pub async fn build_key(&self, exponent: U256) -> Result<KeyRow, KeyError> {
        let record = self.deriver.derive(exponent)?;
        let balance = self.cache.get_balance(&record.address).await;
        Ok(KeyRow { record, balance })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::ZERO_BALANCE;
    use crate::cache::testing::ScriptedSource;
    use crate::keys::MAX_EXPONENT;

    fn assembler(space: KeySpace, satoshis: u64) -> (PageAssembler, Arc<ScriptedSource>) {
        let source = ScriptedSource::always(satoshis);
        let cache = Arc::new(BalanceCache::new(source.clone(), 300));
        (PageAssembler::new(KeyDeriver::new(space), cache), source)
    }

    fn u(n: u64) -> U256 {
        U256::from(n)
    }

    #[tokio::test]
    async fn test_first_page_has_full_width() {
        let (assembler, source) = assembler(KeySpace::secp256k1(), 0);
        let page = assembler.build_page(u(1)).await;

        assert_eq!(page.number, u(1));
        assert_eq!(page.max_pages, KeySpace::secp256k1().max_pages());
        assert_eq!(page.rows.len(), 128);
        assert_eq!(page.rows[0].record.address, "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
        assert_eq!(page.rows[127].record.exponent, u(128));
        assert_eq!(source.calls(), 128);
    }

    #[tokio::test]
    async fn test_page_zero_clamps_to_one() {
        let (assembler, _) = assembler(KeySpace::new(u(20), 4), 1);
        let page = assembler.build_page(U256::ZERO).await;

        assert_eq!(page.number, u(1));
        assert_eq!(page.rows.first().unwrap().record.exponent, u(1));
        assert_eq!(page.rows[0].balance, "0.00000001");
    }

    #[tokio::test]
    async fn test_page_beyond_end_clamps_to_last() {
        // 20 exponents in windows of 5: pages 1..=4
        let (assembler, _) = assembler(KeySpace::new(u(20), 4), 1);
        let page = assembler.build_page(u(99)).await;

        assert_eq!(page.number, u(4));
        assert_eq!(page.max_pages, u(4));
        let exponents: Vec<U256> = page.rows.iter().map(|row| row.record.exponent).collect();
        // 20 itself is the upper bound and is skipped
        assert_eq!(exponents, vec![u(16), u(17), u(18), u(19)]);
    }

    #[tokio::test]
    async fn test_last_secp256k1_page_skips_curve_order() {
        let (assembler, _) = assembler(KeySpace::secp256k1(), 0);
        let page = assembler.build_page(U256::MAX).await;

        assert_eq!(page.rows.len(), 64);
        assert_eq!(
            page.rows.last().unwrap().record.exponent,
            MAX_EXPONENT - u(1)
        );
    }

    #[tokio::test]
    async fn test_failed_balances_degrade_to_zero() {
        let source = ScriptedSource::failing();
        let cache = Arc::new(BalanceCache::new(source.clone(), 300));
        let assembler = PageAssembler::new(KeyDeriver::new(KeySpace::new(u(4), 7)), cache);

        let page = assembler.build_page(u(1)).await;
        assert_eq!(page.rows.len(), 3);
        assert!(page.rows.iter().all(|row| row.balance == ZERO_BALANCE));
        assert!(assembler.cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_build_key() {
        let (assembler, source) = assembler(KeySpace::secp256k1(), 250_000_000);
        let row = assembler.build_key(u(1)).await.unwrap();

        assert_eq!(row.balance, "2.50000000");
        assert_eq!(row.record.compressed_address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_build_key_out_of_range_skips_lookup() {
        let (assembler, source) = assembler(KeySpace::secp256k1(), 1);

        let result = assembler.build_key(MAX_EXPONENT).await;
        assert_eq!(result, Err(KeyError::OutOfRange(MAX_EXPONENT)));
        assert_eq!(source.calls(), 0);
    }
}
