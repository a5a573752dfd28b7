//! Key Space Module
//!
//! Page arithmetic over the totally ordered exponent space.

use alloy_primitives::U256;
use rand::RngCore;

use crate::keys::{KEYS_PER_PAGE, MAX_EXPONENT};

const ONE: U256 = U256::from_limbs([1, 0, 0, 0]);

// == Key Space ==
/// A fixed exponent space `[1, max_exponent)` cut into pages of
/// `keys_per_page + 1` exponents.
///
/// Pages cover `[1, max_exponent]` inclusive, so the final page carries the
/// upper bound itself even though it is not a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpace {
    max_exponent: U256,
    keys_per_page: u64,
}

impl KeySpace {
    // == Constructor ==
    /// Creates a key space with the given bound and page width.
    pub const fn new(max_exponent: U256, keys_per_page: u64) -> Self {
        Self {
            max_exponent,
            keys_per_page,
        }
    }

    /// The production space: every secp256k1 scalar, 128 per page.
    pub const fn secp256k1() -> Self {
        Self::new(MAX_EXPONENT, KEYS_PER_PAGE)
    }

    pub fn max_exponent(&self) -> U256 {
        self.max_exponent
    }

    /// Number of exponents in one full page.
    pub fn page_width(&self) -> U256 {
        U256::from(self.keys_per_page) + ONE
    }

    // == Contains ==
    /// True for `1 <= exponent < max_exponent`.
    pub fn contains(&self, exponent: &U256) -> bool {
        !exponent.is_zero() && *exponent < self.max_exponent
    }

    // == Max Pages ==
    /// Smallest number of pages that covers `[1, max_exponent]`.
    pub fn max_pages(&self) -> U256 {
        let width = self.page_width();
        let whole = self.max_exponent / width;
        if (self.max_exponent % width).is_zero() {
            whole
        } else {
            whole + ONE
        }
    }

    // == Clamp Page ==
    /// Clamps a requested page number into `[1, max_pages]`.
    pub fn clamp_page(&self, page: U256) -> U256 {
        let last = self.max_pages().max(ONE);
        page.clamp(ONE, last)
    }

    // == Page Range ==
    /// Inclusive exponent range of a page. Out-of-range page numbers are
    /// clamped first, so this never fails.
    pub fn page_range(&self, page: U256) -> ExponentRange {
        let page = self.clamp_page(page);
        let start = (page - ONE) * self.page_width() + ONE;
        let end = (start + U256::from(self.keys_per_page)).min(self.max_exponent);
        ExponentRange::new(start, end)
    }

    // == Page Of ==
    /// Page number on which `exponent` is listed.
    pub fn page_of(&self, exponent: &U256) -> U256 {
        if exponent.is_zero() {
            return ONE;
        }
        self.clamp_page((*exponent - ONE) / self.page_width() + ONE)
    }

    // == Random Exponent ==
    /// Draws a valid exponent, or None when the space has no valid keys.
    pub fn random_exponent<R: RngCore + ?Sized>(&self, rng: &mut R) -> Option<U256> {
        if self.max_exponent <= ONE {
            return None;
        }
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let sample = U256::from_be_bytes(bytes);
        Some(sample % (self.max_exponent - ONE) + ONE)
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::secp256k1()
    }
}

// == Exponent Range ==
/// Ascending inclusive run of exponents. Empty when `start > end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExponentRange {
    start: U256,
    end: U256,
    next: Option<U256>,
}

impl ExponentRange {
    pub fn new(start: U256, end: U256) -> Self {
        let next = (start <= end).then_some(start);
        Self { start, end, next }
    }

    pub fn start(&self) -> U256 {
        self.start
    }

    pub fn end(&self) -> U256 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Total number of exponents in the range, independent of iteration.
    pub fn len(&self) -> U256 {
        if self.is_empty() {
            U256::ZERO
        } else {
            self.end - self.start + ONE
        }
    }
}

impl Iterator for ExponentRange {
    type Item = U256;

    fn next(&mut self) -> Option<U256> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current + ONE);
        Some(current)
    }
}
