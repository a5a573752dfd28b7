//! Keys Module
//!
//! The ordered secp256k1 key space, its pagination, and exponent to
//! address/WIF derivation.

mod deriver;
mod encoding;
mod space;


use alloy_primitives::U256;

// Re-export public types
pub use deriver::{Compression, KeyDeriver, KeyRecord, PrivateKey};
pub use encoding::{base58check, hash160, p2pkh_address, wif};
pub use space::{ExponentRange, KeySpace};

// == Public Constants ==
/// Order of the secp256k1 base point. Valid exponents are `[1, MAX_EXPONENT)`.
pub const MAX_EXPONENT: U256 = U256::from_limbs([
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// A page holds `KEYS_PER_PAGE + 1` exponents.
pub const KEYS_PER_PAGE: u64 = 127;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_exponent_is_curve_order() {
        assert_eq!(
            MAX_EXPONENT.to_string(),
            "115792089237316195423570985008687907852837564279074904382605163141518161494337"
        );
    }
}
