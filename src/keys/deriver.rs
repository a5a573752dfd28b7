//! Key Deriver Module
//!
//! Maps an exponent to its uncompressed and compressed key material.

use alloy_primitives::U256;
use secp256k1::{PublicKey, Secp256k1, SecretKey, Signing, SignOnly};
use tracing::{debug, warn};

use crate::error::KeyError;
use crate::keys::encoding::{p2pkh_address, wif};
use crate::keys::KeySpace;

// == Compression ==
/// How the public key is serialized for addresses and flagged in WIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// 65-byte SEC1 public key
    Uncompressed,
    /// 33-byte SEC1 public key
    Compressed,
}

// == Private Key ==
/// An immutable private key bound to one compression mode.
///
/// The same exponent yields two distinct `PrivateKey` values, one per mode,
/// because both the address and the WIF depend on it.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    secret: SecretKey,
    public: PublicKey,
    compression: Compression,
}

impl PrivateKey {
    /// Builds the key for `exponent`. Fails for zero and anything at or above
    /// the curve order.
    pub fn from_exponent<C: Signing>(
        secp: &Secp256k1<C>,
        exponent: U256,
        compression: Compression,
    ) -> Result<Self, secp256k1::Error> {
        let secret = SecretKey::from_slice(&exponent.to_be_bytes::<32>())?;
        let public = PublicKey::from_secret_key(secp, &secret);
        Ok(Self {
            secret,
            public,
            compression,
        })
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// SEC1 serialization of the public key in this key's mode.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        match self.compression {
            Compression::Uncompressed => self.public.serialize_uncompressed().to_vec(),
            Compression::Compressed => self.public.serialize().to_vec(),
        }
    }

    /// Mainnet P2PKH address.
    pub fn address(&self) -> String {
        p2pkh_address(&self.public_key_bytes())
    }

    /// Wallet Import Format encoding.
    pub fn wif(&self) -> String {
        wif(
            &self.secret.secret_bytes(),
            self.compression == Compression::Compressed,
        )
    }
}

// == Key Record ==
/// Everything displayed for one exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub exponent: U256,
    /// Uncompressed WIF
    pub wif: String,
    /// Uncompressed P2PKH address
    pub address: String,
    pub compressed_address: String,
}

// == Key Deriver ==
/// Derives key records for exponents inside a key space.
#[derive(Debug, Clone)]
pub struct KeyDeriver {
    secp: Secp256k1<SignOnly>,
    space: KeySpace,
}

impl KeyDeriver {
    pub fn new(space: KeySpace) -> Self {
        Self {
            secp: Secp256k1::signing_only(),
            space,
        }
    }

    pub fn space(&self) -> &KeySpace {
        &self.space
    }

    // == Derive ==
    /// Derives the record for `exponent`.
    ///
    /// Out-of-range exponents and crypto failures are returned as errors and
    /// logged; callers rendering a page skip them.
    pub fn derive(&self, exponent: U256) -> Result<KeyRecord, KeyError> {
        if !self.space.contains(&exponent) {
            debug!("Exponent {} outside key space", exponent);
            return Err(KeyError::OutOfRange(exponent));
        }

        self.derive_pair(exponent).map_err(|err| {
            warn!("Error processing exponent {}: {}", exponent, err);
            KeyError::Derivation {
                exponent,
                reason: err.to_string(),
            }
        })
    }

    fn derive_pair(&self, exponent: U256) -> Result<KeyRecord, secp256k1::Error> {
        let uncompressed =
            PrivateKey::from_exponent(&self.secp, exponent, Compression::Uncompressed)?;
        let compressed =
            PrivateKey::from_exponent(&self.secp, exponent, Compression::Compressed)?;

        Ok(KeyRecord {
            exponent,
            wif: uncompressed.wif(),
            address: uncompressed.address(),
            compressed_address: compressed.address(),
        })
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new(KeySpace::secp256k1())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::MAX_EXPONENT;

    #[test]
    fn test_derive_exponent_one_golden_vector() {
        let record = KeyDeriver::default().derive(U256::from(1u64)).unwrap();

        assert_eq!(record.exponent, U256::from(1u64));
        assert_eq!(record.address, "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
        assert_eq!(record.compressed_address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(record.wif, "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let deriver = KeyDeriver::default();
        let exponent = U256::from(0xC0FF_EEu64);

        let first = deriver.derive(exponent).unwrap();
        let second = KeyDeriver::default().derive(exponent).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_last_valid_exponent() {
        let record = KeyDeriver::default()
            .derive(MAX_EXPONENT - U256::from(1u64))
            .unwrap();
        assert!(record.address.starts_with('1'));
        assert_ne!(record.address, record.compressed_address);
    }

    #[test]
    fn test_derive_zero_is_out_of_range() {
        let result = KeyDeriver::default().derive(U256::ZERO);
        assert_eq!(result, Err(KeyError::OutOfRange(U256::ZERO)));
    }

    #[test]
    fn test_derive_max_exponent_is_out_of_range() {
        let result = KeyDeriver::default().derive(MAX_EXPONENT);
        assert!(matches!(result, Err(KeyError::OutOfRange(_))));
        let result = KeyDeriver::default().derive(U256::MAX);
        assert!(matches!(result, Err(KeyError::OutOfRange(_))));
    }

    #[test]
    fn test_crypto_rejection_becomes_derivation_error() {
        // a space wider than the curve lets the curve order through validation
        let deriver = KeyDeriver::new(KeySpace::new(U256::MAX, 127));
        let result = deriver.derive(MAX_EXPONENT);
        assert!(matches!(result, Err(KeyError::Derivation { .. })));
    }

    #[test]
    fn test_private_key_modes_differ() {
        let secp = Secp256k1::signing_only();
        let exponent = U256::from(2u64);
        let plain = PrivateKey::from_exponent(&secp, exponent, Compression::Uncompressed).unwrap();
        let packed = PrivateKey::from_exponent(&secp, exponent, Compression::Compressed).unwrap();

        assert_eq!(plain.public_key_bytes().len(), 65);
        assert_eq!(packed.public_key_bytes().len(), 33);
        assert!(plain.wif().starts_with('5'));
        assert!(packed.wif().starts_with('K') || packed.wif().starts_with('L'));
        assert_eq!(packed.compression(), Compression::Compressed);
    }
}
