//! Bitcoin mainnet encodings for derived keys.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Version byte of a mainnet P2PKH address
const P2PKH_VERSION: u8 = 0x00;

/// Version byte of a mainnet WIF private key
const WIF_VERSION: u8 = 0x80;

/// Suffix marking a WIF key whose public key is compressed
const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// Hash160 = RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripemd = Ripemd160::digest(sha);
    let mut result = [0u8; 20];
    result.copy_from_slice(&ripemd);
    result
}

/// Base58 with a 4-byte double-SHA256 checksum appended.
pub fn base58check(payload: &[u8]) -> String {
    let checksum = Sha256::digest(Sha256::digest(payload));
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Pay-to-pubkey-hash address for a serialized public key (33 or 65 bytes).
pub fn p2pkh_address(public_key: &[u8]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = P2PKH_VERSION;
    payload[1..].copy_from_slice(&hash160(public_key));
    base58check(&payload)
}

/// Wallet Import Format for a raw secret.
pub fn wif(secret: &[u8; 32], compressed: bool) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(WIF_VERSION);
    payload.extend_from_slice(secret);
    if compressed {
        payload.push(WIF_COMPRESSED_FLAG);
    }
    base58check(&payload)
}
