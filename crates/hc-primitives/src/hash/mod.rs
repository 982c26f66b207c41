//! Hash function primitives for the HC SDK.
//!
//! Provides SHA-256, double SHA-256, BLAKE-256, double BLAKE-256,
//! RIPEMD-160 and the BLAKE-based Hash160. Every function is a
//! single-call digest with no internal state carried between calls.

use blake_hash::Blake256;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 (SHA-256d) hash of the input data.
///
/// Computes SHA-256(SHA-256(data)). Used for transaction IDs, signature
/// hashes and the Base58Check checksum.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute BLAKE-256 (the 14-round SHA-3 finalist, not BLAKE2) of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte BLAKE-256 digest.
pub fn blake256(data: &[u8]) -> [u8; 32] {
    let result = <Blake256 as blake_hash::Digest>::digest(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute double BLAKE-256: BLAKE-256(BLAKE-256(data)).
///
/// Used by HC addresses as their checksum function.
pub fn blake256d(data: &[u8]) -> [u8; 32] {
    blake256(&blake256(data))
}

/// Compute RIPEMD-160 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

/// Compute the HC Hash160: RIPEMD-160(BLAKE-256(data)).
///
/// HC P2PKH addresses commit to this hash of the serialized public key.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte digest.
pub fn blake_hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&blake256(data))
}
