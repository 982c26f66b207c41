//! secp256k1 private key.
//!
//! Wraps a k256 signing key and adds WIF encoding (through the checksummed
//! Base58 codec) and deterministic digest signing.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::base58::VersionedCodec;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Mainnet WIF prefix byte.
pub const MAINNET_WIF_PREFIX: u8 = 0x80;

/// Testnet WIF prefix byte.
pub const TESTNET_WIF_PREFIX: u8 = 0xef;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key for signing.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    ///
    /// Key generation is the only place this crate touches randomness;
    /// signing itself is deterministic.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid non-zero scalar below
    /// the curve order, or `InvalidPrivateKey` otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_bytes(bytes.into())
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a 64-character hexadecimal string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Decode a WIF (Wallet Import Format) string.
    ///
    /// # Returns
    /// The key together with its network prefix byte and whether the WIF
    /// marks the public key as compressed.
    pub fn from_wif(wif: &str) -> Result<(Self, u8, bool), PrimitivesError> {
        let (payload, version) = VersionedCodec::BASE58_CHECK.decode(wif).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => PrimitivesError::ChecksumMismatch,
            other => PrimitivesError::InvalidWif(other.to_string()),
        })?;
        let payload = Zeroizing::new(payload);

        let compressed = match payload.len() {
            33 if payload[32] == COMPRESS_MAGIC => true,
            33 => {
                return Err(PrimitivesError::InvalidWif(
                    "malformed private key: invalid compression flag".to_string(),
                ))
            }
            32 => false,
            n => {
                return Err(PrimitivesError::InvalidWif(format!(
                    "malformed private key: invalid length {}",
                    n
                )))
            }
        };

        let key = Self::from_bytes(&payload[..PRIVATE_KEY_BYTES_LEN])?;
        Ok((key, version[0], compressed))
    }

    /// Encode the key as WIF with the given network prefix.
    ///
    /// # Arguments
    /// * `prefix` - The network prefix byte ([`MAINNET_WIF_PREFIX`] or [`TESTNET_WIF_PREFIX`]).
    /// * `compressed` - Whether the key is used with compressed public keys.
    pub fn to_wif(&self, prefix: u8, compressed: bool) -> String {
        // The buffer holds the raw scalar; wipe it once encoded.
        let mut payload = Zeroizing::new(Vec::with_capacity(PRIVATE_KEY_BYTES_LEN + 1));
        payload.extend_from_slice(&Zeroizing::new(self.to_bytes())[..]);
        if compressed {
            payload.push(COMPRESS_MAGIC);
        }
        crate::base58::check_encode(&payload, prefix)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }

    /// Sign a 32-byte digest with RFC6979 deterministic nonces.
    ///
    /// Produces a low-S normalized signature. Signing the same digest with
    /// the same key always yields the same signature.
    ///
    /// # Returns
    /// `Ok(Signature)`, or `SigningFailure` if the primitive rejects the digest.
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Signature, PrimitivesError> {
        Signature::sign(digest, self)
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
