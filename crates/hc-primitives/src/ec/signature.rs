//! ECDSA signature with DER serialization and RFC6979 deterministic nonces.
//!
//! Every `Signature` value is held in low-S form (BIP-0062), so DER output
//! is canonical no matter how the value was obtained.

use k256::ecdsa;
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// An ECDSA signature over secp256k1 with R and S components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: ecdsa::Signature,
}

impl Signature {
    /// Create a signature from raw big-endian R and S values.
    ///
    /// S is normalized to the lower half of the curve order.
    ///
    /// # Returns
    /// `Ok(Signature)`, or `InvalidSignature` if either scalar is zero or
    /// not below the curve order.
    pub fn from_scalars(r: [u8; 32], s: [u8; 32]) -> Result<Self, PrimitivesError> {
        let sig = ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(r),
            k256::FieldBytes::from(s),
        )
        .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        Ok(Self::normalized(sig))
    }

    /// Parse a strict DER-encoded ECDSA signature.
    ///
    /// Expected format: 0x30 <len> 0x02 <r_len> <r> 0x02 <s_len> <s>
    ///
    /// # Arguments
    /// * `bytes` - DER-encoded signature bytes, without any hash-type suffix.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or `InvalidSignature` if the encoding is malformed.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: no header magic".to_string(),
            ));
        }
        let sig = ecdsa::Signature::from_der(bytes)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        Ok(Self::normalized(sig))
    }

    /// Serialize to DER: minimal-length integers, low S.
    pub fn to_der(&self) -> Vec<u8> {
        self.inner.to_der().as_bytes().to_vec()
    }

    /// The R component (32 bytes, big-endian).
    pub fn r(&self) -> [u8; 32] {
        let (r, _) = self.inner.split_bytes();
        let mut out = [0u8; 32];
        out.copy_from_slice(&r);
        out
    }

    /// The S component (32 bytes, big-endian).
    pub fn s(&self) -> [u8; 32] {
        let (_, s) = self.inner.split_bytes();
        let mut out = [0u8; 32];
        out.copy_from_slice(&s);
        out
    }

    /// Sign a 32-byte digest using RFC6979 deterministic nonces.
    ///
    /// No randomness is drawn, so the same key and digest always give the
    /// same signature.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte message digest to sign.
    /// * `priv_key` - The private key to sign with.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or `SigningFailure` if the primitive
    /// rejects the digest.
    pub fn sign(digest: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let sig: ecdsa::Signature = priv_key
            .signing_key()
            .sign_prehash(digest)
            .map_err(|e| PrimitivesError::SigningFailure(e.to_string()))?;
        Ok(Self::normalized(sig))
    }

    /// Verify this signature against a 32-byte digest and public key.
    pub fn verify(&self, digest: &[u8; 32], pub_key: &PublicKey) -> bool {
        pub_key
            .verifying_key()
            .verify_prehash(digest, &self.inner)
            .is_ok()
    }

    fn normalized(sig: ecdsa::Signature) -> Self {
        Signature {
            inner: sig.normalize_s().unwrap_or(sig),
        }
    }
}
