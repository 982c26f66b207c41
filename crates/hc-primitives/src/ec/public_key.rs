//! secp256k1 public key.
//!
//! Supports compressed/uncompressed SEC1 serialization, Hash160, and
//! signature verification.

use k256::ecdsa::VerifyingKey;
use std::fmt;

use crate::ec::signature::Signature;
use crate::hash::blake_hash160;
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
pub const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
pub const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key.
///
/// The same point serializes to two different byte strings, and therefore
/// to two different Hash160 values. Callers must use the same form for the
/// unlocking script as was used to derive the paying address.
#[derive(Clone, Debug)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a SEC1-encoded public key (33-byte compressed or 65-byte uncompressed).
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes are not a valid point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey string is empty".to_string(),
            ));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes)?;
        Ok(PublicKey { inner: vk })
    }

    /// Parse a hex-encoded SEC1 public key.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize in compressed SEC1 format: 0x02/0x03 parity prefix then X.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize in uncompressed SEC1 format: 0x04 then X then Y.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize in the requested form.
    ///
    /// # Arguments
    /// * `compressed` - `true` for the 33-byte form, `false` for the 65-byte form.
    pub fn serialize(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            self.to_compressed().to_vec()
        } else {
            self.to_uncompressed().to_vec()
        }
    }

    /// Lowercase hex of the compressed form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// HC Hash160, RIPEMD-160(BLAKE-256), of the serialized key in the
    /// requested form. This is the hash an HC P2PKH address commits to.
    pub fn hash160(&self, compressed: bool) -> [u8; 20] {
        blake_hash160(&self.serialize(compressed))
    }

    /// Verify an ECDSA signature over a 32-byte digest.
    pub fn verify(&self, digest: &[u8; 32], sig: &Signature) -> bool {
        sig.verify(digest, self)
    }

    pub(crate) fn from_k256_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::PrivateKey;

    const COMPRESSED_EVEN: [u8; 33] = [
        0x02, 0xce, 0x0b, 0x14, 0xfb, 0x84, 0x2b, 0x1b, 0xa5, 0x49, 0xfd, 0xd6, 0x75, 0xc9,
        0x80, 0x75, 0xf1, 0x2e, 0x9c, 0x51, 0x0f, 0x8e, 0xf5, 0x2b, 0xd0, 0x21, 0xa9, 0xa1,
        0xf4, 0x80, 0x9d, 0x3b, 0x4d,
    ];

    const COMPRESSED_ODD: [u8; 33] = [
        0x03, 0x26, 0x89, 0xc7, 0xc2, 0xda, 0xb1, 0x33, 0x09, 0xfb, 0x14, 0x3e, 0x0e, 0x8f,
        0xe3, 0x96, 0x34, 0x25, 0x21, 0x88, 0x7e, 0x97, 0x66, 0x90, 0xb6, 0xb4, 0x7f, 0x5b,
        0x2a, 0x4b, 0x7d, 0x44, 0x8e,
    ];

    /// Valid and invalid SEC1 encodings.
    #[test]
    fn test_pub_keys() {
        let uncompressed_ok = hex::decode(
            "0411db93e1dcdb8a016b49840f8c53bc1eb68a382e97b1482ecad7b148a6909a5c\
             b2e0eaddfb84ccf9744464f82e160bfa9b8b64f9d4c03f999b8643f656b412a3",
        )
        .unwrap();
        let mut x_changed = uncompressed_ok.clone();
        x_changed[1] = 0x15;

        assert!(PublicKey::from_bytes(&uncompressed_ok).is_ok());
        assert!(PublicKey::from_bytes(&x_changed).is_err());
        assert!(PublicKey::from_bytes(&COMPRESSED_EVEN).is_ok());
        assert!(PublicKey::from_bytes(&COMPRESSED_ODD).is_ok());
        assert!(PublicKey::from_bytes(&[0x05]).is_err());
        assert!(PublicKey::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_public_key_is_equal() {
        let pk1 = PublicKey::from_bytes(&COMPRESSED_ODD).unwrap();
        let pk2 = PublicKey::from_bytes(&COMPRESSED_EVEN).unwrap();
        assert_eq!(pk1, pk1);
        assert_ne!(pk1, pk2);
    }

    #[test]
    fn test_compressed_round_trip() {
        let pk = PublicKey::from_bytes(&COMPRESSED_EVEN).unwrap();
        assert_eq!(pk.to_compressed(), COMPRESSED_EVEN);
    }

    /// Generator point G, the public key of scalar 1, in both forms.
    #[test]
    fn test_serialization_forms_for_generator() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let pk = PrivateKey::from_bytes(&one).unwrap().pub_key();

        assert_eq!(
            hex::encode(pk.serialize(true)),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(pk.serialize(false)),
            "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
        assert_eq!(pk.serialize(true).len(), COMPRESSED_LEN);
        assert_eq!(pk.serialize(false).len(), UNCOMPRESSED_LEN);
        assert_eq!(
            hex::encode(pk.hash160(true)),
            "e280cb6e66b96679aec288b1fbdbd4db08077a1b"
        );
        assert_eq!(
            hex::encode(pk.hash160(false)),
            "76a2e145da57d32c5a40f6406287c9248e0d5040"
        );
    }

    #[test]
    fn test_uncompressed_parses_back_to_same_point() {
        let pk = PublicKey::from_bytes(&COMPRESSED_ODD).unwrap();
        let reparsed = PublicKey::from_bytes(&pk.to_uncompressed()).unwrap();
        assert_eq!(pk, reparsed);
    }

    #[test]
    fn test_equality_ignores_parse_form() {
        let uncompressed = hex::decode(
            "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        )
        .unwrap();
        let compressed =
            hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                .unwrap();
        let a = PublicKey::from_bytes(&uncompressed).unwrap();
        let b = PublicKey::from_bytes(&compressed).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.clone(), b);
        assert_ne!(a.hash160(true), a.hash160(false));
    }

    #[test]
    fn test_display() {
        let pk = PublicKey::from_bytes(&COMPRESSED_EVEN).unwrap();
        assert_eq!(
            format!("{}", pk),
            "02ce0b14fb842b1ba549fdd675c98075f12e9c510f8ef52bd021a9a1f4809d3b4d"
        );
    }
}
