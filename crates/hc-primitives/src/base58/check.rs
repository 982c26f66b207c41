//! Version-tagged, checksummed Base58 framing.
//!
//! A frame is `version ‖ payload ‖ checksum`, where `version` is a fixed
//! number of bytes chosen by the codec and `checksum` is the leading
//! [`CHECKSUM_LEN`] bytes of a double hash over `version ‖ payload`.
//! The checksum function is part of the codec configuration and is not
//! recorded in the frame, so the decoder must be configured the same way
//! as the encoder.

use serde::{Deserialize, Serialize};

use crate::hash::{blake256d, sha256d};
use crate::PrimitivesError;

/// Number of checksum bytes carried at the end of every frame.
pub const CHECKSUM_LEN: usize = 4;

/// The double-hash used to protect a frame against corruption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumKind {
    /// SHA-256(SHA-256(data)), as used by Base58Check.
    Sha256Double,
    /// BLAKE-256(BLAKE-256(data)), as used by HC addresses.
    Blake256Double,
}

impl ChecksumKind {
    /// Compute the full-width double-hash digest of `data`.
    ///
    /// Both variants produce 32 bytes. The result is recomputed on every
    /// call.
    pub fn digest(self, data: &[u8]) -> [u8; 32] {
        match self {
            ChecksumKind::Sha256Double => sha256d(data),
            ChecksumKind::Blake256Double => blake256d(data),
        }
    }

    /// Compute the frame checksum: the leading [`CHECKSUM_LEN`] bytes of
    /// [`ChecksumKind::digest`].
    pub fn checksum(self, data: &[u8]) -> [u8; CHECKSUM_LEN] {
        let digest = self.digest(data);
        let mut out = [0u8; CHECKSUM_LEN];
        out.copy_from_slice(&digest[..CHECKSUM_LEN]);
        out
    }
}

/// A Base58 codec with a fixed-width version prefix and a trailing checksum.
///
/// One codec covers the single-byte, two-byte and N-byte version shapes;
/// encoding and decoding share the same width and checksum kind so the
/// two directions cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionedCodec {
    /// Width of the version prefix in bytes.
    pub version_len: usize,
    /// Double-hash used for the checksum.
    pub checksum: ChecksumKind,
}

impl VersionedCodec {
    /// Standard Base58Check: one version byte, SHA-256d checksum.
    pub const BASE58_CHECK: VersionedCodec = VersionedCodec::new(1, ChecksumKind::Sha256Double);

    /// Two version bytes with a SHA-256d checksum, for chains that need
    /// more than 256 payload classes.
    pub const MULTI_VERSION_SHA: VersionedCodec =
        VersionedCodec::new(2, ChecksumKind::Sha256Double);

    /// HC address encoding: two version bytes, BLAKE-256d checksum.
    pub const HC_ADDRESS: VersionedCodec = VersionedCodec::new(2, ChecksumKind::Blake256Double);

    /// Create a codec for `version_len`-byte versions and the given checksum.
    pub const fn new(version_len: usize, checksum: ChecksumKind) -> Self {
        VersionedCodec {
            version_len,
            checksum,
        }
    }

    /// Smallest valid frame: the version bytes plus the checksum.
    ///
    /// # Returns
    /// The length, or `None` if `version_len` is so large that the sum
    /// does not fit in a `usize`.
    pub const fn min_frame_len(&self) -> Option<usize> {
        self.version_len.checked_add(CHECKSUM_LEN)
    }

    /// Build the raw frame `version ‖ payload ‖ checksum` without Base58
    /// rendering, for embedding in other binary structures.
    ///
    /// # Arguments
    /// * `payload` - The body bytes (may be empty).
    /// * `version` - The version prefix; must be exactly `version_len` bytes.
    ///
    /// # Returns
    /// The framed bytes, or `InvalidFormat` if the version width is wrong.
    pub fn frame(&self, payload: &[u8], version: &[u8]) -> Result<Vec<u8>, PrimitivesError> {
        if version.len() != self.version_len {
            return Err(PrimitivesError::InvalidFormat(format!(
                "version must be {} bytes, got {}",
                self.version_len,
                version.len()
            )));
        }
        Ok(assemble(version, payload, self.checksum))
    }

    /// Encode `payload` under `version` as a Base58 string.
    pub fn encode(&self, payload: &[u8], version: &[u8]) -> Result<String, PrimitivesError> {
        let framed = self.frame(payload, version)?;
        tracing::trace!(
            version_len = self.version_len,
            frame_len = framed.len(),
            "encoding checksummed base58 frame"
        );
        Ok(super::encode(&framed))
    }

    /// Verify a raw frame and split it into `(payload, version)`.
    ///
    /// # Returns
    /// * `InvalidFormat` if the frame is shorter than [`Self::min_frame_len`].
    /// * `ChecksumMismatch` if the trailing checksum does not verify.
    pub fn unframe(&self, framed: &[u8]) -> Result<(Vec<u8>, Vec<u8>), PrimitivesError> {
        if !matches!(self.min_frame_len(), Some(min) if framed.len() >= min) {
            return Err(PrimitivesError::InvalidFormat(
                "version and/or checksum bytes missing".to_string(),
            ));
        }
        let (body, received) = framed.split_at(framed.len() - CHECKSUM_LEN);
        let expected = self.checksum.checksum(body);
        if !constant_time_eq(received, &expected) {
            return Err(PrimitivesError::ChecksumMismatch);
        }
        let (version, payload) = body.split_at(self.version_len);
        Ok((payload.to_vec(), version.to_vec()))
    }

    /// Decode a Base58 string produced by [`Self::encode`] into
    /// `(payload, version)`.
    pub fn decode(&self, s: &str) -> Result<(Vec<u8>, Vec<u8>), PrimitivesError> {
        let decoded = super::decode(s)?;
        self.unframe(&decoded)
    }
}

impl Default for VersionedCodec {
    fn default() -> Self {
        Self::BASE58_CHECK
    }
}

/// Encode `payload` with a single version byte and a SHA-256d checksum.
pub fn check_encode(payload: &[u8], version: u8) -> String {
    super::encode(&check_encode_bytes(payload, version))
}

/// Build the raw Base58Check frame `version ‖ payload ‖ checksum` as bytes.
pub fn check_encode_bytes(payload: &[u8], version: u8) -> Vec<u8> {
    assemble(&[version], payload, ChecksumKind::Sha256Double)
}

/// Encode `payload` with a multi-byte version prefix and a SHA-256d checksum.
///
/// The codec width is taken from `version` itself.
pub fn check_encode_versioned(payload: &[u8], version: &[u8]) -> String {
    super::encode(&assemble(version, payload, ChecksumKind::Sha256Double))
}

/// Decode a Base58Check string into `(payload, version)`.
pub fn check_decode(s: &str) -> Result<(Vec<u8>, u8), PrimitivesError> {
    let (payload, version) = VersionedCodec::BASE58_CHECK.decode(s)?;
    Ok((payload, version[0]))
}

/// Decode an HC address string (two version bytes, BLAKE-256d checksum)
/// into `(payload, version)`.
pub fn hc_check_decode(s: &str) -> Result<(Vec<u8>, [u8; 2]), PrimitivesError> {
    let (payload, version) = VersionedCodec::HC_ADDRESS.decode(s)?;
    Ok((payload, [version[0], version[1]]))
}

/// Lay out `version ‖ payload ‖ checksum(version ‖ payload)`.
fn assemble(version: &[u8], payload: &[u8], kind: ChecksumKind) -> Vec<u8> {
    let mut out = Vec::with_capacity(version.len() + payload.len() + CHECKSUM_LEN);
    out.extend_from_slice(version);
    out.extend_from_slice(payload);
    let checksum = kind.checksum(&out);
    out.extend_from_slice(&checksum);
    out
}

/// Compare two byte slices without branching on their contents.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replace the final character of a Base58 string with a different one.
    fn corrupt_last_char(s: &str) -> String {
        let mut out = s.to_string();
        let last = out.pop().unwrap();
        out.push(if last == '2' { '3' } else { '2' });
        out
    }

    #[test]
    fn test_single_byte_version_roundtrip() {
        let payload = [0x01, 0x02, 0x03, 0x04, 0x05];
        let encoded = check_encode(&payload, 0x00);
        assert!(encoded.starts_with('1'));

        let (decoded, version) = check_decode(&encoded).unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(decoded, payload);

        let corrupted = corrupt_last_char(&encoded);
        assert!(matches!(
            check_decode(&corrupted),
            Err(PrimitivesError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_codec_matches_free_functions() {
        let payload = hex::decode("f54a5851e9372b87810a8e60cdd2e7cfd80b6e31").unwrap();
        let via_codec = VersionedCodec::BASE58_CHECK.encode(&payload, &[0x00]).unwrap();
        assert_eq!(via_codec, check_encode(&payload, 0x00));
        assert_eq!(via_codec, "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs");
        assert_eq!(
            check_encode_bytes(&payload, 0x00),
            VersionedCodec::BASE58_CHECK.frame(&payload, &[0x00]).unwrap()
        );
    }

    #[test]
    fn test_two_byte_version_empty_payload() {
        let codec = VersionedCodec::MULTI_VERSION_SHA;
        let framed = codec.frame(&[], &[0x05, 0x96]).unwrap();
        assert_eq!(framed.len(), 2 + CHECKSUM_LEN);
        assert_eq!(&framed[..2], &[0x05, 0x96]);

        let encoded = codec.encode(&[], &[0x05, 0x96]).unwrap();
        assert_eq!(encoded, check_encode_versioned(&[], &[0x05, 0x96]));
        let (payload, version) = codec.decode(&encoded).unwrap();
        assert!(payload.is_empty());
        assert_eq!(version, vec![0x05, 0x96]);
    }

    #[test]
    fn test_hc_address_codec_roundtrip() {
        let pkh = [0x11u8; 20];
        let encoded = VersionedCodec::HC_ADDRESS.encode(&pkh, &[0x09, 0x7f]).unwrap();
        let (payload, version) = hc_check_decode(&encoded).unwrap();
        assert_eq!(payload, pkh);
        assert_eq!(version, [0x09, 0x7f]);
    }

    #[test]
    fn test_checksum_kind_is_a_decode_parameter() {
        let encoded = VersionedCodec::HC_ADDRESS.encode(b"payload", &[0x01, 0x02]).unwrap();
        assert!(matches!(
            VersionedCodec::MULTI_VERSION_SHA.decode(&encoded),
            Err(PrimitivesError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_short_input_is_invalid_format() {
        // Four bytes decode fine as base58 but cannot hold version + checksum.
        let short = crate::base58::encode(&[1, 2, 3, 4]);
        assert!(matches!(
            check_decode(&short),
            Err(PrimitivesError::InvalidFormat(_))
        ));
        assert!(matches!(
            check_decode(""),
            Err(PrimitivesError::InvalidFormat(_))
        ));

        let five = crate::base58::encode(&[1, 2, 3, 4, 5]);
        assert!(matches!(
            hc_check_decode(&five),
            Err(PrimitivesError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_minimum_frame_is_accepted() {
        let framed = VersionedCodec::BASE58_CHECK.frame(&[], &[0x42]).unwrap();
        assert_eq!(framed.len(), 5);
        let (payload, version) = VersionedCodec::BASE58_CHECK.unframe(&framed).unwrap();
        assert!(payload.is_empty());
        assert_eq!(version, vec![0x42]);
    }

    #[test]
    fn test_wrong_version_width_is_rejected() {
        assert!(matches!(
            VersionedCodec::HC_ADDRESS.encode(b"x", &[0x01]),
            Err(PrimitivesError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_character_is_reported_as_base58_error() {
        assert!(matches!(
            check_decode("1PMycacnJaSqwwJqjawXBErnLsZ7RkXUA0"),
            Err(PrimitivesError::InvalidBase58(_))
        ));
    }

    #[test]
    fn test_blake_digest_keeps_full_width() {
        let data = b"frame body";
        let digest = ChecksumKind::Blake256Double.digest(data);
        assert_eq!(digest, blake256d(data));
        assert_eq!(&ChecksumKind::Blake256Double.checksum(data)[..], &digest[..4]);
    }

    #[test]
    fn test_codec_config_serde() {
        let json = serde_json::to_string(&VersionedCodec::HC_ADDRESS).unwrap();
        assert_eq!(json, r#"{"version_len":2,"checksum":"blake256_double"}"#);
        let back: VersionedCodec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VersionedCodec::HC_ADDRESS);
    }

    #[test]
    fn test_oversized_version_len_from_config() {
        let codec: VersionedCodec = serde_json::from_str(
            r#"{"version_len":18446744073709551615,"checksum":"sha256_double"}"#,
        )
        .unwrap();
        assert_eq!(codec.min_frame_len(), None);
        assert!(matches!(
            codec.decode("111"),
            Err(PrimitivesError::InvalidFormat(_))
        ));
        assert!(matches!(
            codec.unframe(&[0u8; 16]),
            Err(PrimitivesError::InvalidFormat(_))
        ));
        assert!(matches!(
            codec.encode(b"x", &[0x00]),
            Err(PrimitivesError::InvalidFormat(_))
        ));
        assert_eq!(VersionedCodec::HC_ADDRESS.min_frame_len(), Some(6));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
        assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
        assert!(!constant_time_eq(&[1, 2], &[1, 2, 3]));
    }
}
