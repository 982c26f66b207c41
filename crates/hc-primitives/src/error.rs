/// Unified error type for all primitives operations.
///
/// Covers errors from hashing, EC operations, checksummed encoding, and key handling.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("signing failed: {0}")]
    SigningFailure(String),

    #[error("invalid WIF format: {0}")]
    InvalidWif(String),

    /// The decoded frame is too short to hold the version and checksum bytes,
    /// or a version of the wrong width was supplied.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}

impl From<k256::ecdsa::Error> for PrimitivesError {
    fn from(e: k256::ecdsa::Error) -> Self {
        PrimitivesError::InvalidPublicKey(e.to_string())
    }
}
