/// Error types for script operations.
///
/// Covers push-data encoding and decoding, P2PKH extraction and address
/// parsing.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Generic invalid script error.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// The address payload is not a 20-byte public key hash.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// The address version bytes match no known network.
    #[error("address not supported {0}")]
    UnsupportedAddress(String),

    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Script is empty when a non-empty script was expected.
    #[error("script is empty")]
    EmptyScript,

    /// Script is not a P2PKH script.
    #[error("not a P2PKH")]
    NotP2PKH,

    /// Not enough data in script to complete a push operation.
    #[error("not enough data")]
    DataTooSmall,

    /// Push data exceeds maximum allowed size.
    #[error("data too big")]
    DataTooBig,

    /// A push data part exceeds protocol limits.
    #[error("part too big '{0}'")]
    PartTooBig(usize),

    /// Error from the primitives crate (checksum, base58, key errors).
    #[error("primitives error: {0}")]
    Primitives(#[from] hc_primitives::PrimitivesError),
}
