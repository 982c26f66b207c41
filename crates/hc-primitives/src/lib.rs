/// HC SDK - Cryptographic primitives, hashing, and checksummed encoding.
///
/// This crate provides the foundational building blocks for the HC SDK:
/// - Hash functions (SHA-256, SHA-256d, BLAKE-256, BLAKE-256d, RIPEMD-160, BLAKE Hash160)
/// - Base58 encoding/decoding and version-tagged checksum framing
/// - Elliptic curve cryptography (secp256k1 keys and deterministic ECDSA)
/// - Variable-length integer encoding and a little-endian byte writer

pub mod hash;
pub mod util;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
