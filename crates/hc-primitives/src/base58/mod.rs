//! Base58 encoding and decoding with optional checksum framing.
//!
//! The raw codec here carries no checksum logic. Checksummed,
//! version-tagged framing lives in [`check`], layered on top of it.

pub mod check;

pub use check::{
    check_decode, check_encode, check_encode_bytes, check_encode_versioned, hc_check_decode,
    ChecksumKind, VersionedCodec, CHECKSUM_LEN,
};

use crate::PrimitivesError;

/// Encode a byte slice to a Base58 string.
///
/// Uses Bitcoin's modified Base58 alphabet (no 0, O, I, l). Leading zero
/// bytes are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_empty_string() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base58_single_zero_byte() {
        assert_eq!(encode(&[0x00]), "1");
        assert_eq!(decode("1").unwrap(), vec![0x00]);
    }

    #[test]
    fn test_base58_decoded_address() {
        let input = hex::decode("00010966776006953D5567439E5E39F86A0D273BEED61967F6").unwrap();
        assert_eq!(encode(&input), "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        assert_eq!(decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM").unwrap(), input);
    }

    #[test]
    fn test_base58_decoded_hash() {
        let input = hex::decode("0123456789ABCDEF").unwrap();
        assert_eq!(encode(&input), "C3CPq7c8PY");
        assert_eq!(decode("C3CPq7c8PY").unwrap(), input);
    }

    #[test]
    fn test_base58_leading_zeros() {
        let input = hex::decode("000000287FB4CD").unwrap();
        assert_eq!(encode(&input), "111233QC4");
        assert_eq!(decode("111233QC4").unwrap(), input);
    }

    #[test]
    fn test_base58_all_zeros() {
        assert_eq!(encode(&[0, 0, 0, 0]), "1111");
        assert_eq!(decode("1111").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_base58_decode_invalid_character() {
        assert!(matches!(
            decode("invalid!@#$%"),
            Err(PrimitivesError::InvalidBase58(_))
        ));
        // '0', 'O', 'I' and 'l' are not part of the alphabet.
        assert!(decode("0OIl").is_err());
    }
}
