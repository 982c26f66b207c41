use proptest::prelude::*;

use hc_primitives::base58::{self, ChecksumKind, VersionedCodec};
use hc_primitives::ec::private_key::{PrivateKey, MAINNET_WIF_PREFIX};
use hc_primitives::hash::sha256;
use hc_primitives::PrimitivesError;

fn checksum_kind() -> impl Strategy<Value = ChecksumKind> {
    prop_oneof![
        Just(ChecksumKind::Sha256Double),
        Just(ChecksumKind::Blake256Double),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn codec_roundtrip_any_version_width(
        kind in checksum_kind(),
        version in prop::collection::vec(any::<u8>(), 1..5),
        payload in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let codec = VersionedCodec::new(version.len(), kind);
        let encoded = codec.encode(&payload, &version).unwrap();
        let (got_payload, got_version) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(got_payload, payload);
        prop_assert_eq!(got_version, version);
    }

    #[test]
    fn single_bit_flip_is_detected(
        kind in checksum_kind(),
        payload in prop::collection::vec(any::<u8>(), 0..48),
        bit in any::<prop::sample::Index>(),
    ) {
        let codec = VersionedCodec::new(2, kind);
        let mut framed = codec.frame(&payload, &[0x0f, 0x21]).unwrap();
        let bit = bit.index(framed.len() * 8);
        framed[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(matches!(
            codec.unframe(&framed),
            Err(PrimitivesError::ChecksumMismatch)
        ));
    }

    #[test]
    fn short_frames_never_panic(
        kind in checksum_kind(),
        version_len in 1usize..4,
        bytes in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let codec = VersionedCodec::new(version_len, kind);
        let text = base58::encode(&bytes);
        match codec.decode(&text) {
            Ok((payload, version)) => {
                prop_assert_eq!(version.len(), version_len);
                prop_assert_eq!(payload.len() + version_len + 4, bytes.len());
            }
            Err(PrimitivesError::InvalidFormat(_)) => {
                prop_assert!(bytes.len() < version_len + 4);
            }
            Err(PrimitivesError::ChecksumMismatch) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn base58_preserves_leading_zeros(
        zeros in 0usize..6,
        rest in prop::collection::vec(1u8..=255, 0..16),
    ) {
        let mut data = vec![0u8; zeros];
        data.extend_from_slice(&rest);
        let encoded = base58::encode(&data);
        prop_assert!(encoded.starts_with(&"1".repeat(zeros)));
        prop_assert_eq!(base58::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn ecdsa_sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        // Not every 32-byte string is a valid scalar.
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let digest = sha256(&msg);
            let sig = pk.sign(&digest).unwrap();
            prop_assert!(pk.pub_key().verify(&digest, &sig));
            prop_assert_eq!(sig.to_der(), pk.sign(&digest).unwrap().to_der());
        }
    }

    #[test]
    fn wif_roundtrip(seed in prop::array::uniform32(any::<u8>()), compressed in any::<bool>()) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let wif = pk.to_wif(MAINNET_WIF_PREFIX, compressed);
            let (back, prefix, flag) = PrivateKey::from_wif(&wif).unwrap();
            prop_assert_eq!(back.to_hex(), pk.to_hex());
            prop_assert_eq!(prefix, MAINNET_WIF_PREFIX);
            prop_assert_eq!(flag, compressed);
        }
    }
}
