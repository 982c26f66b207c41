//! HC pay-to-public-key-hash addresses.
//!
//! An address is the 20-byte RIPEMD-160(BLAKE-256) hash of a public key framed with a
//! two-byte network version and a BLAKE-256d checksum, rendered in Base58.

use std::fmt;

use hc_primitives::base58::VersionedCodec;
use hc_primitives::ec::PublicKey;
use hc_primitives::hash::blake_hash160;
use serde::{Deserialize, Serialize};

use crate::ScriptError;

/// Mainnet P2PKH version bytes (addresses start with "Hs").
const MAINNET_P2PKH: [u8; 2] = [0x09, 0x7f];
/// Testnet P2PKH version bytes (addresses start with "Ts").
const TESTNET_P2PKH: [u8; 2] = [0x0f, 0x21];

/// Network an address belongs to, selecting its version bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Version prefix for P2PKH addresses on this network.
    pub const fn p2pkh_version(self) -> [u8; 2] {
        match self {
            Network::Mainnet => MAINNET_P2PKH,
            Network::Testnet => TESTNET_P2PKH,
        }
    }

    /// Checksummed codec used for addresses on this network.
    pub const fn codec(self) -> VersionedCodec {
        VersionedCodec::HC_ADDRESS
    }

    /// Look up the network owning a P2PKH version prefix.
    pub fn from_p2pkh_version(version: &[u8]) -> Option<Self> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find(|n| n.p2pkh_version() == version)
    }
}

/// An HC P2PKH address.
///
/// Contains the 20-byte public key hash and the network it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The human-readable Base58 address string.
    pub address_string: String,
    /// The 20-byte RIPEMD-160(BLAKE-256(pubkey)) hash.
    pub public_key_hash: [u8; 20],
    /// The network this address belongs to.
    pub network: Network,
}

impl Address {
    /// Parse an address string.
    ///
    /// Verifies the BLAKE-256d checksum and detects the network from the
    /// version prefix.
    ///
    /// # Returns
    /// The address, or:
    /// * `Primitives(InvalidBase58 | InvalidFormat | ChecksumMismatch)` if the frame is bad,
    /// * `InvalidAddressLength` if the payload is not 20 bytes,
    /// * `UnsupportedAddress` if the version is not a known P2PKH prefix.
    pub fn from_string(addr: &str) -> Result<Self, ScriptError> {
        let (payload, version) = VersionedCodec::HC_ADDRESS.decode(addr)?;

        let public_key_hash: [u8; 20] = payload
            .as_slice()
            .try_into()
            .map_err(|_| ScriptError::InvalidAddressLength(addr.to_string()))?;

        let network = Network::from_p2pkh_version(&version)
            .ok_or_else(|| ScriptError::UnsupportedAddress(addr.to_string()))?;

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash,
            network,
        })
    }

    /// Create an address from a 20-byte public key hash.
    ///
    /// # Arguments
    /// * `hash` - The 20-byte BLAKE-based Hash160 of the public key.
    /// * `network` - The target network.
    pub fn from_public_key_hash(hash: &[u8; 20], network: Network) -> Result<Self, ScriptError> {
        let address_string = network.codec().encode(hash, &network.p2pkh_version())?;
        Ok(Address {
            address_string,
            public_key_hash: *hash,
            network,
        })
    }

    /// Create an address for a public key in the given serialization form.
    ///
    /// The compressed and uncompressed forms of one key yield different
    /// addresses; spend with the form used here.
    pub fn from_public_key(
        pub_key: &PublicKey,
        compressed: bool,
        network: Network,
    ) -> Result<Self, ScriptError> {
        Self::from_public_key_hash(&pub_key.hash160(compressed), network)
    }

    /// Create an address from a hex-encoded serialized public key.
    ///
    /// The bytes are hashed as given, so the serialization form of the hex
    /// decides which address results.
    pub fn from_public_key_string(pub_key_hex: &str, network: Network) -> Result<Self, ScriptError> {
        let pub_key_bytes = hex::decode(pub_key_hex)?;
        Self::from_public_key_hash(&blake_hash160(&pub_key_bytes), network)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

impl std::str::FromStr for Address {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_string(s)
    }
}
