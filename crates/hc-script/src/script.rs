//! Script type - a sequence of opcodes and data pushes.
//!
//! Scripts appear in transaction inputs (unlocking) and outputs (locking).
//! The Script wraps a `Vec<u8>` and provides construction, push-data
//! building, P2PKH recognition, and hex rendering.

use std::fmt;

use crate::chunk::{decode_script, encode_push_datas, ScriptChunk};
use crate::opcodes::*;
use crate::ScriptError;

/// A script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or an error if the hex is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        Ok(Script(hex::decode(hex_str)?))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Build a script consisting only of data pushes, in order.
    ///
    /// Each payload gets its minimal push prefix (direct push,
    /// OP_PUSHDATA1, OP_PUSHDATA2 or OP_PUSHDATA4). No other opcodes are
    /// emitted.
    ///
    /// # Arguments
    /// * `pushes` - The payloads to push.
    ///
    /// # Returns
    /// The script, or `PartTooBig` if a payload exceeds the push limits.
    pub fn from_pushes(pushes: &[&[u8]]) -> Result<Self, ScriptError> {
        Ok(Script(encode_push_datas(pushes)?))
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Return a reference to the underlying bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Classification and extraction
    // -----------------------------------------------------------------------

    /// Check if this is a Pay-to-Public-Key-Hash output script.
    ///
    /// Pattern: OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// Extract the 20-byte public key hash from a P2PKH script.
    ///
    /// # Returns
    /// The hash, `EmptyScript` for an empty script, or `NotP2PKH` otherwise.
    pub fn public_key_hash(&self) -> Result<[u8; 20], ScriptError> {
        if self.0.is_empty() {
            return Err(ScriptError::EmptyScript);
        }
        if !self.is_p2pkh() {
            return Err(ScriptError::NotP2PKH);
        }
        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&self.0[3..23]);
        Ok(pkh)
    }

    /// Parse the script into a vector of decoded chunks.
    pub fn chunks(&self) -> Result<Vec<ScriptChunk>, ScriptError> {
        decode_script(&self.0)
    }

    /// Return the payloads of a push-only script, in order.
    ///
    /// # Returns
    /// The pushed byte strings, or `InvalidScript` if any chunk is not a
    /// data push.
    pub fn push_datas(&self) -> Result<Vec<Vec<u8>>, ScriptError> {
        self.chunks()?
            .into_iter()
            .map(|chunk| match chunk.data {
                Some(data) if is_push_data_op(chunk.op) => Ok(data),
                _ => Err(ScriptError::InvalidScript(format!(
                    "non-push opcode {:#04x} in push-only script",
                    chunk.op
                ))),
            })
            .collect()
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
