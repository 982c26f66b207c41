//! Transaction output with satoshi value and locking script.

use hc_primitives::util::{ByteWriter, VarInt};
use hc_script::Script;

/// A single output of a transaction.
///
/// Each output specifies a satoshi value and a `locking_script` that
/// defines the conditions under which the funds may be spent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionOutput {
    /// The number of satoshis locked by this output.
    pub satoshis: u64,

    /// The locking script that defines spending conditions.
    pub locking_script: Script,
}

impl TransactionOutput {
    /// Create an output paying `satoshis` to `locking_script`.
    pub fn new(satoshis: u64, locking_script: Script) -> Self {
        TransactionOutput {
            satoshis,
            locking_script,
        }
    }

    /// Serialize this output as committed to by signature hashes.
    ///
    /// Layout: satoshis (8 bytes LE) ‖ varint(script length) ‖ script.
    ///
    /// # Arguments
    /// * `writer` - The writer to append serialized bytes to.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_u64_le(self.satoshis);
        let script_bytes = self.locking_script.to_bytes();
        writer.write_varint(VarInt::from(script_bytes.len()));
        writer.write_bytes(script_bytes);
    }

    /// Serialize this output to a byte vector.
    ///
    /// # Returns
    /// A `Vec<u8>` in the layout of [`TransactionOutput::write_to`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(9 + self.locking_script.len());
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Return the locking script as a hex-encoded string.
    pub fn locking_script_hex(&self) -> String {
        self.locking_script.to_hex()
    }
}
