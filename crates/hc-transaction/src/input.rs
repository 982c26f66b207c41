//! Transaction input referencing a previous output.
//!
//! Contains the source transaction ID, output index, unlocking script,
//! sequence number, and an optional copy of the output being spent.

use hc_script::Script;

use crate::output::TransactionOutput;
use crate::TransactionError;

/// Default sequence number indicating a finalized input (no relative lock-time).
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// A single input of a transaction.
///
/// Each input references an output from a previous transaction by its
/// transaction ID (`source_txid`) and output index (`source_tx_out_index`).
/// The `unlocking_script` supplies the data required to satisfy the
/// referenced output's locking script.
///
/// Signing needs the satoshi value and locking script of the spent output;
/// provide them with [`TransactionInput::set_source_output`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// The 32-byte transaction ID of the output being spent, in internal
    /// (little-endian) byte order.
    pub source_txid: [u8; 32],

    /// Index of the output within the source transaction.
    pub source_tx_out_index: u32,

    /// Sequence number. Defaults to `0xFFFFFFFF` (finalized).
    pub sequence_number: u32,

    /// The unlocking script that proves authorization.
    /// `None` when the input has not yet been signed.
    pub unlocking_script: Option<Script>,

    source_output: Option<TransactionOutput>,
}

impl TransactionInput {
    /// Create a new `TransactionInput` with default values.
    ///
    /// The source txid is zeroed, output index is 0, sequence is finalized,
    /// and no unlocking script or source output is set.
    pub fn new() -> Self {
        TransactionInput {
            source_txid: [0u8; 32],
            source_tx_out_index: 0,
            sequence_number: DEFAULT_SEQUENCE_NUMBER,
            unlocking_script: None,
            source_output: None,
        }
    }

    /// Create an input spending output `vout` of the transaction `txid_hex`.
    ///
    /// # Arguments
    /// * `txid_hex` - The source txid as conventionally displayed (byte-reversed hex).
    /// * `vout` - The output index within the source transaction.
    ///
    /// # Returns
    /// The input, or `InvalidTransaction` if the txid is not 32 bytes of hex.
    pub fn from_outpoint(txid_hex: &str, vout: u32) -> Result<Self, TransactionError> {
        let mut input = TransactionInput::new();
        input.source_txid = txid_from_hex(txid_hex)?;
        input.source_tx_out_index = vout;
        Ok(input)
    }

    /// Set a direct source output on this input.
    ///
    /// This provides the satoshi value and locking script of the output
    /// being spent.
    ///
    /// # Arguments
    /// * `output` - The source output, or `None` to clear.
    pub fn set_source_output(&mut self, output: Option<TransactionOutput>) {
        self.source_output = output;
    }

    /// The output being spent, if it was provided.
    pub fn source_tx_output(&self) -> Option<&TransactionOutput> {
        self.source_output.as_ref()
    }

    /// Return the satoshi value of the source output, if available.
    pub fn source_tx_satoshis(&self) -> Option<u64> {
        self.source_tx_output().map(|o| o.satoshis)
    }

    /// Return the locking script of the source output, if available.
    pub fn source_tx_script(&self) -> Option<&Script> {
        self.source_tx_output().map(|o| &o.locking_script)
    }
}

impl Default for TransactionInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a displayed txid into internal byte order.
fn txid_from_hex(txid_hex: &str) -> Result<[u8; 32], TransactionError> {
    let bytes = hex::decode(txid_hex)
        .map_err(|e| TransactionError::InvalidTransaction(format!("invalid txid hex: {}", e)))?;
    let mut txid: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
        TransactionError::InvalidTransaction(format!("txid must be 32 bytes, got {}", bytes.len()))
    })?;
    txid.reverse();
    Ok(txid)
}
