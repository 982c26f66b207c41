//! Signature hash computation for transaction signing.
//!
//! A signature hash is the 32-byte digest an ECDSA signature commits to when
//! it authorizes spending a transaction input. How that digest is derived
//! from the transaction depends on the chain, so it sits behind the
//! [`SignatureHasher`] trait. [`Bip143SigHasher`] implements the BIP-143
//! digest with the FORKID replay-protection flag.
//!
//! See <https://github.com/bitcoin-sv/bitcoin-sv/blob/master/doc/abc/replay-protected-sighash.md#digest-algorithm>

use std::ops::BitOr;

use hc_primitives::hash::sha256d;
use hc_primitives::util::{ByteWriter, VarInt};
use hc_script::Script;
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;
use crate::TransactionError;

/// Mask applied to extract the base sighash type (ALL, NONE, SINGLE).
const SIGHASH_MASK: u32 = 0x1f;

/// Flags selecting which parts of a transaction a signature commits to.
///
/// The low byte is appended to every produced signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SigHashType(pub u32);

impl SigHashType {
    /// Sign all inputs and all outputs.
    pub const ALL: SigHashType = SigHashType(0x01);
    /// Sign all inputs but no outputs.
    pub const NONE: SigHashType = SigHashType(0x02);
    /// Sign all inputs and only the output with the same index.
    pub const SINGLE: SigHashType = SigHashType(0x03);
    /// Modifier: commit to the signed input only.
    pub const ANYONECANPAY: SigHashType = SigHashType(0x80);
    /// Replay-protection flag of the BIP-143 digest.
    pub const FORKID: SigHashType = SigHashType(0x40);
    /// `ALL | FORKID`.
    pub const ALL_FORKID: SigHashType = SigHashType(0x41);

    /// The base type (ALL, NONE or SINGLE) with modifiers masked off.
    pub const fn base(self) -> u32 {
        self.0 & SIGHASH_MASK
    }

    /// The byte appended to a DER signature.
    pub const fn to_byte(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub const fn has_anyone_can_pay(self) -> bool {
        self.0 & Self::ANYONECANPAY.0 != 0
    }

    pub const fn has_fork_id(self) -> bool {
        self.0 & Self::FORKID.0 != 0
    }
}

impl BitOr for SigHashType {
    type Output = SigHashType;

    fn bitor(self, rhs: SigHashType) -> SigHashType {
        SigHashType(self.0 | rhs.0)
    }
}

impl From<u32> for SigHashType {
    fn from(value: u32) -> Self {
        SigHashType(value)
    }
}

/// Per-input context for providers that commit to more than the transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigHashExtra {
    /// Value of the output being spent.
    pub satoshis: u64,
}

/// Computes the digest a signature over one transaction input commits to.
///
/// Implementations must be pure: identical arguments yield identical digests.
pub trait SignatureHasher: Send + Sync {
    /// Compute the signature hash for input `input_index` of `tx`.
    ///
    /// # Arguments
    /// * `prev_output_script` - The locking script of the output being spent.
    /// * `hash_type` - Which parts of the transaction to commit to.
    /// * `tx` - The transaction being signed.
    /// * `input_index` - Index of the input being signed.
    /// * `extra` - Optional per-input context, such as the spent value.
    ///
    /// # Returns
    /// The 32-byte digest, or a `TransactionError` if it cannot be computed.
    fn calc_signature_hash(
        &self,
        prev_output_script: &Script,
        hash_type: SigHashType,
        tx: &Transaction,
        input_index: usize,
        extra: Option<SigHashExtra>,
    ) -> Result<[u8; 32], TransactionError>;
}

/// The BIP-143 (FORKID) signature hash.
///
/// Commits to the value being spent, taken from `extra` or else from the
/// input's source output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bip143SigHasher;

impl SignatureHasher for Bip143SigHasher {
    fn calc_signature_hash(
        &self,
        prev_output_script: &Script,
        hash_type: SigHashType,
        tx: &Transaction,
        input_index: usize,
        extra: Option<SigHashExtra>,
    ) -> Result<[u8; 32], TransactionError> {
        let preimage = self.preimage(prev_output_script, hash_type, tx, input_index, extra)?;
        Ok(sha256d(&preimage))
    }
}

impl Bip143SigHasher {
    /// Compute the pre-image bytes before double-hashing.
    ///
    /// The preimage consists of:
    /// 1. nVersion (4 bytes LE)
    /// 2. hashPrevouts (32 bytes) - sha256d of all outpoints unless ANYONECANPAY
    /// 3. hashSequence (32 bytes) - sha256d of all sequences unless ANYONECANPAY/SINGLE/NONE
    /// 4. outpoint (32+4 bytes) - txid + vout of the input being signed
    /// 5. scriptCode (varint + script) - the locking script being satisfied
    /// 6. value (8 bytes LE) - satoshis of the output being spent
    /// 7. nSequence (4 bytes LE) - sequence of the input being signed
    /// 8. hashOutputs (32 bytes) - sha256d of all outputs or one output
    /// 9. nLocktime (4 bytes LE)
    /// 10. sighashType (4 bytes LE)
    ///
    /// # Returns
    /// The raw preimage, `InvalidTransaction` for an out-of-range index, or
    /// `DigestComputation` when the spent value is unknown.
    pub fn preimage(
        &self,
        prev_output_script: &Script,
        hash_type: SigHashType,
        tx: &Transaction,
        input_index: usize,
        extra: Option<SigHashExtra>,
    ) -> Result<Vec<u8>, TransactionError> {
        let input = tx.inputs.get(input_index).ok_or_else(|| {
            TransactionError::InvalidTransaction(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                tx.inputs.len()
            ))
        })?;

        let satoshis = extra
            .map(|e| e.satoshis)
            .or_else(|| input.source_tx_satoshis())
            .ok_or_else(|| {
                TransactionError::DigestComputation(format!(
                    "spent value of input {} is unknown",
                    input_index
                ))
            })?;

        tracing::trace!(
            input_index,
            hash_type = hash_type.to_byte(),
            script_len = prev_output_script.len(),
            "building bip143 preimage"
        );

        let base_type = hash_type.base();
        let anyone_can_pay = hash_type.has_anyone_can_pay();
        let single_or_none =
            base_type == SigHashType::SINGLE.0 || base_type == SigHashType::NONE.0;

        let hash_prevouts = if anyone_can_pay {
            [0u8; 32]
        } else {
            prevouts_hash(tx)
        };

        let hash_sequence = if anyone_can_pay || single_or_none {
            [0u8; 32]
        } else {
            sequence_hash(tx)
        };

        let hash_outputs = if !single_or_none {
            outputs_hash(tx, None)
        } else if base_type == SigHashType::SINGLE.0 && input_index < tx.outputs.len() {
            outputs_hash(tx, Some(input_index))
        } else {
            [0u8; 32]
        };

        let script = prev_output_script.to_bytes();
        let mut writer = ByteWriter::with_capacity(165 + script.len());
        writer.write_u32_le(tx.version);
        writer.write_bytes(&hash_prevouts);
        writer.write_bytes(&hash_sequence);
        writer.write_bytes(&input.source_txid);
        writer.write_u32_le(input.source_tx_out_index);
        writer.write_varint(VarInt::from(script.len()));
        writer.write_bytes(script);
        writer.write_u64_le(satoshis);
        writer.write_u32_le(input.sequence_number);
        writer.write_bytes(&hash_outputs);
        writer.write_u32_le(tx.lock_time);
        writer.write_u32_le(hash_type.0);

        Ok(writer.into_bytes())
    }
}

/// sha256d of every outpoint (txid ‖ vout) in input order.
fn prevouts_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = ByteWriter::with_capacity(tx.inputs.len() * 36);
    for input in &tx.inputs {
        writer.write_bytes(&input.source_txid);
        writer.write_u32_le(input.source_tx_out_index);
    }
    sha256d(writer.as_bytes())
}

/// sha256d of every input sequence number.
fn sequence_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = ByteWriter::with_capacity(tx.inputs.len() * 4);
    for input in &tx.inputs {
        writer.write_u32_le(input.sequence_number);
    }
    sha256d(writer.as_bytes())
}

/// sha256d of all serialized outputs, or of the single output at `only`.
fn outputs_hash(tx: &Transaction, only: Option<usize>) -> [u8; 32] {
    let mut writer = ByteWriter::new();
    match only {
        Some(n) => tx.outputs[n].write_to(&mut writer),
        None => tx.outputs.iter().for_each(|o| o.write_to(&mut writer)),
    }
    sha256d(writer.as_bytes())
}
