//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Creates standard P2PKH locking scripts (`OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`) and unlocking scripts (`<sig> <pubkey>`).

use hc_primitives::ec::PrivateKey;
use hc_script::opcodes::*;
use hc_script::{Address, Script};

use crate::sighash::{Bip143SigHasher, SigHashType};
use crate::signer::InputSigner;
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Create a P2PKH locking script paying to `address`.
///
/// Produces: `OP_DUP OP_HASH160 <20-byte pubkey hash> OP_EQUALVERIFY OP_CHECKSIG`
pub fn lock(address: &Address) -> Script {
    let mut bytes = Vec::with_capacity(25);
    bytes.push(OP_DUP);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(&address.public_key_hash);
    bytes.push(OP_EQUALVERIFY);
    bytes.push(OP_CHECKSIG);
    Script::from(bytes)
}

/// Create a P2PKH unlocker for signing transaction inputs.
///
/// # Arguments
/// * `private_key` - The private key used to sign.
/// * `hash_type` - Signature hash flags, e.g. [`SigHashType::ALL_FORKID`].
/// * `compress` - Whether to push the compressed public key. Must match
///   how the paying address was derived.
///
/// # Returns
/// A `P2PKH` instance implementing `UnlockingScriptTemplate`.
pub fn unlock(private_key: PrivateKey, hash_type: SigHashType, compress: bool) -> P2PKH {
    P2PKH {
        private_key,
        hash_type,
        compress,
        signer: InputSigner::new(Bip143SigHasher),
    }
}

/// P2PKH signing template holding a private key and signing options.
pub struct P2PKH {
    private_key: PrivateKey,
    hash_type: SigHashType,
    compress: bool,
    signer: InputSigner<Bip143SigHasher>,
}

impl UnlockingScriptTemplate for P2PKH {
    /// Sign the input against its source output's locking script.
    ///
    /// # Returns
    /// `<DER_sig ‖ hash_type_byte> <pubkey>`, `InvalidTransaction` for an
    /// out-of-range index, or `SigningError` if the input has no source output.
    fn sign(&self, tx: &Transaction, input_index: usize) -> Result<Script, TransactionError> {
        let input = tx.inputs.get(input_index).ok_or_else(|| {
            TransactionError::InvalidTransaction(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                tx.inputs.len()
            ))
        })?;

        let prev_script = input.source_tx_script().ok_or_else(|| {
            TransactionError::SigningError(format!(
                "missing source output on input {}",
                input_index
            ))
        })?;

        self.signer.signature_script(
            tx,
            input_index,
            prev_script,
            self.hash_type,
            &self.private_key,
            self.compress,
        )
    }

    /// A typical 71-byte signature push followed by the public key push:
    /// 106 bytes compressed, 138 uncompressed. Actual scripts may differ
    /// by a byte with the DER length.
    fn estimate_length(&self, _tx: &Transaction, _input_index: usize) -> u32 {
        if self.compress {
            106
        } else {
            138
        }
    }
}
