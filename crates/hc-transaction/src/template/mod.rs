//! Script templates for common spending patterns.
//!
//! Provides the `UnlockingScriptTemplate` trait and a P2PKH implementation
//! for creating locking and unlocking scripts.

pub mod p2pkh;

use hc_script::Script;

use crate::transaction::Transaction;
use crate::TransactionError;

/// Produces the unlocking script for one input of a transaction.
///
/// The `sign` method receives the full transaction and the input index,
/// computes the appropriate signature hash, signs it, and returns the
/// unlocking script.
pub trait UnlockingScriptTemplate {
    /// Produce an unlocking script for the given input.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed.
    /// * `input_index` - The index of the input to sign.
    ///
    /// # Returns
    /// `Ok(Script)` containing the unlocking script, or an error on failure.
    fn sign(&self, tx: &Transaction, input_index: usize) -> Result<Script, TransactionError>;

    /// Estimate the byte length of the unlocking script before signing.
    fn estimate_length(&self, tx: &Transaction, input_index: usize) -> u32;
}
