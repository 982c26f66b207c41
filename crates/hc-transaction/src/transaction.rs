//! Transaction value type.
//!
//! A transaction is an ordered list of inputs spending previous outputs and
//! an ordered list of new outputs, plus a version and lock time. Signing
//! reads it through `&Transaction`; only [`Transaction::sign_input`] writes
//! the produced unlocking script back.

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::template::UnlockingScriptTemplate;
use crate::TransactionError;

/// A transaction with inputs, outputs, version and lock time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction format version.
    pub version: u32,

    /// The inputs being spent.
    pub inputs: Vec<TransactionInput>,

    /// The outputs created.
    pub outputs: Vec<TransactionOutput>,

    /// Block height or timestamp before which the transaction is not final.
    pub lock_time: u32,
}

impl Transaction {
    /// Create an empty version-1 transaction.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Add an input spending a known previous output.
    ///
    /// # Arguments
    /// * `prev_txid` - Hex txid of the source transaction, as displayed.
    /// * `vout` - Index of the spent output.
    /// * `prev_locking_script` - Locking script of the spent output.
    /// * `satoshis` - Value of the spent output.
    ///
    /// # Returns
    /// `Ok(())`, or `InvalidTransaction` if the txid is malformed.
    pub fn add_input_from(
        &mut self,
        prev_txid: &str,
        vout: u32,
        prev_locking_script: hc_script::Script,
        satoshis: u64,
    ) -> Result<(), TransactionError> {
        let mut input = TransactionInput::from_outpoint(prev_txid, vout)?;
        input.set_source_output(Some(TransactionOutput::new(satoshis, prev_locking_script)));
        self.inputs.push(input);
        Ok(())
    }

    /// Sign one input with a template and store the unlocking script in it.
    ///
    /// The signature is computed over the transaction as it stands, with
    /// whatever unlocking scripts other inputs already carry.
    ///
    /// # Arguments
    /// * `input_index` - The input to sign.
    /// * `template` - Produces the unlocking script.
    ///
    /// # Returns
    /// `Ok(())` once the script is stored, or the template's error.
    pub fn sign_input(
        &mut self,
        input_index: usize,
        template: &dyn UnlockingScriptTemplate,
    ) -> Result<(), TransactionError> {
        let script = template.sign(self, input_index)?;
        let input = self.inputs.get_mut(input_index).ok_or_else(|| {
            TransactionError::InvalidTransaction(format!("input index {} out of range", input_index))
        })?;
        input.unlocking_script = Some(script);
        Ok(())
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}
