//! Input signing.
//!
//! [`InputSigner`] turns a private key and a transaction input into a
//! signature and an unlocking script. The digest comes from an injected
//! [`SignatureHasher`]; signing uses RFC6979 deterministic nonces, so the
//! same inputs always produce the same bytes.
//!
//! Digests are never logged. Callers that need to inspect them attach a
//! [`DigestObserver`].

use std::fmt;
use std::sync::Arc;

use hc_primitives::ec::PrivateKey;
use hc_script::Script;

use crate::sighash::{SigHashExtra, SigHashType, SignatureHasher};
use crate::transaction::Transaction;
use crate::TransactionError;

/// Receives every digest an [`InputSigner`] signs.
pub trait DigestObserver: Send + Sync {
    /// Called after the digest is computed and before it is signed.
    fn on_digest(&self, input_index: usize, hash_type: SigHashType, digest: &[u8; 32]);
}

/// Signs transaction inputs with digests from the hasher `H`.
///
/// Holds no per-call state, so one signer can be shared across threads.
#[derive(Clone)]
pub struct InputSigner<H> {
    hasher: H,
    observer: Option<Arc<dyn DigestObserver>>,
}

impl<H: SignatureHasher> InputSigner<H> {
    pub fn new(hasher: H) -> Self {
        InputSigner {
            hasher,
            observer: None,
        }
    }

    /// Attach an observer that sees each digest before it is signed.
    pub fn with_observer(mut self, observer: Arc<dyn DigestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Produce the signature for one input: DER (low-S) ‖ hash-type byte.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed.
    /// * `input_index` - Index of the input to sign.
    /// * `prev_output_script` - Locking script of the output being spent.
    /// * `hash_type` - Signature hash flags; the low byte is appended.
    /// * `key` - The signing key.
    ///
    /// # Returns
    /// The signature bytes, the hasher's error unchanged, or
    /// `Primitives(SigningFailure)` if the EC primitive fails.
    pub fn raw_signature(
        &self,
        tx: &Transaction,
        input_index: usize,
        prev_output_script: &Script,
        hash_type: SigHashType,
        key: &PrivateKey,
    ) -> Result<Vec<u8>, TransactionError> {
        self.raw_signature_with_extra(tx, input_index, prev_output_script, hash_type, key, None)
    }

    /// Like [`InputSigner::raw_signature`], passing `extra` to the hasher.
    pub fn raw_signature_with_extra(
        &self,
        tx: &Transaction,
        input_index: usize,
        prev_output_script: &Script,
        hash_type: SigHashType,
        key: &PrivateKey,
        extra: Option<SigHashExtra>,
    ) -> Result<Vec<u8>, TransactionError> {
        let digest = self.hasher.calc_signature_hash(
            prev_output_script,
            hash_type,
            tx,
            input_index,
            extra,
        )?;

        if let Some(observer) = &self.observer {
            observer.on_digest(input_index, hash_type, &digest);
        }

        let signature = key.sign(&digest)?;
        let der = signature.to_der();

        let mut sig_buf = Vec::with_capacity(der.len() + 1);
        sig_buf.extend_from_slice(&der);
        sig_buf.push(hash_type.to_byte());

        tracing::debug!(input_index, hash_type = hash_type.to_byte(), "signed input");
        Ok(sig_buf)
    }

    /// Build the unlocking script `PUSH(signature) PUSH(public key)`.
    ///
    /// # Arguments
    /// * `compress` - Push the 33-byte compressed public key instead of the
    ///   65-byte uncompressed one. Must match the form the spent output's
    ///   address was derived from.
    ///
    /// # Returns
    /// The push-only script, or any error of [`InputSigner::raw_signature`].
    pub fn signature_script(
        &self,
        tx: &Transaction,
        input_index: usize,
        prev_output_script: &Script,
        hash_type: SigHashType,
        key: &PrivateKey,
        compress: bool,
    ) -> Result<Script, TransactionError> {
        let sig = self.raw_signature(tx, input_index, prev_output_script, hash_type, key)?;
        let pub_key = key.pub_key().serialize(compress);
        Ok(Script::from_pushes(&[&sig[..], &pub_key[..]])?)
    }
}

impl<H: fmt::Debug> fmt::Debug for InputSigner<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSigner")
            .field("hasher", &self.hasher)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
