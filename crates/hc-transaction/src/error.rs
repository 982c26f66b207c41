/// Error types for transaction signing operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction does not fit the request (e.g. input index out of range).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// The signature hash provider could not compute a digest.
    #[error("digest computation failed: {0}")]
    DigestComputation(String),
    /// The input cannot be signed as requested (e.g. missing source output).
    #[error("signing error: {0}")]
    SigningError(String),
    /// An underlying script error (forwarded from `hc-script`).
    #[error("script error: {0}")]
    Script(#[from] hc_script::ScriptError),
    /// An underlying primitives error (forwarded from `hc-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] hc_primitives::PrimitivesError),
}
