/// HC SDK - Transaction value types, signature hashing, and input signing.
///
/// Provides the Transaction type with inputs and outputs, the signature
/// hash provider trait with a BIP-143 implementation, the input signer
/// that builds unlocking scripts, and the P2PKH template.

pub mod transaction;
pub mod input;
pub mod output;
pub mod sighash;
pub mod signer;
pub mod template;

mod error;
pub use error::TransactionError;
pub use transaction::Transaction;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use sighash::{Bip143SigHasher, SigHashExtra, SigHashType, SignatureHasher};
pub use signer::{DigestObserver, InputSigner};
