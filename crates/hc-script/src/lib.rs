/// HC SDK - Script construction and address handling.
///
/// Provides the Script byte type, opcode constants, push-data chunk
/// parsing and encoding, and P2PKH addresses.

pub mod script;
pub mod opcodes;
pub mod chunk;
pub mod address;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use address::{Address, Network};
pub use chunk::ScriptChunk;
