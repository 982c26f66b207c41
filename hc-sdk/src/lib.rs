#![deny(missing_docs)]

//! HC SDK - Complete SDK.
//!
//! Re-exports all HC SDK components for convenient single-crate usage.

pub use hc_primitives as primitives;
pub use hc_script as script;
pub use hc_transaction as transaction;
