//! Script opcode constants used by push-data encoding and P2PKH scripts.
//!
//! Only the byte values are defined here; executing them is the job of a
//! script engine, which this crate does not provide.

pub const OP_DATA_1: u8 = 0x01;
pub const OP_DATA_20: u8 = 0x14;
pub const OP_DATA_33: u8 = 0x21;
pub const OP_DATA_72: u8 = 0x48;
pub const OP_DATA_75: u8 = 0x4b;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;

pub const OP_DUP: u8 = 0x76;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

/// Whether `op` pushes data onto the stack by carrying bytes inline
/// (OP_DATA_1 ..= OP_PUSHDATA4).
pub fn is_push_data_op(op: u8) -> bool {
    (OP_DATA_1..=OP_PUSHDATA4).contains(&op)
}
