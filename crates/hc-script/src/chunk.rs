//! Script chunk parsing and encoding.
//!
//! A script chunk is either an opcode or a data push with its associated bytes.
//! This module handles decoding raw script bytes into structured chunks and
//! choosing the minimal push prefix for a payload.

use crate::opcodes::*;
use crate::ScriptError;

/// A single parsed element of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes (1-75 bytes), this is the length.
    pub op: u8,
    /// The data payload, if this chunk is a push operation.
    pub data: Option<Vec<u8>>,
}

/// Decode raw script bytes into a vector of `ScriptChunk` values.
///
/// Handles direct pushes and OP_PUSHDATA1/2/4. Every other byte becomes
/// a chunk with no data.
///
/// # Returns
/// The parsed chunks, or `DataTooSmall` if a push runs past the end.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];
        pos += 1;

        let data = match op {
            OP_DATA_1..=OP_DATA_75 => Some(take(bytes, &mut pos, op as usize)?),
            OP_PUSHDATA1 | OP_PUSHDATA2 | OP_PUSHDATA4 => {
                let width = match op {
                    OP_PUSHDATA1 => 1,
                    OP_PUSHDATA2 => 2,
                    _ => 4,
                };
                let len_bytes = take(bytes, &mut pos, width)?;
                let mut le = [0u8; 4];
                le[..width].copy_from_slice(&len_bytes);
                Some(take(bytes, &mut pos, u32::from_le_bytes(le) as usize)?)
            }
            _ => None,
        };
        chunks.push(ScriptChunk { op, data });
    }

    Ok(chunks)
}

fn take(bytes: &[u8], pos: &mut usize, n: usize) -> Result<Vec<u8>, ScriptError> {
    let end = pos
        .checked_add(n)
        .filter(|end| *end <= bytes.len())
        .ok_or(ScriptError::DataTooSmall)?;
    let out = bytes[*pos..end].to_vec();
    *pos = end;
    Ok(out)
}

/// Compute the minimal push prefix for a payload of `data_len` bytes.
///
/// Direct push up to 75 bytes, then OP_PUSHDATA1, OP_PUSHDATA2 and
/// OP_PUSHDATA4 with a little-endian length.
///
/// # Returns
/// The prefix bytes, or `DataTooBig` beyond the 4-byte length range.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    let prefix = match data_len {
        0..=75 => vec![data_len as u8],
        76..=0xff => vec![OP_PUSHDATA1, data_len as u8],
        0x100..=0xffff => {
            let mut buf = vec![OP_PUSHDATA2];
            buf.extend_from_slice(&(data_len as u16).to_le_bytes());
            buf
        }
        _ => {
            let len = u32::try_from(data_len).map_err(|_| ScriptError::DataTooBig)?;
            let mut buf = vec![OP_PUSHDATA4];
            buf.extend_from_slice(&len.to_le_bytes());
            buf
        }
    };
    Ok(prefix)
}

/// Encode several payloads back to back, each with its own push prefix.
///
/// # Returns
/// The concatenated pushes, or `PartTooBig(i)` naming the first part
/// that cannot be encoded.
pub fn encode_push_datas(parts: &[&[u8]]) -> Result<Vec<u8>, ScriptError> {
    let mut result = Vec::with_capacity(parts.iter().map(|p| p.len() + 1).sum());
    for (i, part) in parts.iter().enumerate() {
        let prefix = push_data_prefix(part.len()).map_err(|_| ScriptError::PartTooBig(i))?;
        result.extend_from_slice(&prefix);
        result.extend_from_slice(part);
    }
    Ok(result)
}
