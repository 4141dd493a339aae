use tracing::warn;

use crate::{
    error::{RlpError, RlpResult},
    scalar::minimal_be_bytes,
};

/// Base of the prefix byte for scalar payloads.
pub const SCALAR_OFFSET: u8 = 0x80;
/// Base of the prefix byte for list payloads.
pub const LIST_OFFSET: u8 = 0xc0;
/// Payloads shorter than this use the single-byte short form.
pub const SIZE_THRESHOLD: usize = 56;
/// Exclusive upper bound on payload length: 256^8.
pub const MAX_ITEM_LENGTH: u128 = 1 << 64;

/// Distinguishes the two prefix ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    Scalar,
    List,
}

impl Offset {
    pub fn base(self) -> u8 {
        match self {
            Offset::Scalar => SCALAR_OFFSET,
            Offset::List => LIST_OFFSET,
        }
    }
}

/// Produces the length prefix for a payload of `length` bytes.
///
/// Short form (`length < 56`) is the single byte `offset + length`. Long form is
/// `offset + 55 + k` followed by the `k` big-endian bytes of `length`, with `k`
/// between 1 and 8.
pub fn encode_length(length: u128, offset: Offset) -> RlpResult<Vec<u8>> {
    if length < SIZE_THRESHOLD as u128 {
        return Ok(vec![offset.base() + length as u8]);
    }
    if length >= MAX_ITEM_LENGTH {
        warn!("payload length {length} exceeds the 8 length byte limit");
        return Err(RlpError::LengthOverflow(length));
    }

    let binary_length = minimal_be_bytes(length as u64);
    let mut out = Vec::with_capacity(1 + binary_length.len());
    out.push(offset.base() + (SIZE_THRESHOLD - 1) as u8 + binary_length.len() as u8);
    out.extend_from_slice(&binary_length);
    Ok(out)
}

/// Number of bytes `encode_length` emits for a payload of `payload_len` bytes.
pub fn length_of_length(payload_len: usize) -> usize {
    if payload_len < SIZE_THRESHOLD {
        1
    } else {
        1 + minimal_be_bytes(payload_len as u64).len()
    }
}
