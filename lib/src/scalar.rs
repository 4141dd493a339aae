use std::borrow::Cow;

use num_bigint::BigUint;

use crate::{
    error::{RlpError, RlpResult},
    value::Value,
};

/// Converts a scalar into its canonical byte form.
///
/// Bytes and text are borrowed unchanged (text as UTF-8). Integers become their
/// minimal unsigned big-endian representation, and zero becomes the empty slice:
/// RLP has no other representation for numeric zero. A list is not a scalar and
/// is rejected.
pub fn normalize(value: &Value) -> RlpResult<Cow<'_, [u8]>> {
    match value {
        Value::Bytes(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
        Value::Text(text) => Ok(Cow::Borrowed(text.as_bytes())),
        Value::UInt(n) => Ok(Cow::Owned(minimal_be_bytes(*n))),
        Value::BigUInt(n) => Ok(Cow::Owned(big_uint_to_bytes(n))),
        Value::List(items) => Err(RlpError::unsupported(
            value.kind(),
            format!("{} items", items.len()),
        )),
    }
}

/// Big-endian bytes of `val` with leading zero bytes stripped; empty for zero.
pub fn minimal_be_bytes(val: u64) -> Vec<u8> {
    let bytes = val.to_be_bytes();
    let first = (val.leading_zeros() / 8) as usize;
    bytes[first..].to_vec()
}

fn big_uint_to_bytes(n: &BigUint) -> Vec<u8> {
    // `to_bytes_be` yields [0] for zero
    if n.bits() == 0 {
        Vec::new()
    } else {
        n.to_bytes_be()
    }
}
