use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{RlpError, RlpResult},
    header::{encode_length, length_of_length, Offset, MAX_ITEM_LENGTH, SCALAR_OFFSET},
    scalar::normalize,
    value::Value,
};

/// Which single-byte scalars are emitted without a length prefix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingleByteRule {
    /// Bytes below `0x80` stand for themselves; `0x80` is reserved for the empty string.
    #[default]
    Canonical,
    /// Bytes up to and including `0x80` stand for themselves. Output matches data
    /// produced by older encoders, but `[0x80]` then collides with the empty string.
    Legacy,
}

impl SingleByteRule {
    fn is_self_encoding(self, byte: u8) -> bool {
        match self {
            SingleByteRule::Canonical => byte < SCALAR_OFFSET,
            SingleByteRule::Legacy => byte <= SCALAR_OFFSET,
        }
    }
}

impl fmt::Display for SingleByteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingleByteRule::Canonical => f.write_str("canonical"),
            SingleByteRule::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for SingleByteRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canonical" => Ok(SingleByteRule::Canonical),
            "legacy" => Ok(SingleByteRule::Legacy),
            _ => Err(format!(
                "Unknown single byte rule: {s}, expected `canonical` or `legacy`"
            )),
        }
    }
}

/// Stateless RLP encoder. The only knob is the single-byte rule.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    rule: SingleByteRule,
}

impl Encoder {
    pub fn new(rule: SingleByteRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> SingleByteRule {
        self.rule
    }

    /// Encodes `value` into a fresh buffer. Nothing is returned on error.
    pub fn encode(&self, value: &Value) -> RlpResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len(value)?);
        self.encode_into(value, &mut out)?;
        trace!("encoded {} value into {} bytes", value.kind(), out.len());
        Ok(out)
    }

    fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> RlpResult<()> {
        match value {
            Value::List(items) => {
                let payload_len = self.payload_len(items)?;
                out.extend_from_slice(&encode_length(payload_len, Offset::List)?);
                for item in items {
                    self.encode_into(item, out)?;
                }
            }
            scalar => {
                let bytes = normalize(scalar)?;
                if bytes.len() == 1 && self.rule.is_self_encoding(bytes[0]) {
                    if bytes[0] == SCALAR_OFFSET {
                        debug!("legacy rule emits 0x80 without a length prefix");
                    }
                    out.push(bytes[0]);
                } else {
                    out.extend_from_slice(&encode_length(bytes.len() as u128, Offset::Scalar)?);
                    out.extend_from_slice(&bytes);
                }
            }
        }
        Ok(())
    }

    /// Length of `self.encode(value)` without building the output.
    pub fn encoded_len(&self, value: &Value) -> RlpResult<usize> {
        let len = self.item_len(value)?;
        usize::try_from(len).map_err(|_| RlpError::LengthOverflow(len))
    }

    fn item_len(&self, value: &Value) -> RlpResult<u128> {
        match value {
            Value::List(items) => {
                let payload_len = self.payload_len(items)?;
                Ok(length_of_length(payload_len as usize) as u128 + payload_len)
            }
            scalar => {
                let bytes = normalize(scalar)?;
                if bytes.len() == 1 && self.rule.is_self_encoding(bytes[0]) {
                    Ok(1)
                } else {
                    Ok((length_of_length(bytes.len()) + bytes.len()) as u128)
                }
            }
        }
    }

    fn payload_len(&self, items: &[Value]) -> RlpResult<u128> {
        items
            .iter()
            .try_fold(0u128, |acc, item| add_payload_len(acc, self.item_len(item)?))
    }
}

/// Adds an item to a list payload length, rejecting totals of 256^8 or more.
fn add_payload_len(acc: u128, item_len: u128) -> RlpResult<u128> {
    match acc.checked_add(item_len) {
        Some(total) if total < MAX_ITEM_LENGTH => Ok(total),
        Some(total) => Err(RlpError::LengthOverflow(total)),
        None => Err(RlpError::LengthOverflow(u128::MAX)),
    }
}

/// Encodes `value` with the canonical single-byte rule.
pub fn encode(value: &Value) -> RlpResult<Vec<u8>> {
    Encoder::default().encode(value)
}
