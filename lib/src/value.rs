use alloy_primitives::{Bytes, U256};
use num_bigint::BigUint;

/// An RLP item: either a list of items or a scalar leaf.
///
/// The set of kinds is closed. Anything that cannot be expressed as one of these
/// variants is rejected when the value is built (see the `TryFrom` conversions),
/// so the encoder never has to inspect types at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// An ordered sequence of items, encoded in order.
    List(Vec<Value>),
    /// Raw bytes, encoded as-is.
    Bytes(Vec<u8>),
    /// A string, encoded through its UTF-8 bytes.
    Text(String),
    /// A fixed-width unsigned integer.
    UInt(u64),
    /// An arbitrary-precision unsigned integer.
    BigUInt(BigUint),
}

impl Value {
    /// Builds a list from anything that converts into values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Name of the variant, used in error reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::List(_) => "list",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::UInt(_) => "uint",
            Value::BigUInt(_) => "biguint",
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(bytes: [u8; N]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::UInt(n as u64)
                }
            }
        )+
    };
}

impl_from_uint!(u8, u16, u32, u64, usize);

impl From<u128> for Value {
    fn from(n: u128) -> Self {
        match u64::try_from(n) {
            Ok(n) => Value::UInt(n),
            Err(_) => Value::BigUInt(BigUint::from(n)),
        }
    }
}

impl From<BigUint> for Value {
    fn from(n: BigUint) -> Self {
        Value::BigUInt(n)
    }
}

impl From<U256> for Value {
    fn from(n: U256) -> Self {
        Value::BigUInt(BigUint::from_bytes_be(&n.to_be_bytes::<32>()))
    }
}
