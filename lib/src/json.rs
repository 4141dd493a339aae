//! Building values from JSON.
//!
//! Arrays become lists, `0x`-prefixed strings become bytes, other strings become
//! text, non-negative integers become `UInt` and `{"bigint": "..."}` objects
//! become `BigUInt`. `{"text": "..."}` and `{"bytes": "..."}` pick the scalar
//! kind explicitly, so `{"text": "0xabc"}` stays text. Every other JSON kind is
//! rejected as unsupported.

use num_bigint::BigUint;
use serde_json::Value as JsonValue;

use crate::{
    encode::encode,
    error::{RlpError, RlpResult},
    value::Value,
};

const BIGINT_KEY: &str = "bigint";
const TEXT_KEY: &str = "text";
const BYTES_KEY: &str = "bytes";

impl TryFrom<&JsonValue> for Value {
    type Error = RlpError;

    fn try_from(json: &JsonValue) -> RlpResult<Self> {
        match json {
            JsonValue::Array(items) => items
                .iter()
                .map(Value::try_from)
                .collect::<RlpResult<Vec<_>>>()
                .map(Value::List),
            JsonValue::String(s) => match s.strip_prefix("0x") {
                Some(digits) => Ok(Value::Bytes(hex::decode(digits)?)),
                None => Ok(Value::Text(s.clone())),
            },
            JsonValue::Number(n) => n
                .as_u64()
                .map(Value::UInt)
                .ok_or_else(|| RlpError::unsupported(number_kind(n), n)),
            JsonValue::Object(map) if map.len() == 1 => match map.iter().next() {
                Some((key, JsonValue::String(literal))) => match key.as_str() {
                    BIGINT_KEY => parse_big_uint(literal).map(Value::BigUInt),
                    TEXT_KEY => Ok(Value::Text(literal.clone())),
                    BYTES_KEY => {
                        let digits = literal.strip_prefix("0x").unwrap_or(literal);
                        Ok(Value::Bytes(hex::decode(digits)?))
                    }
                    _ => Err(RlpError::unsupported("object", json)),
                },
                _ => Err(RlpError::unsupported("object", json)),
            },
            JsonValue::Object(_) => Err(RlpError::unsupported("object", json)),
            JsonValue::Bool(b) => Err(RlpError::unsupported("bool", b)),
            JsonValue::Null => Err(RlpError::unsupported("null", "null")),
        }
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = RlpError;

    fn try_from(json: JsonValue) -> RlpResult<Self> {
        Value::try_from(&json)
    }
}

fn number_kind(n: &serde_json::Number) -> &'static str {
    if n.is_f64() {
        "float"
    } else {
        "negative integer"
    }
}

fn parse_big_uint(literal: &str) -> RlpResult<BigUint> {
    let parsed = match literal.strip_prefix("0x") {
        Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
        None => BigUint::parse_bytes(literal.as_bytes(), 10),
    };
    parsed.ok_or_else(|| RlpError::InvalidBigInt(literal.to_owned()))
}

/// Builds a value from `json` and encodes it with the canonical rule.
pub fn encode_json(json: &JsonValue) -> RlpResult<Vec<u8>> {
    encode(&Value::try_from(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_mapping() {
        let value = Value::try_from(&json!([
            "cat",
            "0x0400",
            42,
            {"bigint": "340282366920938463463374607431768211456"},
            {"bigint": "0xff"},
            []
        ]))
        .unwrap();

        assert_eq!(
            value,
            Value::List(vec![
                Value::Text("cat".into()),
                Value::Bytes(vec![0x04, 0x00]),
                Value::UInt(42),
                Value::BigUInt(BigUint::from(1u8) << 128),
                Value::BigUInt(BigUint::from(0xffu8)),
                Value::List(vec![]),
            ])
        );
    }

    #[test]
    fn test_explicit_scalar_kinds() {
        assert_eq!(
            Value::try_from(&json!({"text": "0xabc"})).unwrap(),
            Value::Text("0xabc".into())
        );
        assert_eq!(
            Value::try_from(&json!({"bytes": "0x0400"})).unwrap(),
            Value::Bytes(vec![0x04, 0x00])
        );
        assert_eq!(
            Value::try_from(&json!({"bytes": "cafe"})).unwrap(),
            Value::Bytes(vec![0xca, 0xfe])
        );
        assert_eq!(
            encode_json(&json!({"text": "0xabc"})).unwrap(),
            b"\x850xabc".to_vec()
        );
        assert!(matches!(
            Value::try_from(&json!({"bytes": "0xabc"})),
            Err(RlpError::InvalidHex(_))
        ));
        assert!(Value::try_from(&json!({"text": 1})).is_err());
        assert!(Value::try_from(&json!({"text": "a", "bytes": "00"})).is_err());
    }

    #[test]
    fn test_float_is_unsupported() {
        let err = encode_json(&json!(1.5)).unwrap_err();
        assert_eq!(
            err,
            RlpError::UnsupportedType {
                kind: "float",
                value: "1.5".to_owned()
            }
        );
    }

    #[test]
    fn test_unsupported_nested_value_fails_whole_input() {
        let err = encode_json(&json!(["cat", ["dog", true]])).unwrap_err();
        assert!(matches!(err, RlpError::UnsupportedType { kind: "bool", .. }));

        let err = encode_json(&json!(-1)).unwrap_err();
        assert!(matches!(
            err,
            RlpError::UnsupportedType {
                kind: "negative integer",
                ..
            }
        ));

        assert!(encode_json(&json!(null)).is_err());
        assert!(encode_json(&json!({"foo": 1})).is_err());
    }

    #[test]
    fn test_invalid_literals() {
        assert!(matches!(
            encode_json(&json!("0xzz")),
            Err(RlpError::InvalidHex(_))
        ));
        assert_eq!(
            encode_json(&json!({"bigint": "12a"})),
            Err(RlpError::InvalidBigInt("12a".to_owned()))
        );
    }

    #[test]
    fn test_encode_json() {
        assert_eq!(
            encode_json(&json!(["cat", "dog"])).unwrap(),
            b"\xc8\x83cat\x83dog".to_vec()
        );
        assert_eq!(encode_json(&json!(0)).unwrap(), vec![0x80]);
    }
}
