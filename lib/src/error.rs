use thiserror::Error as ThisError;

/// The standardized error returned by the encoder.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum RlpError {
    /// For values whose kind has no scalar byte representation.
    #[error("Unsupported type: {kind} ({value}), only bytes, text, unsigned integers and lists of these are accepted")]
    UnsupportedType { kind: &'static str, value: String },

    /// For payload lengths that do not fit in 8 length bytes.
    #[error("Input too long: payload length {0} is not representable in 8 length bytes")]
    LengthOverflow(u128),

    /// For `0x`-prefixed strings that are not valid hex.
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// For big integer literals that cannot be parsed.
    #[error("Invalid big integer: {0}")]
    InvalidBigInt(String),
}

impl RlpError {
    pub(crate) fn unsupported(kind: &'static str, value: impl ToString) -> Self {
        RlpError::UnsupportedType {
            kind,
            value: value.to_string(),
        }
    }
}

pub type RlpResult<T, E = RlpError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_offending_input() {
        let err = RlpError::unsupported("float", 1.5);
        assert_eq!(
            err.to_string(),
            "Unsupported type: float (1.5), only bytes, text, unsigned integers and lists of these are accepted"
        );

        let err = RlpError::LengthOverflow(1u128 << 64);
        assert!(err.to_string().contains("18446744073709551616"));
    }
}
