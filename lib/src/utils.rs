/// Lowercase hex, two digits per byte. For logs and debugging only.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0x00, 0x0a, 0xc8, 0xff]), "000ac8ff");
    }
}
