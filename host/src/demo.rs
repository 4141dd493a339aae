use rlp_canon_lib::{to_hex, Encoder, Value};

use crate::error::HostResult;

/// The demonstration inputs: a pair of strings and two trees of empty lists.
pub fn inputs() -> Vec<Value> {
    let empty = || Value::List(vec![]);
    vec![
        Value::list(["cat", "dog"]),
        Value::list([Value::list([empty(), empty()]), empty()]),
        Value::list([
            empty(),
            Value::list([empty()]),
            Value::list([empty(), Value::list([empty()])]),
        ]),
    ]
}

/// Hex encodings of the demonstration inputs, separated by dashed lines.
pub fn render(encoder: &Encoder) -> HostResult<String> {
    let lines = inputs()
        .iter()
        .map(|value| encoder.encode(value).map(|bytes| to_hex(&bytes)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n-------\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            render(&Encoder::default()).unwrap(),
            "c88363617483646f67\n-------\nc4c2c0c0c0\n-------\nc7c0c1c0c3c0c1c0"
        );
    }
}
