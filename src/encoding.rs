//! Canonical hex encoding of call-data arguments.
//!
//! Every argument becomes an even-length lowercase hex string with no `0x`
//! prefix, and parallel arguments are joined with `@`. Lists flatten: each
//! leaf of a nested list contributes its own `@`-separated segment rather
//! than being merged into one hex blob.

use serde_json::Value;

use crate::address::Address;
use crate::error::PrepError;

/// Delimiter between call-data segments.
pub const SEGMENT_DELIMITER: &str = "@";

/// A single encodable call-data argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodableValue {
    Int(u64),
    Text(String),
    Address(Address),
    List(Vec<EncodableValue>),
}

impl EncodableValue {
    /// Convert a raw JSON value into an encodable value.
    ///
    /// Strings become `Text`, non-negative integers become `Int` and arrays
    /// recurse into `List`. Floats, booleans, null and nested objects have no
    /// call-data representation and are rejected.
    pub fn from_json(value: &Value) -> Result<Self, PrepError> {
        match value {
            Value::Number(n) => n.as_u64().map(Self::Int).ok_or_else(|| {
                PrepError::UnsupportedValue(format!(
                    "{} is not a non-negative integer",
                    n
                ))
            }),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            other => Err(PrepError::UnsupportedValue(other.to_string())),
        }
    }
}

/// Pad a hex string with one leading zero if its digit count is odd, so it
/// always describes whole bytes. Idempotent on even-length input.
pub fn pad_even(arg: &str) -> String {
    if arg.len() % 2 == 0 {
        arg.to_string()
    } else {
        format!("0{}", arg)
    }
}

/// Hex-encode an integer: big-endian, no fixed width, whole bytes.
pub fn hex_encode_int(arg: u64) -> String {
    pad_even(&format!("{:x}", arg))
}

/// Hex-encode a string: two hex digits per byte of its UTF-8 encoding.
pub fn hex_encode_string(arg: &str) -> String {
    hex::encode(arg.as_bytes())
}

/// Join pre-encoded segments with the `@` delimiter.
pub fn join_arguments(args: &[String]) -> String {
    args.join(SEGMENT_DELIMITER)
}

/// Hex-encode an argument or a list of arguments.
///
/// Nested lists flatten into sibling segments: `[10, 11, [12, 13]]` encodes
/// as `0a@0b@0c@0d`.
pub fn hex_encode(value: &EncodableValue) -> String {
    match value {
        EncodableValue::Int(n) => hex_encode_int(*n),
        EncodableValue::Text(s) => hex_encode_string(s),
        EncodableValue::Address(a) => a.to_hex(),
        EncodableValue::List(items) => {
            join_arguments(&items.iter().map(hex_encode).collect::<Vec<_>>())
        }
    }
}

/// Assemble the final call-data string: the function name unencoded, then
/// the encoded arguments. An empty argument list yields the bare function
/// name with no trailing delimiter.
pub fn prepare_call_data(function: &str, args: &EncodableValue) -> String {
    let encoded = hex_encode(args);
    if encoded.is_empty() {
        function.to_string()
    } else {
        join_arguments(&[function.to_string(), encoded])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_pad_even() {
        assert_eq!(pad_even("4d2b3"), "04d2b3");
        assert_eq!(pad_even("c0ffee"), "c0ffee");
        assert_eq!(pad_even(""), "");
    }

    #[test]
    fn test_hex_encode_int() {
        assert_eq!(hex_encode_int(1234), "04d2");
        assert_eq!(hex_encode_int(0), "00");
        assert_eq!(hex_encode_int(255), "ff");
        assert_eq!(hex_encode_int(256), "0100");
    }

    #[test]
    fn test_hex_encode_int_round_trip() {
        for n in [0u64, 1, 15, 16, 255, 256, 65535, 65536, 1234567890, u64::MAX] {
            let encoded = hex_encode_int(n);
            assert_eq!(encoded.len() % 2, 0, "odd digit count for {}", n);
            assert_eq!(u64::from_str_radix(&encoded, 16).unwrap(), n);
        }
    }

    #[test]
    fn test_hex_encode_string() {
        assert_eq!(hex_encode_string("\ntest"), "0a74657374");
        assert_eq!(hex_encode_string(""), "");
    }

    #[test]
    fn test_hex_encode_list() {
        let value = EncodableValue::List(vec![
            EncodableValue::Int(1234),
            EncodableValue::Text("test".to_string()),
        ]);
        assert_eq!(hex_encode(&value), "04d2@74657374");
    }

    #[test]
    fn test_nested_lists_flatten() {
        let value = EncodableValue::List(vec![
            EncodableValue::Int(10),
            EncodableValue::Int(11),
            EncodableValue::List(vec![EncodableValue::Int(12), EncodableValue::Int(13)]),
        ]);
        assert_eq!(hex_encode(&value), "0a@0b@0c@0d");
    }

    #[test]
    fn test_hex_encode_address() {
        let hex = "0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1";
        let value = EncodableValue::Address(crate::address::Address::from_str(hex).unwrap());
        assert_eq!(hex_encode(&value), hex);
    }

    #[test]
    fn test_prepare_call_data() {
        let args = EncodableValue::List(vec![
            EncodableValue::Text("Foo".to_string()),
            EncodableValue::Int(1234),
        ]);
        assert_eq!(prepare_call_data("doThing", &args), "doThing@466f6f@04d2");
    }

    #[test]
    fn test_prepare_call_data_empty_args() {
        let args = EncodableValue::List(Vec::new());
        assert_eq!(prepare_call_data("doThing", &args), "doThing");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(
            EncodableValue::from_json(&json!(1234)).unwrap(),
            EncodableValue::Int(1234)
        );
        assert_eq!(
            EncodableValue::from_json(&json!("test")).unwrap(),
            EncodableValue::Text("test".to_string())
        );
        assert_eq!(
            EncodableValue::from_json(&json!([10, "a"])).unwrap(),
            EncodableValue::List(vec![
                EncodableValue::Int(10),
                EncodableValue::Text("a".to_string()),
            ])
        );
    }

    #[test]
    fn test_from_json_rejects_unsupported_kinds() {
        for value in [json!(1.5), json!(-1), json!(true), json!(null), json!({})] {
            assert!(matches!(
                EncodableValue::from_json(&value),
                Err(PrepError::UnsupportedValue(_))
            ));
        }
    }
}
