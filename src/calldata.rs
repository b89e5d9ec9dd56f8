//! Per-command call-data builders.
//!
//! Each builder maps a command to the contract function it targets, pulls the
//! fields that function expects out of the argument bag in contract order and
//! hands the resulting argument list to the encoder.

use std::fmt;

use clap::ValueEnum;
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::encoding::{prepare_call_data, EncodableValue};
use crate::error::PrepError;

/// Commands with a call-data builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// Issue a new non-fungible token
    NftIssue,
    /// Create an instance of an issued non-fungible token
    NftCreate,
    /// Grant special roles on a token to an address
    SetSpecialRoles,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::NftIssue => "nft-issue",
            Command::NftCreate => "nft-create",
            Command::SetSpecialRoles => "set-special-roles",
        };
        write!(f, "{}", name)
    }
}

/// Named transaction arguments parsed from the input JSON object.
///
/// The bag is read-only; builders pull fields from it by name and reject
/// anything missing or of the wrong kind before any output is produced.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentBag(Map<String, Value>);

impl ArgumentBag {
    fn get(&self, command: Command, field: &str) -> Result<&Value, PrepError> {
        self.0.get(field).ok_or_else(|| PrepError::MissingField {
            command,
            field: field.to_string(),
        })
    }

    /// A field that must be a JSON string.
    fn text(&self, command: Command, field: &str) -> Result<EncodableValue, PrepError> {
        match self.get(command, field)? {
            Value::String(s) => Ok(EncodableValue::Text(s.clone())),
            other => Err(PrepError::UnsupportedValue(format!(
                "field '{}' must be a string, got {}",
                field, other
            ))),
        }
    }

    /// A field that must be a non-negative JSON integer.
    fn int(&self, command: Command, field: &str) -> Result<EncodableValue, PrepError> {
        match self.get(command, field)? {
            Value::Number(n) => n.as_u64().map(EncodableValue::Int).ok_or_else(|| {
                PrepError::UnsupportedValue(format!(
                    "field '{}' must be a non-negative integer, got {}",
                    field, n
                ))
            }),
            other => Err(PrepError::UnsupportedValue(format!(
                "field '{}' must be a non-negative integer, got {}",
                field, other
            ))),
        }
    }

    /// A field holding an address string, parsed into its 32-byte form.
    fn address(&self, command: Command, field: &str) -> Result<EncodableValue, PrepError> {
        match self.get(command, field)? {
            Value::String(s) => Ok(EncodableValue::Address(s.parse()?)),
            other => Err(PrepError::UnsupportedValue(format!(
                "field '{}' must be an address string, got {}",
                field, other
            ))),
        }
    }

    /// A field of any encodable kind: string, integer or (nested) list.
    fn value(&self, command: Command, field: &str) -> Result<EncodableValue, PrepError> {
        EncodableValue::from_json(self.get(command, field)?)
    }
}

/// Call-data for issuing a new non-fungible token.
pub fn prepare_nft_issue(args: &ArgumentBag) -> Result<String, PrepError> {
    let cmd = Command::NftIssue;
    Ok(prepare_call_data(
        "issueNonFungible",
        &EncodableValue::List(vec![
            args.text(cmd, "token_name")?,
            args.text(cmd, "token_ticker")?,
        ]),
    ))
}

/// Call-data for granting special roles on a token to an address.
pub fn prepare_set_special_role(args: &ArgumentBag) -> Result<String, PrepError> {
    let cmd = Command::SetSpecialRoles;
    Ok(prepare_call_data(
        "setSpecialRole",
        &EncodableValue::List(vec![
            args.text(cmd, "token_identifier")?,
            args.address(cmd, "address")?,
            args.value(cmd, "roles")?,
        ]),
    ))
}

/// Call-data for creating an instance of an issued non-fungible token.
pub fn prepare_nft_create(args: &ArgumentBag) -> Result<String, PrepError> {
    let cmd = Command::NftCreate;
    Ok(prepare_call_data(
        "ESDTNFTCreate",
        &EncodableValue::List(vec![
            args.text(cmd, "token_identifier")?,
            args.int(cmd, "initial_quantity")?,
            args.text(cmd, "nft_name")?,
            args.int(cmd, "royalties")?,
            args.text(cmd, "hash")?,
            args.text(cmd, "attributes")?,
            // A single URI or a list of them
            args.value(cmd, "uri")?,
        ]),
    ))
}

/// Build the call-data string for a command from its argument bag.
pub fn prepare_args(command: Command, args: &ArgumentBag) -> Result<String, PrepError> {
    debug!("Preparing call-data for command '{}'", command);
    match command {
        Command::NftIssue => prepare_nft_issue(args),
        Command::NftCreate => prepare_nft_create(args),
        Command::SetSpecialRoles => prepare_set_special_role(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> ArgumentBag {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::NftIssue.to_string(), "nft-issue");
        assert_eq!(Command::NftCreate.to_string(), "nft-create");
        assert_eq!(Command::SetSpecialRoles.to_string(), "set-special-roles");
    }

    #[test]
    fn test_missing_field_names_field_and_command() {
        let args = bag(json!({ "token_name": "Foo" }));
        let err = prepare_nft_issue(&args).unwrap_err();
        match err {
            PrepError::MissingField { command, field } => {
                assert_eq!(command, Command::NftIssue);
                assert_eq!(field, "token_ticker");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_text_field_rejects_numbers() {
        let args = bag(json!({ "token_name": 7, "token_ticker": "FOO-1a2b" }));
        assert!(matches!(
            prepare_nft_issue(&args),
            Err(PrepError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_int_field_rejects_floats() {
        let args = bag(json!({
            "token_identifier": "FOO-1a2b",
            "initial_quantity": 1,
            "nft_name": "Foo #1",
            "royalties": 2.5,
            "hash": "",
            "attributes": "",
            "uri": "u"
        }));
        assert!(matches!(
            prepare_nft_create(&args),
            Err(PrepError::UnsupportedValue(_))
        ));
    }
}
