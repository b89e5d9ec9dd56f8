//! Error types for call-data preparation.

use crate::calldata::Command;

/// Errors produced while building or encoding call-data.
///
/// All failures are detected synchronously, before anything is printed, so a
/// failed run never emits a partial call-data string.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// A required field is absent from the argument bag.
    #[error("Missing required field '{field}' for command '{command}'")]
    MissingField { command: Command, field: String },

    /// A JSON value of a kind that has no call-data representation.
    #[error("Unsupported argument value: {0}")]
    UnsupportedValue(String),

    /// An address string that is neither a valid bech32 address nor raw hex.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}
