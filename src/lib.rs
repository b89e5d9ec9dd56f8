//! Call-data preparation for ESDT NFT transactions.
//!
//! This library turns structured transaction parameters into the wire-format
//! string expected by a smart contract's call-data field: a function name
//! followed by hex-encoded arguments, all joined by `@`.
//!
//! The library is organized into a few small modules:
//! - `encoding`: canonical hex encoding of argument values
//! - `calldata`: per-command call-data builders
//! - `address`: account address parsing and hex rendering
//! - `error`: error types

pub mod address;
pub mod calldata;
pub mod encoding;
pub mod error;

// Re-export key types for convenience
pub use address::Address;
pub use calldata::{prepare_args, ArgumentBag, Command};
pub use encoding::{hex_encode, prepare_call_data, EncodableValue};
pub use error::PrepError;
