//! Account address parsing and canonical hex rendering.
//!
//! Addresses are opaque 32-byte account identifiers. The encoder never
//! interprets address bytes; it only asks for their canonical hex form.

use std::str::FromStr;

use crate::error::PrepError;

/// Length of an account address payload in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// Human-readable part of bech32 account addresses.
const ADDRESS_HRP: &str = "erd";

/// An opaque 32-byte account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Canonical lowercase hex form of the address bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = PrepError;

    /// Parse an address from its bech32 form (`erd1...`) or from raw hex,
    /// with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = if s.starts_with(ADDRESS_HRP) && s.contains('1') {
            let (hrp, data) = bech32::decode(s)
                .map_err(|e| PrepError::InvalidAddress(e.to_string()))?;
            if hrp.to_string() != ADDRESS_HRP {
                return Err(PrepError::InvalidAddress(format!(
                    "Unexpected address prefix '{}'",
                    hrp
                )));
            }
            data
        } else {
            hex::decode(s.strip_prefix("0x").unwrap_or(s))
                .map_err(|e| PrepError::InvalidAddress(e.to_string()))?
        };

        if data.len() != ADDRESS_LENGTH {
            return Err(PrepError::InvalidAddress(format!(
                "Expected {} bytes, got {}",
                ADDRESS_LENGTH,
                data.len()
            )));
        }

        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&data);
        Ok(Self(bytes))
    }
}
