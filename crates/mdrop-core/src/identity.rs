//! # Account Addresses
//!
//! `Address` is the fixed-width account identifier used throughout the
//! stack: 20 bytes, rendered as 0x-prefixed lowercase hex. The newtype
//! prevents accidental confusion with other 20-byte values and keeps all
//! parsing and validation in one place.
//!
//! ## Security Invariant
//!
//! The zero address is rejected at parse time. Distribution lists are
//! operator-supplied; a zero entry is always a data-preparation mistake
//! and silently accepting it would burn the allocation.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// A 20-byte account address.
///
/// Serializes as a 0x-prefixed lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Wrap raw address bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse an address from a hex string, with or without `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAddress`] if the input is not exactly
    /// 40 hex characters, contains invalid hex, or is the zero address.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let cleaned = s.trim().strip_prefix("0x").unwrap_or(s.trim());
        if cleaned.len() != 40 {
            return Err(CoreError::InvalidAddress(format!(
                "expected 40 hex chars, got {}",
                cleaned.len()
            )));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(cleaned, &mut bytes)
            .map_err(|e| CoreError::InvalidAddress(format!("invalid hex: {e}")))?;
        if bytes == [0u8; 20] {
            return Err(CoreError::InvalidAddress("zero address".to_string()));
        }
        Ok(Self(bytes))
    }

    /// Access the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_prefix() {
        let addr = Address::parse("0x111423FA917A010A4f62c9B2742708744B4CbFc4").unwrap();
        assert_eq!(addr.as_bytes()[0], 0x11);
        assert_eq!(addr.as_bytes()[19], 0xc4);
    }

    #[test]
    fn test_parse_without_prefix() {
        let addr = Address::parse("a7a0796e99c46d0643f9266722244a30564754d9").unwrap();
        assert_eq!(addr.as_bytes()[0], 0xa7);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(Address::parse("0x1234").is_err());
        assert!(Address::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        assert!(Address::parse("0xzz1423fa917a010a4f62c9b2742708744b4cbfc4").is_err());
    }

    #[test]
    fn test_parse_rejects_zero_address() {
        let err = Address::parse(&format!("0x{}", "00".repeat(20))).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAddress(_)));
    }

    #[test]
    fn test_display_lowercase_with_prefix() {
        let addr = Address::parse("0x2B5eBa3377E57d333498653bcae8979A05b7c5e1").unwrap();
        assert_eq!(
            addr.to_string(),
            "0x2b5eba3377e57d333498653bcae8979a05b7c5e1"
        );
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let addr = Address::from_bytes([0xab; 20]);
        let parsed: Address = addr.to_string().parse().unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let addr = Address::from_bytes([0x11; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "11".repeat(20)));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_serde_rejects_zero_address() {
        let json = format!("\"0x{}\"", "00".repeat(20));
        assert!(serde_json::from_str::<Address>(&json).is_err());
    }
}
