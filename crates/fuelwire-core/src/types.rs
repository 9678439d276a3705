//! Strong type definitions for fuelwire.
//!
//! Hash-like fields are newtypes so an address can't be passed where an
//! amount is expected.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Width in bytes of every hash field on the wire.
pub const BYTES32_LEN: usize = 32;

/// A raw 32-byte value: addresses, asset ids, contract ids and state roots.
///
/// On the wire this is exactly 32 bytes, with no length prefix and no padding.
/// In text it is rendered as `0x`-prefixed lowercase hex.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes32(pub [u8; BYTES32_LEN]);

impl Bytes32 {
    /// The all-zero value.
    pub const ZERO: Self = Self([0u8; BYTES32_LEN]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; BYTES32_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; BYTES32_LEN] {
        &self.0
    }

    /// Convert to `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let mut arr = [0u8; BYTES32_LEN];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = hex::encode(self.0);
        write!(f, "Bytes32({}..{})", &hex[..8], &hex[56..])
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Bytes32 {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BYTES32_LEN]> for Bytes32 {
    fn from(bytes: [u8; BYTES32_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Bytes32 {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; BYTES32_LEN] = slice.try_into()?;
        Ok(Self(arr))
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B256: &str = "0xd5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b";

    #[test]
    fn test_hex_roundtrip() {
        let value = Bytes32::from_hex(B256).unwrap();
        assert_eq!(value.to_hex(), B256);
        assert_eq!(value.0[0], 0xd5);
        assert_eq!(value.0[31], 0x0b);
    }

    #[test]
    fn test_from_hex_without_prefix() {
        let with = Bytes32::from_hex(B256).unwrap();
        let without = Bytes32::from_hex(&B256[2..]).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert!(Bytes32::from_hex("0xd5579c").is_err());
        assert!(Bytes32::from_hex(&format!("{}00", B256)).is_err());
    }

    #[test]
    fn test_display_and_debug() {
        let value = Bytes32::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", value), format!("0x{}", "ab".repeat(32)));
        assert_eq!(format!("{:?}", value), "Bytes32(abababab..abababab)");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let value = Bytes32::from_hex(B256).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{}\"", B256));

        let back: Bytes32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_zero() {
        assert_eq!(Bytes32::ZERO, Bytes32::default());
        assert_eq!(Bytes32::ZERO.to_hex(), format!("0x{}", "00".repeat(32)));
    }
}
