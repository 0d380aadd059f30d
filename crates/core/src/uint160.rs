//! Implementation of `UInt160`, the 160-bit contract identity.

use crate::constants::ADDRESS_SIZE;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 160-bit value uniquely identifying a deployed contract's code.
///
/// Stored little-endian, displayed as `0x` followed by big-endian hex, the
/// Neo convention. Equality and ordering are byte-exact; the value is opaque
/// to the trust-decision core beyond comparison and signing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt160([u8; ADDRESS_SIZE]);

impl UInt160 {
    /// Length of the identity in bytes.
    pub const LENGTH: usize = ADDRESS_SIZE;

    /// Returns the zero identity.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True when every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Creates an identity from exactly 20 little-endian bytes.
    pub fn from_bytes(value: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_SIZE] = value
            .try_into()
            .map_err(|_| Error::InvalidFormat(format!("invalid UInt160 length: {}", value.len())))?;
        Ok(Self(bytes))
    }

    /// The stored little-endian bytes. This is the byte representation group
    /// signatures are computed over.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Copies the stored bytes out.
    pub fn to_array(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for UInt160 {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "0x{}", hex::encode(reversed))
    }
}

impl FromStr for UInt160 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        if hex_str.len() != ADDRESS_SIZE * 2 {
            return Err(Error::InvalidFormat(format!(
                "invalid UInt160 string length: {}",
                s.len()
            )));
        }
        let mut bytes = hex::decode(hex_str)
            .map_err(|e| Error::InvalidFormat(format!("invalid UInt160 hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }
}

impl Serialize for UInt160 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
