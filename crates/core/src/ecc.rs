//! Compressed secp256r1 public keys.

use crate::constants::PUBLIC_KEY_SIZE;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A compressed secp256r1 public key.
///
/// Construction checks only the encoding shape (33 bytes, 0x02/0x03 prefix);
/// whether the bytes name a real curve point is established by the
/// verification primitive when a signature is actually checked. Equality is
/// byte-exact, which is what group-membership tests rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ECPoint([u8; PUBLIC_KEY_SIZE]);

impl ECPoint {
    /// Creates a key from exactly 33 compressed-point bytes.
    pub fn from_bytes(value: &[u8]) -> Result<Self> {
        let bytes: [u8; PUBLIC_KEY_SIZE] = value.try_into().map_err(|_| {
            Error::InvalidKey(format!("invalid public key length: {}", value.len()))
        })?;
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(Error::InvalidKey(format!(
                "invalid compression prefix: 0x{:02x}",
                bytes[0]
            )));
        }
        Ok(Self(bytes))
    }

    /// Parses a key from its 66-character hex form.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes =
            hex::decode(s).map_err(|e| Error::InvalidKey(format!("invalid public key hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// The compressed-point bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copies the compressed-point bytes out.
    pub fn to_array(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl fmt::Display for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for ECPoint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for ECPoint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "03b209fd4f53a7170ea4444e0cb0a6bb6a53c2bd016926989cf85f9b0fba17a70c";

    #[test]
    fn hex_round_trip() {
        let key = ECPoint::from_hex(KEY_HEX).unwrap();
        assert_eq!(key.to_string(), KEY_HEX);
        assert_eq!(key.as_bytes().len(), PUBLIC_KEY_SIZE);
    }

    #[test]
    fn rejects_bad_prefix_and_length() {
        assert!(ECPoint::from_bytes(&[0x04; 33]).is_err());
        assert!(ECPoint::from_bytes(&[0x02; 32]).is_err());
        assert!(ECPoint::from_bytes(&[0x02; 34]).is_err());
        assert!(ECPoint::from_bytes(&[0x02; 33]).is_ok());
    }

    #[test]
    fn serde_uses_hex_string() {
        let key = ECPoint::from_hex(KEY_HEX).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{KEY_HEX}\""));
        let back: ECPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
