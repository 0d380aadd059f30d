//! Contract group claims.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use neo_trust_core::constants::SIGNATURE_SIZE;
use neo_trust_core::{ecdsa, ECPoint, UInt160};
use serde::{Deserialize, Serialize};

/// A claimed association between a contract and a public key.
///
/// The claim is authenticated by a signature over the specific contract
/// identity — not a reusable message — so a valid group entry cannot be
/// replayed onto a different contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractGroup {
    /// The group's public key.
    pub public_key: ECPoint,

    /// Signature by `public_key` over the contract identity's bytes.
    pub signature: Vec<u8>,
}

impl ContractGroup {
    /// Creates a group claim from its parts.
    pub fn new(public_key: ECPoint, signature: Vec<u8>) -> Self {
        Self {
            public_key,
            signature,
        }
    }

    /// True when this entry's signature is valid for `contract_hash`.
    pub fn is_valid_for(&self, contract_hash: &UInt160) -> bool {
        if self.signature.len() != SIGNATURE_SIZE {
            log::debug!(
                "group {} carries a {}-byte signature",
                self.public_key,
                self.signature.len()
            );
            return false;
        }
        ecdsa::verify_signature(&self.public_key, contract_hash.as_bytes(), &self.signature)
    }
}

// JSON carries the key as hex and the signature as base64.
#[derive(Serialize, Deserialize)]
struct ContractGroupJson {
    pubkey: ECPoint,
    signature: String,
}

impl Serialize for ContractGroup {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ContractGroupJson {
            pubkey: self.public_key,
            signature: BASE64.encode(&self.signature),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContractGroup {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let json = ContractGroupJson::deserialize(deserializer)?;
        let signature = BASE64
            .decode(json.signature.as_bytes())
            .map_err(|e| serde::de::Error::custom(format!("invalid group signature: {e}")))?;
        Ok(Self {
            public_key: json.pubkey,
            signature,
        })
    }
}
