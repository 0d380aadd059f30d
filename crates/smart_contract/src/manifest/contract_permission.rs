//! Call permissions.

use crate::error::{Error, Result};
use crate::manifest::{ContractManifest, WildcardContainer};
use neo_trust_core::{ECPoint, UInt160};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single entry of a manifest's permission list: which target contracts
/// the entry covers and which methods it grants on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPermission {
    /// The contracts this permission applies to.
    pub contract: ContractPermissionDescriptor,

    /// The methods it grants: a wildcard or an explicit name set.
    pub methods: WildcardContainer<String>,
}

/// Which contracts a permission entry applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractPermissionDescriptor {
    /// Any contract.
    Wildcard,

    /// Exactly the contract with this identity.
    Hash(UInt160),

    /// Any contract whose own manifest claims membership in the group with
    /// this public key.
    Group(ECPoint),
}

impl ContractPermission {
    /// Creates a permission from its parts.
    pub fn new(contract: ContractPermissionDescriptor, methods: WildcardContainer<String>) -> Self {
        Self { contract, methods }
    }

    /// The permission every manifest starts with: any contract, any method.
    pub fn default_wildcard() -> Self {
        Self {
            contract: ContractPermissionDescriptor::Wildcard,
            methods: WildcardContainer::create_wildcard(),
        }
    }

    /// A permission scoped to one contract identity.
    pub fn for_contract(hash: UInt160, methods: WildcardContainer<String>) -> Self {
        Self {
            contract: ContractPermissionDescriptor::Hash(hash),
            methods,
        }
    }

    /// A permission scoped to a key group.
    pub fn for_group(public_key: ECPoint, methods: WildcardContainer<String>) -> Self {
        Self {
            contract: ContractPermissionDescriptor::Group(public_key),
            methods,
        }
    }

    /// Evaluates this entry against a candidate caller.
    ///
    /// Identity matches by the descriptor variant; a group descriptor tests
    /// key membership in the caller's manifest only — group signatures were
    /// already checked once, at admission, by
    /// [`ContractManifest::is_valid`], and are not re-verified per call.
    /// When identity matches, the method must be in the method set (or the
    /// set is a wildcard). Comparison is exact and case-sensitive.
    pub fn is_allowed(
        &self,
        caller_hash: &UInt160,
        caller_manifest: &ContractManifest,
        method: &str,
    ) -> bool {
        match &self.contract {
            ContractPermissionDescriptor::Wildcard => {}
            ContractPermissionDescriptor::Hash(hash) => {
                if hash != caller_hash {
                    return false;
                }
            }
            ContractPermissionDescriptor::Group(key) => {
                if !caller_manifest
                    .groups
                    .iter()
                    .any(|group| group.public_key == *key)
                {
                    return false;
                }
            }
        }
        self.methods.contains(method)
    }

    /// Structural validation applied at decode time.
    pub fn validate(&self) -> Result<()> {
        if let Some(methods) = self.methods.values() {
            for method in methods {
                if method.is_empty() {
                    return Err(Error::InvalidManifest(
                        "permission method name cannot be empty".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl ContractPermissionDescriptor {
    /// True for the wildcard descriptor.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// True for a specific-contract descriptor.
    pub fn is_hash(&self) -> bool {
        matches!(self, Self::Hash(_))
    }

    /// True for a group descriptor.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

// JSON encodes the descriptor as a bare string: "*", a 0x-prefixed contract
// hash, or a hex public key. The string length disambiguates.
impl Serialize for ContractPermissionDescriptor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Wildcard => serializer.serialize_str("*"),
            Self::Hash(hash) => serializer.collect_str(hash),
            Self::Group(key) => serializer.collect_str(key),
        }
    }
}

impl<'de> Deserialize<'de> for ContractPermissionDescriptor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == "*" {
            return Ok(Self::Wildcard);
        }
        match s.strip_prefix("0x").unwrap_or(&s).len() {
            40 => s
                .parse()
                .map(Self::Hash)
                .map_err(serde::de::Error::custom),
            66 => ECPoint::from_hex(&s)
                .map(Self::Group)
                .map_err(serde::de::Error::custom),
            len => Err(serde::de::Error::custom(format!(
                "permission descriptor must be \"*\", a contract hash, or a public key; got {len} hex chars"
            ))),
        }
    }
}
