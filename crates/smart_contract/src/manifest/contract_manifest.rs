//! The contract manifest.

use crate::error::{Error, Result};
use crate::manifest::{ContractAbi, ContractGroup, ContractPermission, WildcardContainer};
use neo_trust_core::UInt160;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The declarative contract a deployer publishes alongside code.
///
/// Immutable once loaded for a validation pass: both trust questions —
/// [`is_valid`](Self::is_valid) and [`can_call`](Self::can_call) — read the
/// manifest without mutating it, so a single instance can serve arbitrarily
/// many concurrent validation workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractManifest {
    /// Display name of the contract.
    pub name: String,

    /// Key-ownership claims, each authenticated by a signature over the
    /// contract identity.
    #[serde(default)]
    pub groups: Vec<ContractGroup>,

    /// Standards the contract declares support for (informational).
    #[serde(rename = "supportedstandards", default)]
    pub supported_standards: Vec<String>,

    /// The contract's ABI.
    #[serde(default)]
    pub abi: ContractAbi,

    /// Call permissions, evaluated as an existential OR.
    #[serde(default)]
    pub permissions: Vec<ContractPermission>,

    /// Contracts this contract trusts to call it; consumed by external
    /// policy, not evaluated here.
    #[serde(default)]
    pub trusts: WildcardContainer<UInt160>,

    /// Opaque application-defined metadata.
    #[serde(default)]
    pub extra: Option<Value>,
}

impl ContractManifest {
    /// Creates a manifest with the default trust posture: a single
    /// wildcard/wildcard permission (any caller may call any method), no
    /// groups, no standards, an empty ABI, and an empty trust list.
    ///
    /// This is exactly what a freshly deployed contract gets when it does
    /// not customize its manifest.
    pub fn new(name: String) -> Self {
        Self {
            name,
            groups: Vec::new(),
            supported_standards: Vec::new(),
            abi: ContractAbi::default(),
            permissions: vec![ContractPermission::default_wildcard()],
            trusts: WildcardContainer::create(Vec::new()),
            extra: None,
        }
    }

    /// True when every group claim is cryptographically valid for
    /// `contract_hash` — vacuously true with no groups.
    ///
    /// This is the admission-time check: each group's key holder signed this
    /// specific contract identity, so a claim cannot be replayed onto other
    /// code. Per-call permission evaluation relies on it having been run and
    /// tests membership only.
    pub fn is_valid(&self, contract_hash: &UInt160) -> bool {
        self.groups
            .iter()
            .all(|group| group.is_valid_for(contract_hash))
    }

    /// True when any permission entry grants `caller_hash` (with
    /// `caller_manifest`) the right to invoke `method` on this contract.
    ///
    /// Pure existential OR over the entries in declaration order; the scan
    /// short-circuits on the first grant, which is not observable.
    pub fn can_call(
        &self,
        caller_hash: &UInt160,
        caller_manifest: &ContractManifest,
        method: &str,
    ) -> bool {
        self.permissions
            .iter()
            .any(|permission| permission.is_allowed(caller_hash, caller_manifest, method))
    }

    /// True when the manifest declares support for `standard`.
    pub fn supports_standard(&self, standard: &str) -> bool {
        self.supported_standards.iter().any(|s| s == standard)
    }

    /// Structural validation applied at decode time, before a manifest may
    /// reach the permission engine.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidManifest(
                "contract name cannot be empty".to_string(),
            ));
        }
        if self.permissions.is_empty() {
            return Err(Error::InvalidManifest(
                "manifest must declare at least one permission".to_string(),
            ));
        }
        for permission in &self.permissions {
            permission.validate()?;
        }
        self.abi.validate()
    }
}
