//! The contract manifest model.
//!
//! Layout follows the manifest's JSON shape: the manifest owns groups, an
//! ABI, permissions, and trusts; permissions pair a target descriptor with a
//! method set; wildcard-or-list fields share one container type.

pub mod contract_abi;
pub mod contract_group;
pub mod contract_manifest;
pub mod contract_permission;
pub mod wildcard_container;

pub use contract_abi::{ContractAbi, ContractEvent, ContractMethod, ContractParameter};
pub use contract_group::ContractGroup;
pub use contract_manifest::ContractManifest;
pub use contract_permission::{ContractPermission, ContractPermissionDescriptor};
pub use wildcard_container::WildcardContainer;
