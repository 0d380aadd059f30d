//! Contract manifest model and permission evaluation.
//!
//! A manifest is the declarative contract a deployer publishes alongside
//! code: name, ABI, key-ownership group claims, call permissions, and trust
//! declarations. This crate models that structure and answers the two
//! trust questions the platform asks of it on every cross-contract call:
//!
//! * are the manifest's group claims cryptographically valid for a specific
//!   contract identity ([`ContractManifest::is_valid`]), and
//! * may a given caller invoke a given method
//!   ([`ContractManifest::can_call`], [`ContractPermission::is_allowed`]).
//!
//! Evaluation never mutates a manifest and has no failure mode beyond a
//! boolean negative; structural problems are caught at decode time.

pub mod error;
pub mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    ContractAbi, ContractEvent, ContractGroup, ContractManifest, ContractMethod,
    ContractParameter, ContractPermission, ContractPermissionDescriptor, WildcardContainer,
};
