//! Shared primitives for the Neo trust-decision core.
//!
//! This crate holds the types every other layer agrees on: the 160-bit
//! contract identity ([`UInt160`]), the compressed secp256r1 public key
//! ([`ECPoint`]), and the signature-verification primitive used to check
//! manifest group claims. Everything here is a plain value type, safe to
//! share across concurrent validation workers.

pub mod constants;
pub mod ecc;
pub mod ecdsa;
pub mod error;
pub mod uint160;

pub use ecc::ECPoint;
pub use error::{Error, Result};
pub use uint160::UInt160;
