//! Protocol constants shared across the trust-decision core.

/// The length of a contract identity (script hash) in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// The length of a compressed secp256r1 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 33;

/// The length of a secp256r1 signature (`r || s`) in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Maximum number of elements in a VM array. Bounds the number of public
/// keys a multi-signature verification script may declare.
pub const MAX_ARRAY_SIZE: usize = 1024;
