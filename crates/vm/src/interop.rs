//! Interop-call identifiers.
//!
//! A syscall names a native platform function by a fixed 32-bit id derived
//! from its dotted name. The two ids the classifier matches against are
//! computed once and reused, like any other protocol constant.

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

/// Name of the single-signature check native call.
pub const ECDSA_VERIFY: &str = "Neo.Crypto.ECDsaVerify";

/// Name of the multi-signature check native call.
pub const ECDSA_CHECK_MULTISIG: &str = "Neo.Crypto.ECDsaCheckMultiSig";

/// Maps an interop name to its fixed identifier: the first four bytes of the
/// name's SHA-256 digest, read little-endian.
pub fn interop_name_to_id(name: &str) -> u32 {
    let digest = Sha256::digest(name.as_bytes());
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Identifier of [`ECDSA_VERIFY`].
pub static ECDSA_VERIFY_ID: Lazy<u32> = Lazy::new(|| interop_name_to_id(ECDSA_VERIFY));

/// Identifier of [`ECDSA_CHECK_MULTISIG`].
pub static ECDSA_CHECK_MULTISIG_ID: Lazy<u32> = Lazy::new(|| interop_name_to_id(ECDSA_CHECK_MULTISIG));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_and_distinct() {
        assert_eq!(*ECDSA_VERIFY_ID, interop_name_to_id(ECDSA_VERIFY));
        assert_eq!(
            *ECDSA_CHECK_MULTISIG_ID,
            interop_name_to_id(ECDSA_CHECK_MULTISIG)
        );
        assert_ne!(*ECDSA_VERIFY_ID, *ECDSA_CHECK_MULTISIG_ID);
    }
}
