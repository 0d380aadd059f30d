//! ECDSA signature verification over secp256r1.
//!
//! The message is hashed with SHA-256 inside the primitive, matching how the
//! platform signs contract identities. Verification failures of any kind,
//! including undecodable keys or signatures, are a plain `false` — the
//! permission engine has no error channel to surface them through.

use crate::constants::SIGNATURE_SIZE;
use crate::ecc::ECPoint;
use crate::error::{Error, Result};
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

/// Verifies a secp256r1 signature over `message` with the given public key.
///
/// `signature` must be the 64-byte `r || s` form. Returns `false` for a bad
/// signature, a wrong-length signature, or a public key that does not decode
/// to a curve point; it never fails loudly.
pub fn verify_signature(public_key: &ECPoint, message: &[u8], signature: &[u8]) -> bool {
    if signature.len() != SIGNATURE_SIZE {
        return false;
    }
    let Ok(key) = VerifyingKey::from_sec1_bytes(public_key.as_bytes()) else {
        log::debug!("signature check against undecodable public key {public_key}");
        return false;
    };
    let Ok(sig) = Signature::from_slice(signature) else {
        return false;
    };
    key.verify(message, &sig).is_ok()
}

/// Signs `message` with a raw 32-byte secp256r1 private key, producing the
/// 64-byte `r || s` signature [`verify_signature`] accepts.
///
/// Used by deployment tooling and tests when constructing group claims; the
/// validation paths only ever verify.
pub fn sign_message(private_key: &[u8; 32], message: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(private_key)
        .map_err(|e| Error::InvalidKey(format!("invalid private key: {e}")))?;
    let signature: Signature = signing_key.sign(message);
    Ok(signature.to_bytes().to_vec())
}

/// Derives the compressed public key for a raw 32-byte private key.
pub fn public_key_from_private(private_key: &[u8; 32]) -> Result<ECPoint> {
    use p256::elliptic_curve::sec1::ToEncodedPoint;

    let signing_key = SigningKey::from_slice(private_key)
        .map_err(|e| Error::InvalidKey(format!("invalid private key: {e}")))?;
    let verifying_key = VerifyingKey::from(&signing_key);
    let encoded = verifying_key.to_encoded_point(true);
    ECPoint::from_bytes(encoded.as_bytes())
}
