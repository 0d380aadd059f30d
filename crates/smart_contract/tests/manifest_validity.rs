//! Group-claim validation against real signatures.

use neo_trust_contract::{ContractGroup, ContractManifest};
use neo_trust_core::{ecdsa, ECPoint, UInt160};
use p256::ecdsa::SigningKey;
use rand::rngs::OsRng;

fn keypair() -> ([u8; 32], ECPoint) {
    let signing_key = SigningKey::random(&mut OsRng);
    let private: [u8; 32] = signing_key.to_bytes().into();
    let public = ecdsa::public_key_from_private(&private).unwrap();
    (private, public)
}

fn signed_group(private: &[u8; 32], public: ECPoint, hash: &UInt160) -> ContractGroup {
    let signature = ecdsa::sign_message(private, hash.as_bytes()).unwrap();
    ContractGroup::new(public, signature)
}

#[test]
fn all_groups_must_verify() {
    let contract_hash = UInt160::from([1, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let mut manifest = ContractManifest::new("Test".to_string());

    // Valid with no groups.
    assert!(manifest.is_valid(&contract_hash));

    // Three correctly signed claims.
    for _ in 0..3 {
        let (private, public) = keypair();
        manifest
            .groups
            .push(signed_group(&private, public, &contract_hash));
    }
    assert!(manifest.is_valid(&contract_hash));

    // The same claims do not transfer to a different identity.
    let other_hash =
        UInt160::from([4, 5, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert!(!manifest.is_valid(&other_hash));

    // One claim signed over the wrong message poisons the whole manifest.
    let (private, public) = keypair();
    let bogus_signature = ecdsa::sign_message(&private, &[1, 2, 3]).unwrap();
    manifest
        .groups
        .push(ContractGroup::new(public, bogus_signature));
    assert!(!manifest.is_valid(&contract_hash));
}

#[test]
fn flipping_one_signature_bit_invalidates_the_manifest() {
    let contract_hash = UInt160::from([0xAB; 20]);
    let mut manifest = ContractManifest::new("Test".to_string());
    for _ in 0..2 {
        let (private, public) = keypair();
        manifest
            .groups
            .push(signed_group(&private, public, &contract_hash));
    }
    assert!(manifest.is_valid(&contract_hash));

    manifest.groups[1].signature[17] ^= 0x04;
    assert!(!manifest.is_valid(&contract_hash));
}

#[test]
fn group_membership_does_not_depend_on_signature_checks() {
    use neo_trust_contract::{ContractPermission, WildcardContainer};

    // A caller manifest whose group entry carries a garbage signature: the
    // per-call membership test matches by key equality alone, because
    // signature validity was an admission-time question.
    let (_, public) = keypair();
    let mut caller_manifest = ContractManifest::new("Caller".to_string());
    caller_manifest
        .groups
        .push(ContractGroup::new(public, vec![0u8; 64]));

    let permission =
        ContractPermission::for_group(public, WildcardContainer::create_wildcard());
    assert!(permission.is_allowed(&UInt160::zero(), &caller_manifest, "anyMethod"));
}
