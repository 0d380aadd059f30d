//! End-to-end scenarios across both trust oracles.

use neo_trust::{
    classify_script, create_multi_sig_redeem_script, create_signature_redeem_script, ecdsa,
    is_standard_contract, ContractGroup, ContractManifest, ContractPermission, ECPoint,
    StandardContract, UInt160, WildcardContainer,
};
use p256::ecdsa::SigningKey;
use rand::rngs::OsRng;

fn keypair() -> ([u8; 32], ECPoint) {
    let signing_key = SigningKey::random(&mut OsRng);
    let private: [u8; 32] = signing_key.to_bytes().into();
    let public = ecdsa::public_key_from_private(&private).unwrap();
    (private, public)
}

#[test]
fn standard_account_scripts_classify_with_real_keys() {
    let (_, public) = keypair();
    let signature_script = create_signature_redeem_script(&public);
    assert!(is_standard_contract(&signature_script));
    assert_eq!(
        classify_script(&signature_script),
        Some(StandardContract::Signature {
            public_key: public.to_array()
        })
    );

    let members: Vec<ECPoint> = (0..5).map(|_| keypair().1).collect();
    let multi_sig_script = create_multi_sig_redeem_script(3, &members).unwrap();
    match classify_script(&multi_sig_script) {
        Some(StandardContract::MultiSig {
            public_keys,
            threshold,
        }) => {
            assert_eq!(threshold, 3);
            assert_eq!(public_keys.len(), 5);
            for (parsed, member) in public_keys.iter().zip(&members) {
                assert_eq!(parsed.as_slice(), member.as_bytes());
            }
        }
        other => panic!("unexpected classification: {other:?}"),
    }
}

#[test]
fn default_manifests_allow_any_call_between_contracts() {
    let a = ContractManifest::new("A".to_string());
    let b = ContractManifest::new("B".to_string());

    // A's wildcard default admits any caller, whatever B's contents.
    assert!(a.can_call(&UInt160::zero(), &b, "method1"));
    assert!(a.can_call(&UInt160::from([0xFE; 20]), &b, "method1"));
}

#[test]
fn admission_then_cheap_membership_checks() {
    // Deploy-time: contract C claims membership in a vendor group by
    // signing C's identity with the group key.
    let contract_hash = UInt160::from([0x42; 20]);
    let (group_private, group_public) = keypair();
    let claim = ecdsa::sign_message(&group_private, contract_hash.as_bytes()).unwrap();

    let mut caller_manifest = ContractManifest::new("Caller".to_string());
    caller_manifest
        .groups
        .push(ContractGroup::new(group_public, claim));

    // Admission: the claim verifies for C and only for C.
    assert!(caller_manifest.is_valid(&contract_hash));
    assert!(!caller_manifest.is_valid(&UInt160::zero()));

    // Call-time: a target that trusts the vendor group admits C by key
    // membership, restricted to the named methods.
    let mut target = ContractManifest::new("Target".to_string());
    target.permissions = vec![ContractPermission::for_group(
        group_public,
        WildcardContainer::create(vec!["transfer".to_string()]),
    )];

    assert!(target.can_call(&contract_hash, &caller_manifest, "transfer"));
    assert!(!target.can_call(&contract_hash, &caller_manifest, "mint"));

    // A caller without the group claim is refused outright.
    let stranger = ContractManifest::new("Stranger".to_string());
    assert!(!target.can_call(&contract_hash, &stranger, "transfer"));
}

#[test]
fn decoded_manifest_drives_permission_checks() {
    // A manifest as the wire delivers it: hash-scoped grant on two methods.
    let json = r#"{
        "groups": [],
        "supportedstandards": ["NEP-17"],
        "name": "Token",
        "abi": {
            "methods": [
                {"name": "transfer", "parameters": [], "returntype": "Boolean", "offset": 0, "safe": false},
                {"name": "balanceOf", "parameters": [], "returntype": "Integer", "offset": 64, "safe": true}
            ],
            "events": []
        },
        "permissions": [
            {"contract": "0x0000000000000000000000000000000000000001", "methods": ["transfer", "balanceOf"]}
        ],
        "trusts": [],
        "extra": null
    }"#;
    let target: ContractManifest = serde_json::from_str(json).unwrap();
    target.validate().unwrap();
    assert!(target.supports_standard("NEP-17"));

    let friend: UInt160 = "0x0000000000000000000000000000000000000001".parse().unwrap();
    let caller = ContractManifest::new("Caller".to_string());

    assert!(target.can_call(&friend, &caller, "transfer"));
    assert!(target.can_call(&friend, &caller, "balanceOf"));
    assert!(!target.can_call(&friend, &caller, "mint"));
    assert!(!target.can_call(&UInt160::zero(), &caller, "transfer"));
}

#[test]
fn hash_scoped_permission_admits_one_caller_only() {
    let friend = UInt160::from([0x01; 20]);
    let caller_manifest = ContractManifest::new("Caller".to_string());

    let mut target = ContractManifest::new("Target".to_string());
    target.permissions = vec![ContractPermission::for_contract(
        friend,
        WildcardContainer::create(vec!["transfer".to_string()]),
    )];

    assert!(target.can_call(&friend, &caller_manifest, "transfer"));
    assert!(!target.can_call(&friend, &caller_manifest, "burn"));
    assert!(!target.can_call(&UInt160::from([0x02; 20]), &caller_manifest, "transfer"));
}
