//! # Neo trust-decision core
//!
//! The two trust oracles at the heart of block and transaction validation:
//!
//! * **Script classification** — is this bytecode exactly a canonical
//!   single-signature or m-of-n multi-signature verification script, and if
//!   so, which public keys does it embed? See [`classify_script`] and
//!   friends.
//! * **Permission evaluation** — are a contract's manifest group claims
//!   valid for its identity, and may a given caller invoke a given method?
//!   See [`ContractManifest::is_valid`] and [`ContractManifest::can_call`].
//!
//! Both are pure, stateless functions over immutable inputs: no I/O, no
//! shared state, no panics on adversarial bytes. Outer layers consult them
//! once per witness or cross-contract call and decide what a negative
//! answer means — reject the transaction, fall back to generic execution,
//! or charge full verification cost.
//!
//! ## Example
//!
//! ```
//! use neo_trust::{classify_script, create_signature_redeem_script, StandardContract};
//! use neo_trust::ECPoint;
//!
//! let key = ECPoint::from_bytes(&{
//!     let mut bytes = [0u8; 33];
//!     bytes[0] = 0x02;
//!     bytes
//! })
//! .unwrap();
//! let script = create_signature_redeem_script(&key);
//! match classify_script(&script) {
//!     Some(StandardContract::Signature { public_key }) => {
//!         assert_eq!(&public_key, key.as_bytes());
//!     }
//!     other => panic!("expected a signature contract, got {other:?}"),
//! }
//! ```

pub use neo_trust_core::{constants, ecdsa, ECPoint, UInt160};

pub use neo_trust_vm::{
    classify_script, create_multi_sig_redeem_script, create_signature_redeem_script,
    is_multi_sig_contract, is_signature_contract, is_standard_contract, parse_multi_sig_contract,
    InstructionReader, MultiSigContract, MultiSigError, OpCode, ScriptBuilder, ScriptError,
    StandardContract,
};

pub use neo_trust_contract::{
    ContractAbi, ContractEvent, ContractGroup, ContractManifest, ContractMethod,
    ContractParameter, ContractPermission, ContractPermissionDescriptor, WildcardContainer,
};
