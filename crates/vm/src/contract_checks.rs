//! Recognition of canonical verification scripts.
//!
//! These templates are exactly the scripts the platform generates for
//! standard single-key and multi-key accounts. Matching is byte-level: a
//! script that is semantically equivalent but structured differently — extra
//! no-ops, reordered pushes, an alternate integer encoding — is not a
//! standard contract. That rigidity is what lets the surrounding system
//! charge predictable verification cost without executing anything.
//!
//! Every entry point is total over arbitrary byte sequences; malformed or
//! adversarial input yields a plain negative, never a fault.

use crate::interop;
use crate::op_code::OpCode;
use crate::script::InstructionReader;
use neo_trust_core::constants::{MAX_ARRAY_SIZE, PUBLIC_KEY_SIZE};

/// Length of a canonical single-signature verification script.
const SIGNATURE_CONTRACT_SIZE: usize = 41;

/// The keys and threshold extracted from a multi-signature script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSigContract {
    /// Declared signature threshold (`m` of m-of-n).
    pub threshold: usize,
    /// The pushed public keys, in script order. Each is at least 33 bytes.
    pub public_keys: Vec<Vec<u8>>,
}

/// Classification of a verification script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardContract {
    /// Canonical single-signature script.
    Signature {
        /// The embedded compressed public key.
        public_key: [u8; PUBLIC_KEY_SIZE],
    },
    /// Canonical m-of-n multi-signature script.
    MultiSig {
        /// The embedded public keys, in script order.
        public_keys: Vec<Vec<u8>>,
        /// Declared signature threshold.
        threshold: usize,
    },
}

/// Reads a count from a numeric push instruction: the small-integer opcodes
/// or a 1/2-byte immediate. Counts outside `1..=MAX_ARRAY_SIZE` are not
/// valid key or threshold declarations.
fn push_count(opcode: OpCode, operand: &[u8]) -> Option<usize> {
    let count = match opcode {
        op if (OpCode::PUSH1 as u8..=OpCode::PUSH16 as u8).contains(&(op as u8)) => {
            (op as u8 - OpCode::PUSH1 as u8) as usize + 1
        }
        OpCode::PUSHINT8 => *operand.first()? as usize,
        OpCode::PUSHINT16 => u16::from_le_bytes(operand.try_into().ok()?) as usize,
        _ => return None,
    };
    (1..=MAX_ARRAY_SIZE).contains(&count).then_some(count)
}

/// Parses `script` as a canonical multi-signature verification script,
/// returning the embedded keys and threshold.
///
/// The script must be, instruction for instruction: a threshold push, one
/// PUSHDATA1 per key, a key-count push equal to the number of keys, PUSHNULL,
/// a SYSCALL of the multi-signature check, and RET as the final byte. Any
/// decode error, structural deviation, or trailing data is a `None`.
pub fn parse_multi_sig_contract(script: &[u8]) -> Option<MultiSigContract> {
    let mut reader = InstructionReader::new(script);

    let (opcode, operand) = reader.next_instruction().ok()?;
    let threshold = push_count(opcode, operand)?;

    let mut public_keys = Vec::new();
    let (mut opcode, mut operand) = reader.next_instruction().ok()?;
    while opcode == OpCode::PUSHDATA1 {
        if operand.len() < PUBLIC_KEY_SIZE {
            return None;
        }
        public_keys.push(operand.to_vec());
        if public_keys.len() > MAX_ARRAY_SIZE {
            return None;
        }
        (opcode, operand) = reader.next_instruction().ok()?;
    }
    if public_keys.len() < threshold {
        return None;
    }

    let declared_count = push_count(opcode, operand)?;
    if declared_count != public_keys.len() {
        return None;
    }

    let (opcode, _) = reader.next_instruction().ok()?;
    if opcode != OpCode::PUSHNULL {
        return None;
    }

    let (opcode, operand) = reader.next_instruction().ok()?;
    if opcode != OpCode::SYSCALL
        || u32::from_le_bytes(operand.try_into().ok()?) != *interop::ECDSA_CHECK_MULTISIG_ID
    {
        return None;
    }

    let (opcode, _) = reader.next_instruction().ok()?;
    if opcode != OpCode::RET || reader.ip() != script.len() {
        return None;
    }

    Some(MultiSigContract {
        threshold,
        public_keys,
    })
}

fn signature_contract_key(script: &[u8]) -> Option<[u8; PUBLIC_KEY_SIZE]> {
    if script.len() != SIGNATURE_CONTRACT_SIZE {
        return None;
    }
    let mut reader = InstructionReader::new(script);

    let (opcode, operand) = reader.next_instruction().ok()?;
    if opcode != OpCode::PUSHDATA1 || operand.len() != PUBLIC_KEY_SIZE {
        return None;
    }
    let public_key: [u8; PUBLIC_KEY_SIZE] = operand.try_into().ok()?;

    let (opcode, _) = reader.next_instruction().ok()?;
    if opcode != OpCode::PUSHNULL {
        return None;
    }

    let (opcode, operand) = reader.next_instruction().ok()?;
    if opcode != OpCode::SYSCALL
        || u32::from_le_bytes(operand.try_into().ok()?) != *interop::ECDSA_VERIFY_ID
    {
        return None;
    }

    Some(public_key)
}

/// True when `script` is exactly the canonical single-signature template.
pub fn is_signature_contract(script: &[u8]) -> bool {
    signature_contract_key(script).is_some()
}

/// True when `script` is a canonical multi-signature template.
pub fn is_multi_sig_contract(script: &[u8]) -> bool {
    parse_multi_sig_contract(script).is_some()
}

/// True when `script` is either standard template.
pub fn is_standard_contract(script: &[u8]) -> bool {
    is_signature_contract(script) || is_multi_sig_contract(script)
}

/// Classifies `script`, extracting the embedded keys when it is one of the
/// two standard templates.
pub fn classify_script(script: &[u8]) -> Option<StandardContract> {
    if let Some(public_key) = signature_contract_key(script) {
        return Some(StandardContract::Signature { public_key });
    }
    parse_multi_sig_contract(script).map(|contract| StandardContract::MultiSig {
        public_keys: contract.public_keys,
        threshold: contract.threshold,
    })
}
