//! Programmatic script construction.
//!
//! The builder exists so the platform side of the contract is testable
//! against the classifier: the redeem scripts it produces are byte-for-byte
//! the canonical templates `contract_checks` recognizes.

use crate::error::MultiSigError;
use crate::interop;
use crate::op_code::OpCode;
use neo_trust_core::constants::MAX_ARRAY_SIZE;
use neo_trust_core::ECPoint;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a bare opcode.
    pub fn emit_opcode(&mut self, opcode: OpCode) -> &mut Self {
        self.script.push(opcode as u8);
        self
    }

    /// Emits raw bytes without any framing.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits a data push, choosing the smallest PUSHDATA form that fits.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len <= 0xFF {
            self.emit_opcode(OpCode::PUSHDATA1);
            self.script.push(len as u8);
        } else if len <= 0xFFFF {
            self.emit_opcode(OpCode::PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.emit_opcode(OpCode::PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    /// Emits an integer push, using the small-integer opcodes when the value
    /// fits and the smallest PUSHINT form otherwise.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        if value == -1 {
            return self.emit_opcode(OpCode::PUSHM1);
        }
        if (0..=16).contains(&value) {
            self.script.push(OpCode::PUSH0 as u8 + value as u8);
            return self;
        }
        if let Ok(v) = i8::try_from(value) {
            self.emit_opcode(OpCode::PUSHINT8);
            self.script.extend_from_slice(&v.to_le_bytes());
        } else if let Ok(v) = i16::try_from(value) {
            self.emit_opcode(OpCode::PUSHINT16);
            self.script.extend_from_slice(&v.to_le_bytes());
        } else if let Ok(v) = i32::try_from(value) {
            self.emit_opcode(OpCode::PUSHINT32);
            self.script.extend_from_slice(&v.to_le_bytes());
        } else {
            self.emit_opcode(OpCode::PUSHINT64);
            self.script.extend_from_slice(&value.to_le_bytes());
        }
        self
    }

    /// Emits a syscall of the named interop function.
    pub fn emit_syscall(&mut self, name: &str) -> &mut Self {
        self.emit_opcode(OpCode::SYSCALL);
        self.script
            .extend_from_slice(&interop::interop_name_to_id(name).to_le_bytes());
        self
    }

    /// The accumulated script bytes.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Current script length in bytes.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// True when nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

/// Builds the canonical single-signature verification script for a key.
pub fn create_signature_redeem_script(public_key: &ECPoint) -> Vec<u8> {
    let mut builder = ScriptBuilder::new();
    builder
        .emit_push(public_key.as_bytes())
        .emit_opcode(OpCode::PUSHNULL)
        .emit_syscall(interop::ECDSA_VERIFY);
    builder.to_array()
}

/// Builds the canonical `threshold`-of-`public_keys.len()` multi-signature
/// verification script.
///
/// Key order is preserved; callers wanting the platform's canonical account
/// ordering sort before building.
pub fn create_multi_sig_redeem_script(
    threshold: usize,
    public_keys: &[ECPoint],
) -> Result<Vec<u8>, MultiSigError> {
    let count = public_keys.len();
    if count == 0 || count > MAX_ARRAY_SIZE {
        return Err(MultiSigError::InvalidKeyCount(count));
    }
    if threshold < 1 || threshold > count {
        return Err(MultiSigError::InvalidThreshold(threshold));
    }

    let mut builder = ScriptBuilder::new();
    builder.emit_push_int(threshold as i64);
    for key in public_keys {
        builder.emit_push(key.as_bytes());
    }
    builder
        .emit_push_int(count as i64)
        .emit_opcode(OpCode::PUSHNULL)
        .emit_syscall(interop::ECDSA_CHECK_MULTISIG)
        .emit_opcode(OpCode::RET);
    Ok(builder.to_array())
}
