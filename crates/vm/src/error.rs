//! Error types for script decoding and construction.

use crate::op_code::OpCode;

/// A decode failure at a specific script offset.
///
/// These never escape the classification entry points — any decode error
/// means the script is not a canonical template and classification reports a
/// plain negative. The type exists so the decoder itself stays reusable and
/// the offset survives for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// The byte at `offset` is not a defined opcode.
    #[error("unknown opcode 0x{byte:02x} at offset {offset}")]
    UnknownOpcode { byte: u8, offset: usize },

    /// The operand announced by the instruction at `offset` runs past the
    /// end of the script.
    #[error("truncated operand for {opcode:?} at offset {offset}")]
    TruncatedOperand { opcode: OpCode, offset: usize },

    /// The script ended where another instruction was required.
    #[error("unexpected end of script at offset {offset}")]
    UnexpectedEnd { offset: usize },
}

/// Invalid parameters to multi-signature script construction.
///
/// Reachable only through programmer misuse of the builder, never from
/// network bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MultiSigError {
    /// The key list is empty or larger than the VM array cap.
    #[error("invalid public key count: {0}")]
    InvalidKeyCount(usize),

    /// The signing threshold is zero or exceeds the key count.
    #[error("invalid signature threshold: {0}")]
    InvalidThreshold(usize),
}
