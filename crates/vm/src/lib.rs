//! Verification-script classification for the Neo trust-decision core.
//!
//! Given a raw bytecode buffer, this crate decides whether it matches one of
//! the two canonical verification templates — single-signature or m-of-n
//! multi-signature — and extracts the embedded public keys. Matching is
//! strict byte-level template recognition over the decoded instruction
//! stream, not semantic analysis; see [`contract_checks`] for the grammar.
//!
//! All classification entry points are pure functions over the input bytes,
//! total over arbitrary (adversarial) buffers, and safe to call from any
//! number of threads at once.

/// Recognition of canonical verification scripts.
pub mod contract_checks;
/// Script decode and construction error types.
pub mod error;
/// Interop-call identifier derivation.
pub mod interop;
/// The opcode table with operand metadata.
pub mod op_code;
/// Instruction-level script decoding.
pub mod script;
/// Programmatic script construction.
pub mod script_builder;

pub use contract_checks::{
    classify_script, is_multi_sig_contract, is_signature_contract, is_standard_contract,
    parse_multi_sig_contract, MultiSigContract, StandardContract,
};
pub use error::{MultiSigError, ScriptError};
pub use op_code::{OpCode, OperandSize};
pub use script::InstructionReader;
pub use script_builder::{
    create_multi_sig_redeem_script, create_signature_redeem_script, ScriptBuilder,
};
