//! Instruction-level decoding of raw scripts.

use crate::error::ScriptError;
use crate::op_code::OpCode;

/// A cursor over a raw script, decoding one instruction at a time.
///
/// The cursor advances monotonically and stops permanently at the first
/// malformed instruction: an unknown opcode, a truncated operand, or an
/// attempt to read past the end. Decoding never panics, whatever the bytes.
#[derive(Debug, Clone)]
pub struct InstructionReader<'a> {
    script: &'a [u8],
    ip: usize,
}

impl<'a> InstructionReader<'a> {
    /// Creates a reader positioned at the start of `script`.
    pub fn new(script: &'a [u8]) -> Self {
        Self { script, ip: 0 }
    }

    /// The current decode offset.
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// True once every byte has been consumed.
    pub fn at_end(&self) -> bool {
        self.ip >= self.script.len()
    }

    /// Decodes the next instruction, returning its opcode and operand bytes.
    pub fn next_instruction(&mut self) -> Result<(OpCode, &'a [u8]), ScriptError> {
        let offset = self.ip;
        let byte = *self
            .script
            .get(offset)
            .ok_or(ScriptError::UnexpectedEnd { offset })?;
        let opcode = OpCode::from_byte(byte).ok_or(ScriptError::UnknownOpcode { byte, offset })?;
        self.ip += 1;

        let operand_size = opcode.operand_size();
        let operand_len = if operand_size.has_size_prefix() {
            let prefix = self.take(operand_size.size_prefix(), opcode, offset)?;
            // Little-endian length, at most four bytes.
            prefix
                .iter()
                .rev()
                .fold(0usize, |len, &b| (len << 8) | b as usize)
        } else {
            operand_size.size()
        };
        let operand = self.take(operand_len, opcode, offset)?;
        Ok((opcode, operand))
    }

    fn take(
        &mut self,
        len: usize,
        opcode: OpCode,
        offset: usize,
    ) -> Result<&'a [u8], ScriptError> {
        if self.script.len() - self.ip < len {
            return Err(ScriptError::TruncatedOperand { opcode, offset });
        }
        let operand = &self.script[self.ip..self.ip + len];
        self.ip += len;
        Ok(operand)
    }
}
