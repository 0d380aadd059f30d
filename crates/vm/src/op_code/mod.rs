//! The Neo N3 opcode table.
//!
//! Only the decoder and the script builder consume this table, but it covers
//! the full instruction set: classification must be able to walk *any*
//! well-formed script and stop at the first byte the VM itself would reject.

pub mod operand_size;

pub use operand_size::OperandSize;

/// Neo N3 VM opcodes with their wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum OpCode {
    // Constants
    PUSHINT8 = 0x00,
    PUSHINT16 = 0x01,
    PUSHINT32 = 0x02,
    PUSHINT64 = 0x03,
    PUSHINT128 = 0x04,
    PUSHINT256 = 0x05,
    PUSHT = 0x08,
    PUSHF = 0x09,
    PUSHA = 0x0A,
    PUSHNULL = 0x0B,
    PUSHDATA1 = 0x0C,
    PUSHDATA2 = 0x0D,
    PUSHDATA4 = 0x0E,
    PUSHM1 = 0x0F,
    PUSH0 = 0x10,
    PUSH1 = 0x11,
    PUSH2 = 0x12,
    PUSH3 = 0x13,
    PUSH4 = 0x14,
    PUSH5 = 0x15,
    PUSH6 = 0x16,
    PUSH7 = 0x17,
    PUSH8 = 0x18,
    PUSH9 = 0x19,
    PUSH10 = 0x1A,
    PUSH11 = 0x1B,
    PUSH12 = 0x1C,
    PUSH13 = 0x1D,
    PUSH14 = 0x1E,
    PUSH15 = 0x1F,
    PUSH16 = 0x20,

    // Flow control
    NOP = 0x21,
    JMP = 0x22,
    JMP_L = 0x23,
    JMPIF = 0x24,
    JMPIF_L = 0x25,
    JMPIFNOT = 0x26,
    JMPIFNOT_L = 0x27,
    JMPEQ = 0x28,
    JMPEQ_L = 0x29,
    JMPNE = 0x2A,
    JMPNE_L = 0x2B,
    JMPGT = 0x2C,
    JMPGT_L = 0x2D,
    JMPGE = 0x2E,
    JMPGE_L = 0x2F,
    JMPLT = 0x30,
    JMPLT_L = 0x31,
    JMPLE = 0x32,
    JMPLE_L = 0x33,
    CALL = 0x34,
    CALL_L = 0x35,
    CALLA = 0x36,
    CALLT = 0x37,
    ABORT = 0x38,
    ASSERT = 0x39,
    THROW = 0x3A,
    TRY = 0x3B,
    TRY_L = 0x3C,
    ENDTRY = 0x3D,
    ENDTRY_L = 0x3E,
    ENDFINALLY = 0x3F,
    RET = 0x40,
    SYSCALL = 0x41,

    // Stack
    DEPTH = 0x43,
    DROP = 0x45,
    NIP = 0x46,
    XDROP = 0x48,
    CLEAR = 0x49,
    DUP = 0x4A,
    OVER = 0x4B,
    PICK = 0x4D,
    TUCK = 0x4E,
    SWAP = 0x50,
    ROT = 0x51,
    ROLL = 0x52,
    REVERSE3 = 0x53,
    REVERSE4 = 0x54,
    REVERSEN = 0x55,

    // Slot
    INITSSLOT = 0x56,
    INITSLOT = 0x57,
    LDSFLD0 = 0x58,
    LDSFLD1 = 0x59,
    LDSFLD2 = 0x5A,
    LDSFLD3 = 0x5B,
    LDSFLD4 = 0x5C,
    LDSFLD5 = 0x5D,
    LDSFLD6 = 0x5E,
    LDSFLD = 0x5F,
    STSFLD0 = 0x60,
    STSFLD1 = 0x61,
    STSFLD2 = 0x62,
    STSFLD3 = 0x63,
    STSFLD4 = 0x64,
    STSFLD5 = 0x65,
    STSFLD6 = 0x66,
    STSFLD = 0x67,
    LDLOC0 = 0x68,
    LDLOC1 = 0x69,
    LDLOC2 = 0x6A,
    LDLOC3 = 0x6B,
    LDLOC4 = 0x6C,
    LDLOC5 = 0x6D,
    LDLOC6 = 0x6E,
    LDLOC = 0x6F,
    STLOC0 = 0x70,
    STLOC1 = 0x71,
    STLOC2 = 0x72,
    STLOC3 = 0x73,
    STLOC4 = 0x74,
    STLOC5 = 0x75,
    STLOC6 = 0x76,
    STLOC = 0x77,
    LDARG0 = 0x78,
    LDARG1 = 0x79,
    LDARG2 = 0x7A,
    LDARG3 = 0x7B,
    LDARG4 = 0x7C,
    LDARG5 = 0x7D,
    LDARG6 = 0x7E,
    LDARG = 0x7F,
    STARG0 = 0x80,
    STARG1 = 0x81,
    STARG2 = 0x82,
    STARG3 = 0x83,
    STARG4 = 0x84,
    STARG5 = 0x85,
    STARG6 = 0x86,
    STARG = 0x87,

    // Splice
    NEWBUFFER = 0x88,
    MEMCPY = 0x89,
    CAT = 0x8B,
    SUBSTR = 0x8C,
    LEFT = 0x8D,
    RIGHT = 0x8E,

    // Bitwise logic
    INVERT = 0x90,
    AND = 0x91,
    OR = 0x92,
    XOR = 0x93,
    EQUAL = 0x97,
    NOTEQUAL = 0x98,

    // Arithmetic
    SIGN = 0x99,
    ABS = 0x9A,
    NEGATE = 0x9B,
    INC = 0x9C,
    DEC = 0x9D,
    ADD = 0x9E,
    SUB = 0x9F,
    MUL = 0xA0,
    DIV = 0xA1,
    MOD = 0xA2,
    POW = 0xA3,
    SQRT = 0xA4,
    MODMUL = 0xA5,
    MODPOW = 0xA6,
    SHL = 0xA8,
    SHR = 0xA9,
    NOT = 0xAA,
    BOOLAND = 0xAB,
    BOOLOR = 0xAC,
    NZ = 0xB1,
    NUMEQUAL = 0xB3,
    NUMNOTEQUAL = 0xB4,
    LT = 0xB5,
    LE = 0xB6,
    GT = 0xB7,
    GE = 0xB8,
    MIN = 0xB9,
    MAX = 0xBA,
    WITHIN = 0xBB,

    // Compound types
    PACKMAP = 0xBE,
    PACKSTRUCT = 0xBF,
    PACK = 0xC0,
    UNPACK = 0xC1,
    NEWARRAY0 = 0xC2,
    NEWARRAY = 0xC3,
    NEWARRAY_T = 0xC4,
    NEWSTRUCT0 = 0xC5,
    NEWSTRUCT = 0xC6,
    NEWMAP = 0xC8,
    SIZE = 0xCA,
    HASKEY = 0xCB,
    KEYS = 0xCC,
    VALUES = 0xCD,
    PICKITEM = 0xCE,
    APPEND = 0xCF,
    SETITEM = 0xD0,
    REVERSEITEMS = 0xD1,
    REMOVE = 0xD2,
    CLEARITEMS = 0xD3,
    POPITEM = 0xD4,

    // Types
    ISNULL = 0xD8,
    ISTYPE = 0xD9,
    CONVERT = 0xDB,

    // Extensions
    ABORTMSG = 0xE0,
    ASSERTMSG = 0xE1,
}

impl OpCode {
    /// Decodes a wire byte, `None` for the gaps in the instruction set.
    pub fn from_byte(byte: u8) -> Option<Self> {
        use OpCode::*;
        let opcode = match byte {
            0x00 => PUSHINT8,
            0x01 => PUSHINT16,
            0x02 => PUSHINT32,
            0x03 => PUSHINT64,
            0x04 => PUSHINT128,
            0x05 => PUSHINT256,
            0x08 => PUSHT,
            0x09 => PUSHF,
            0x0A => PUSHA,
            0x0B => PUSHNULL,
            0x0C => PUSHDATA1,
            0x0D => PUSHDATA2,
            0x0E => PUSHDATA4,
            0x0F => PUSHM1,
            0x10 => PUSH0,
            0x11 => PUSH1,
            0x12 => PUSH2,
            0x13 => PUSH3,
            0x14 => PUSH4,
            0x15 => PUSH5,
            0x16 => PUSH6,
            0x17 => PUSH7,
            0x18 => PUSH8,
            0x19 => PUSH9,
            0x1A => PUSH10,
            0x1B => PUSH11,
            0x1C => PUSH12,
            0x1D => PUSH13,
            0x1E => PUSH14,
            0x1F => PUSH15,
            0x20 => PUSH16,
            0x21 => NOP,
            0x22 => JMP,
            0x23 => JMP_L,
            0x24 => JMPIF,
            0x25 => JMPIF_L,
            0x26 => JMPIFNOT,
            0x27 => JMPIFNOT_L,
            0x28 => JMPEQ,
            0x29 => JMPEQ_L,
            0x2A => JMPNE,
            0x2B => JMPNE_L,
            0x2C => JMPGT,
            0x2D => JMPGT_L,
            0x2E => JMPGE,
            0x2F => JMPGE_L,
            0x30 => JMPLT,
            0x31 => JMPLT_L,
            0x32 => JMPLE,
            0x33 => JMPLE_L,
            0x34 => CALL,
            0x35 => CALL_L,
            0x36 => CALLA,
            0x37 => CALLT,
            0x38 => ABORT,
            0x39 => ASSERT,
            0x3A => THROW,
            0x3B => TRY,
            0x3C => TRY_L,
            0x3D => ENDTRY,
            0x3E => ENDTRY_L,
            0x3F => ENDFINALLY,
            0x40 => RET,
            0x41 => SYSCALL,
            0x43 => DEPTH,
            0x45 => DROP,
            0x46 => NIP,
            0x48 => XDROP,
            0x49 => CLEAR,
            0x4A => DUP,
            0x4B => OVER,
            0x4D => PICK,
            0x4E => TUCK,
            0x50 => SWAP,
            0x51 => ROT,
            0x52 => ROLL,
            0x53 => REVERSE3,
            0x54 => REVERSE4,
            0x55 => REVERSEN,
            0x56 => INITSSLOT,
            0x57 => INITSLOT,
            0x58 => LDSFLD0,
            0x59 => LDSFLD1,
            0x5A => LDSFLD2,
            0x5B => LDSFLD3,
            0x5C => LDSFLD4,
            0x5D => LDSFLD5,
            0x5E => LDSFLD6,
            0x5F => LDSFLD,
            0x60 => STSFLD0,
            0x61 => STSFLD1,
            0x62 => STSFLD2,
            0x63 => STSFLD3,
            0x64 => STSFLD4,
            0x65 => STSFLD5,
            0x66 => STSFLD6,
            0x67 => STSFLD,
            0x68 => LDLOC0,
            0x69 => LDLOC1,
            0x6A => LDLOC2,
            0x6B => LDLOC3,
            0x6C => LDLOC4,
            0x6D => LDLOC5,
            0x6E => LDLOC6,
            0x6F => LDLOC,
            0x70 => STLOC0,
            0x71 => STLOC1,
            0x72 => STLOC2,
            0x73 => STLOC3,
            0x74 => STLOC4,
            0x75 => STLOC5,
            0x76 => STLOC6,
            0x77 => STLOC,
            0x78 => LDARG0,
            0x79 => LDARG1,
            0x7A => LDARG2,
            0x7B => LDARG3,
            0x7C => LDARG4,
            0x7D => LDARG5,
            0x7E => LDARG6,
            0x7F => LDARG,
            0x80 => STARG0,
            0x81 => STARG1,
            0x82 => STARG2,
            0x83 => STARG3,
            0x84 => STARG4,
            0x85 => STARG5,
            0x86 => STARG6,
            0x87 => STARG,
            0x88 => NEWBUFFER,
            0x89 => MEMCPY,
            0x8B => CAT,
            0x8C => SUBSTR,
            0x8D => LEFT,
            0x8E => RIGHT,
            0x90 => INVERT,
            0x91 => AND,
            0x92 => OR,
            0x93 => XOR,
            0x97 => EQUAL,
            0x98 => NOTEQUAL,
            0x99 => SIGN,
            0x9A => ABS,
            0x9B => NEGATE,
            0x9C => INC,
            0x9D => DEC,
            0x9E => ADD,
            0x9F => SUB,
            0xA0 => MUL,
            0xA1 => DIV,
            0xA2 => MOD,
            0xA3 => POW,
            0xA4 => SQRT,
            0xA5 => MODMUL,
            0xA6 => MODPOW,
            0xA8 => SHL,
            0xA9 => SHR,
            0xAA => NOT,
            0xAB => BOOLAND,
            0xAC => BOOLOR,
            0xB1 => NZ,
            0xB3 => NUMEQUAL,
            0xB4 => NUMNOTEQUAL,
            0xB5 => LT,
            0xB6 => LE,
            0xB7 => GT,
            0xB8 => GE,
            0xB9 => MIN,
            0xBA => MAX,
            0xBB => WITHIN,
            0xBE => PACKMAP,
            0xBF => PACKSTRUCT,
            0xC0 => PACK,
            0xC1 => UNPACK,
            0xC2 => NEWARRAY0,
            0xC3 => NEWARRAY,
            0xC4 => NEWARRAY_T,
            0xC5 => NEWSTRUCT0,
            0xC6 => NEWSTRUCT,
            0xC8 => NEWMAP,
            0xCA => SIZE,
            0xCB => HASKEY,
            0xCC => KEYS,
            0xCD => VALUES,
            0xCE => PICKITEM,
            0xCF => APPEND,
            0xD0 => SETITEM,
            0xD1 => REVERSEITEMS,
            0xD2 => REMOVE,
            0xD3 => CLEARITEMS,
            0xD4 => POPITEM,
            0xD8 => ISNULL,
            0xD9 => ISTYPE,
            0xDB => CONVERT,
            0xE0 => ABORTMSG,
            0xE1 => ASSERTMSG,
            _ => return None,
        };
        Some(opcode)
    }

    /// Operand metadata for this opcode.
    pub const fn operand_size(self) -> OperandSize {
        use OpCode::*;
        match self {
            PUSHINT8 | JMP | JMPIF | JMPIFNOT | JMPEQ | JMPNE | JMPGT | JMPGE | JMPLT | JMPLE
            | CALL | ENDTRY | INITSSLOT | LDSFLD | STSFLD | LDLOC | STLOC | LDARG | STARG
            | NEWARRAY_T | ISTYPE | CONVERT => OperandSize::fixed(1),
            PUSHINT16 | CALLT | TRY | INITSLOT => OperandSize::fixed(2),
            PUSHINT32 | PUSHA | JMP_L | JMPIF_L | JMPIFNOT_L | JMPEQ_L | JMPNE_L | JMPGT_L
            | JMPGE_L | JMPLT_L | JMPLE_L | CALL_L | ENDTRY_L | SYSCALL => OperandSize::fixed(4),
            PUSHINT64 | TRY_L => OperandSize::fixed(8),
            PUSHINT128 => OperandSize::fixed(16),
            PUSHINT256 => OperandSize::fixed(32),
            PUSHDATA1 => OperandSize::prefix(1),
            PUSHDATA2 => OperandSize::prefix(2),
            PUSHDATA4 => OperandSize::prefix(4),
            _ => OperandSize::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_round_trip() {
        for byte in 0..=u8::MAX {
            if let Some(opcode) = OpCode::from_byte(byte) {
                assert_eq!(opcode as u8, byte);
            }
        }
    }

    #[test]
    fn known_gaps_are_rejected() {
        for byte in [0x06, 0x07, 0x42, 0x44, 0x47, 0x4C, 0x4F, 0x8A, 0xA7, 0xFF] {
            assert!(OpCode::from_byte(byte).is_none(), "0x{byte:02x}");
        }
    }

    #[test]
    fn template_opcodes_have_expected_operands() {
        assert_eq!(OpCode::PUSHDATA1.operand_size(), OperandSize::prefix(1));
        assert_eq!(OpCode::SYSCALL.operand_size(), OperandSize::fixed(4));
        assert_eq!(OpCode::PUSHINT16.operand_size(), OperandSize::fixed(2));
        assert_eq!(OpCode::PUSHNULL.operand_size(), OperandSize::NONE);
        assert_eq!(OpCode::RET.operand_size(), OperandSize::NONE);
        assert_eq!(OpCode::PUSH16.operand_size(), OperandSize::NONE);
    }
}
