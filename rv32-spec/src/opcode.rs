//! # RV32 Major Opcodes
//!
//! The primary opcode field occupies bits 0-6 of every instruction word.
//! Instructions sharing a major opcode are told apart by funct3 (bits 12-14)
//! and funct7 (bits 25-31).
//!
//! | Opcode    | Value | Family                                   |
//! |-----------|-------|------------------------------------------|
//! | `LUI`     | 0x37  | load upper immediate                     |
//! | `AUIPC`   | 0x17  | add upper immediate to pc                |
//! | `JAL`     | 0x6F  | jump and link                            |
//! | `JALR`    | 0x67  | jump and link register                   |
//! | `BRANCH`  | 0x63  | conditional branches                     |
//! | `OP-IMM`  | 0x13  | register-immediate ALU                   |
//! | `OP`      | 0x33  | register-register ALU                    |
//! | `SYSTEM`  | 0x73  | environment call                         |

use serde::{Deserialize, Serialize};

/// Major opcode (7 bits)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// LUI: rd = imm << 12
    Lui = 0x37,
    /// AUIPC: rd = pc + (imm << 12)
    Auipc = 0x17,
    /// JAL: rd = pc + 4; pc += offset
    Jal = 0x6F,
    /// JALR: rd = pc + 4; pc = (rs1 + imm) & !1
    Jalr = 0x67,
    /// BEQ, BNE, BLT, BGE, BLTU, BGEU
    Branch = 0x63,
    /// ADDI, SLTI, SLTIU, XORI, ORI, ANDI, SLLI, SRLI, SRAI
    OpImm = 0x13,
    /// ADD, SUB, SLL, SLT, SLTU, XOR, SRL, SRA, OR, AND
    Op = 0x33,
    /// ECALL (and anything else in the SYSTEM space)
    System = 0x73,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: usize = 7;

    /// Opcode mask (0x7F for 7 bits)
    pub const MASK: u32 = 0x7F;

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x37 => Some(Opcode::Lui),
            0x17 => Some(Opcode::Auipc),
            0x6F => Some(Opcode::Jal),
            0x67 => Some(Opcode::Jalr),
            0x63 => Some(Opcode::Branch),
            0x13 => Some(Opcode::OpImm),
            0x33 => Some(Opcode::Op),
            0x73 => Some(Opcode::System),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Extract opcode from 32-bit instruction word
    #[inline]
    pub fn from_instruction(instruction: u32) -> Option<Self> {
        Self::from_u8((instruction & Self::MASK) as u8)
    }

    /// Check if this opcode can redirect the program counter
    #[inline]
    pub const fn is_control_flow(self) -> bool {
        matches!(self, Opcode::Jal | Opcode::Jalr | Opcode::Branch)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Opcode::Lui => "LUI",
            Opcode::Auipc => "AUIPC",
            Opcode::Jal => "JAL",
            Opcode::Jalr => "JALR",
            Opcode::Branch => "BRANCH",
            Opcode::OpImm => "OP-IMM",
            Opcode::Op => "OP",
            Opcode::System => "SYSTEM",
        };
        write!(f, "{}", name)
    }
}
