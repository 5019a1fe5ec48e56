//! RV32 Instruction Set
//!
//! Decoded form of a 32-bit instruction word. Each variant carries the operand
//! fields it needs, already extracted and sign-extended.
//!
//! ## Instruction Formats
//! - R-type: [opcode:7][rd:5][funct3:3][rs1:5][rs2:5][funct7:7]
//! - I-type: [opcode:7][rd:5][funct3:3][rs1:5][imm:12]
//! - B-type: [opcode:7][imm:5][funct3:3][rs1:5][rs2:5][imm:7]
//! - U-type: [opcode:7][rd:5][imm:20]
//! - J-type: [opcode:7][rd:5][imm:20]

use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};

/// RV32 Instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== Upper Immediate ==========
    /// LUI: rd = imm (low 12 bits of imm are zero)
    Lui { rd: Register, imm: u32 },

    /// AUIPC: rd = pc + imm (low 12 bits of imm are zero)
    Auipc { rd: Register, imm: u32 },

    // ========== Register-Immediate ==========
    /// ADDI: rd = rs1 + imm (sign-extended)
    Addi { rd: Register, rs1: Register, imm: i32 },

    /// SLTI: rd = (rs1 < imm) ? 1 : 0 (signed)
    Slti { rd: Register, rs1: Register, imm: i32 },

    /// SLTIU: rd = (rs1 < imm) ? 1 : 0 (unsigned compare of the sign-extended imm)
    Sltiu { rd: Register, rs1: Register, imm: i32 },

    /// XORI: rd = rs1 ^ imm
    Xori { rd: Register, rs1: Register, imm: i32 },

    /// ORI: rd = rs1 | imm
    Ori { rd: Register, rs1: Register, imm: i32 },

    /// ANDI: rd = rs1 & imm
    Andi { rd: Register, rs1: Register, imm: i32 },

    /// SLLI: rd = rs1 << shamt
    Slli { rd: Register, rs1: Register, shamt: u8 },

    /// SRLI: rd = rs1 >> shamt (logical)
    Srli { rd: Register, rs1: Register, shamt: u8 },

    /// SRAI: rd = rs1 >> shamt (arithmetic)
    Srai { rd: Register, rs1: Register, shamt: u8 },

    // ========== Register-Register ==========
    /// ADD: rd = rs1 + rs2
    Add { rd: Register, rs1: Register, rs2: Register },

    /// SUB: rd = rs1 - rs2
    Sub { rd: Register, rs1: Register, rs2: Register },

    /// SLL: rd = rs1 << (rs2 & 0x1F)
    Sll { rd: Register, rs1: Register, rs2: Register },

    /// SLT: rd = (rs1 < rs2) ? 1 : 0 (signed)
    Slt { rd: Register, rs1: Register, rs2: Register },

    /// SLTU: rd = (rs1 < rs2) ? 1 : 0 (unsigned)
    Sltu { rd: Register, rs1: Register, rs2: Register },

    /// XOR: rd = rs1 ^ rs2
    Xor { rd: Register, rs1: Register, rs2: Register },

    /// SRL: rd = rs1 >> (rs2 & 0x1F) (logical)
    Srl { rd: Register, rs1: Register, rs2: Register },

    /// SRA: rd = rs1 >> (rs2 & 0x1F) (arithmetic)
    Sra { rd: Register, rs1: Register, rs2: Register },

    /// OR: rd = rs1 | rs2
    Or { rd: Register, rs1: Register, rs2: Register },

    /// AND: rd = rs1 & rs2
    And { rd: Register, rs1: Register, rs2: Register },

    // ========== Branch ==========
    /// BEQ: if (rs1 == rs2) pc += offset
    Beq { rs1: Register, rs2: Register, offset: i32 },

    /// BNE: if (rs1 != rs2) pc += offset
    Bne { rs1: Register, rs2: Register, offset: i32 },

    /// BLT: if (rs1 < rs2) pc += offset (signed)
    Blt { rs1: Register, rs2: Register, offset: i32 },

    /// BGE: if (rs1 >= rs2) pc += offset (signed)
    Bge { rs1: Register, rs2: Register, offset: i32 },

    /// BLTU: if (rs1 < rs2) pc += offset (unsigned)
    Bltu { rs1: Register, rs2: Register, offset: i32 },

    /// BGEU: if (rs1 >= rs2) pc += offset (unsigned)
    Bgeu { rs1: Register, rs2: Register, offset: i32 },

    // ========== Jump ==========
    /// JAL: rd = pc + 4; pc += offset
    Jal { rd: Register, offset: i32 },

    /// JALR: rd = pc + 4; pc = (rs1 + offset) & !1
    Jalr { rd: Register, rs1: Register, offset: i32 },

    // ========== System ==========
    /// ECALL: halts execution. The syscall number in a7 is not consulted.
    Ecall,

    /// Any word that matches no known encoding
    Unrecognized,
}

impl Instruction {
    /// Major opcode of this instruction, `None` for `Unrecognized`
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Instruction::Lui { .. } => Some(Opcode::Lui),
            Instruction::Auipc { .. } => Some(Opcode::Auipc),
            Instruction::Addi { .. }
            | Instruction::Slti { .. }
            | Instruction::Sltiu { .. }
            | Instruction::Xori { .. }
            | Instruction::Ori { .. }
            | Instruction::Andi { .. }
            | Instruction::Slli { .. }
            | Instruction::Srli { .. }
            | Instruction::Srai { .. } => Some(Opcode::OpImm),
            Instruction::Add { .. }
            | Instruction::Sub { .. }
            | Instruction::Sll { .. }
            | Instruction::Slt { .. }
            | Instruction::Sltu { .. }
            | Instruction::Xor { .. }
            | Instruction::Srl { .. }
            | Instruction::Sra { .. }
            | Instruction::Or { .. }
            | Instruction::And { .. } => Some(Opcode::Op),
            Instruction::Beq { .. }
            | Instruction::Bne { .. }
            | Instruction::Blt { .. }
            | Instruction::Bge { .. }
            | Instruction::Bltu { .. }
            | Instruction::Bgeu { .. } => Some(Opcode::Branch),
            Instruction::Jal { .. } => Some(Opcode::Jal),
            Instruction::Jalr { .. } => Some(Opcode::Jalr),
            Instruction::Ecall => Some(Opcode::System),
            Instruction::Unrecognized => None,
        }
    }

    /// Destination register, if the instruction writes one
    pub fn rd(&self) -> Option<Register> {
        match *self {
            Instruction::Lui { rd, .. }
            | Instruction::Auipc { rd, .. }
            | Instruction::Addi { rd, .. }
            | Instruction::Slti { rd, .. }
            | Instruction::Sltiu { rd, .. }
            | Instruction::Xori { rd, .. }
            | Instruction::Ori { rd, .. }
            | Instruction::Andi { rd, .. }
            | Instruction::Slli { rd, .. }
            | Instruction::Srli { rd, .. }
            | Instruction::Srai { rd, .. }
            | Instruction::Add { rd, .. }
            | Instruction::Sub { rd, .. }
            | Instruction::Sll { rd, .. }
            | Instruction::Slt { rd, .. }
            | Instruction::Sltu { rd, .. }
            | Instruction::Xor { rd, .. }
            | Instruction::Srl { rd, .. }
            | Instruction::Sra { rd, .. }
            | Instruction::Or { rd, .. }
            | Instruction::And { rd, .. }
            | Instruction::Jal { rd, .. }
            | Instruction::Jalr { rd, .. } => Some(rd),
            Instruction::Beq { .. }
            | Instruction::Bne { .. }
            | Instruction::Blt { .. }
            | Instruction::Bge { .. }
            | Instruction::Bltu { .. }
            | Instruction::Bgeu { .. }
            | Instruction::Ecall
            | Instruction::Unrecognized => None,
        }
    }

    /// Check if this instruction can redirect the program counter
    #[inline]
    pub fn is_control_flow(&self) -> bool {
        self.opcode().map_or(false, Opcode::is_control_flow)
    }

    /// Check if this instruction stops the executor
    #[inline]
    pub fn is_halt(&self) -> bool {
        matches!(self, Instruction::Ecall)
    }
}
