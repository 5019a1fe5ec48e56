//! # Instruction Encoding Constants and Helpers
//!
//! Centralized bit positions, field extraction, and encoding for RV32
//! instruction words.
//!
//! ## Instruction Format (32-bit)
//!
//! ```text
//!          31        25 24    20 19    15 14  12 11         7 6      0
//! R-type: [ funct7    ][ rs2   ][ rs1   ][ f3  ][ rd        ][ opcode ]
//! I-type: [ imm[11:0]          ][ rs1   ][ f3  ][ rd        ][ opcode ]
//! B-type: [ imm[12|10:5]][ rs2 ][ rs1   ][ f3  ][ imm[4:1|11]][ opcode ]
//! U-type: [ imm[31:12]                         ][ rd        ][ opcode ]
//! J-type: [ imm[20|10:1|11|19:12]              ][ rd        ][ opcode ]
//! ```

use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::register::Register;

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Destination register field: bits 7-11
pub const RD_SHIFT: u32 = 7;

/// funct3 field: bits 12-14
pub const FUNCT3_SHIFT: u32 = 12;

/// Source register 1 field: bits 15-19
pub const RS1_SHIFT: u32 = 15;

/// Source register 2 field: bits 20-24
pub const RS2_SHIFT: u32 = 20;

/// I-type immediate: bits 20-31
pub const IMM_SHIFT: u32 = 20;

/// funct7 field: bits 25-31
pub const FUNCT7_SHIFT: u32 = 25;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode mask (7 bits)
pub const OPCODE_MASK: u32 = 0x7F;

/// Register field mask (5 bits)
pub const REGISTER_MASK: u32 = 0x1F;

/// funct3 mask (3 bits)
pub const FUNCT3_MASK: u32 = 0x7;

/// funct7 mask (7 bits)
pub const FUNCT7_MASK: u32 = 0x7F;

/// I-type immediate mask (12 bits)
pub const IMM12_MASK: u32 = 0xFFF;

/// U-type immediate mask (top 20 bits, in place)
pub const UPPER_IMM_MASK: u32 = 0xFFFF_F000;

/// Shift amount mask (5 bits)
pub const SHAMT_MASK: u32 = 0x1F;

// ============================================================================
// funct3 / funct7 Values
// ============================================================================

pub mod funct3 {
    // OP-IMM and OP
    pub const ADD_SUB: u32 = 0b000;
    pub const SLL: u32 = 0b001;
    pub const SLT: u32 = 0b010;
    pub const SLTU: u32 = 0b011;
    pub const XOR: u32 = 0b100;
    pub const SRL_SRA: u32 = 0b101;
    pub const OR: u32 = 0b110;
    pub const AND: u32 = 0b111;

    // BRANCH
    pub const BEQ: u32 = 0b000;
    pub const BNE: u32 = 0b001;
    pub const BLT: u32 = 0b100;
    pub const BGE: u32 = 0b101;
    pub const BLTU: u32 = 0b110;
    pub const BGEU: u32 = 0b111;

    // JALR
    pub const JALR: u32 = 0b000;
}

pub mod funct7 {
    pub const BASE: u32 = 0b000_0000;
    /// Bit 30 set: SUB and SRA/SRAI
    pub const ALT: u32 = 0b010_0000;
}

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Extract opcode (bits 0-6)
#[inline]
pub const fn extract_opcode(inst: u32) -> u32 {
    inst & OPCODE_MASK
}

/// Extract destination register index (bits 7-11)
#[inline]
pub const fn extract_rd(inst: u32) -> u32 {
    (inst >> RD_SHIFT) & REGISTER_MASK
}

/// Extract funct3 (bits 12-14)
#[inline]
pub const fn extract_funct3(inst: u32) -> u32 {
    (inst >> FUNCT3_SHIFT) & FUNCT3_MASK
}

/// Extract source register 1 index (bits 15-19)
#[inline]
pub const fn extract_rs1(inst: u32) -> u32 {
    (inst >> RS1_SHIFT) & REGISTER_MASK
}

/// Extract source register 2 index (bits 20-24)
#[inline]
pub const fn extract_rs2(inst: u32) -> u32 {
    (inst >> RS2_SHIFT) & REGISTER_MASK
}

/// Extract funct7 (bits 25-31)
#[inline]
pub const fn extract_funct7(inst: u32) -> u32 {
    (inst >> FUNCT7_SHIFT) & FUNCT7_MASK
}

/// Extract shift amount of SLLI/SRLI/SRAI (bits 20-24)
#[inline]
pub const fn extract_shamt(inst: u32) -> u32 {
    (inst >> RS2_SHIFT) & SHAMT_MASK
}

/// Sign-extend the low `bits` bits of `value`
#[inline]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

/// Extract raw 12-bit I-type immediate (bits 20-31), no extension
#[inline]
pub const fn extract_imm(inst: u32) -> u32 {
    (inst >> IMM_SHIFT) & IMM12_MASK
}

/// Extract I-type immediate, sign-extended from 12 bits
#[inline]
pub const fn extract_imm_signed(inst: u32) -> i32 {
    sign_extend(extract_imm(inst), 12)
}

/// Extract U-type immediate: top 20 bits in place, low 12 bits zero
#[inline]
pub const fn extract_upper_imm(inst: u32) -> u32 {
    inst & UPPER_IMM_MASK
}

/// Extract B-type branch offset, sign-extended from 13 bits
#[inline]
pub const fn extract_branch_offset(inst: u32) -> i32 {
    let imm_12 = (inst >> 31) & 0x1;
    let imm_11 = (inst >> 7) & 0x1;
    let imm_10_5 = (inst >> 25) & 0x3F;
    let imm_4_1 = (inst >> 8) & 0xF;

    let imm = (imm_12 << 12) | (imm_11 << 11) | (imm_10_5 << 5) | (imm_4_1 << 1);
    sign_extend(imm, 13)
}

/// Extract J-type jump offset, sign-extended from 21 bits
#[inline]
pub const fn extract_jump_offset(inst: u32) -> i32 {
    let imm_20 = (inst >> 31) & 0x1;
    let imm_19_12 = (inst >> 12) & 0xFF;
    let imm_11 = (inst >> 20) & 0x1;
    let imm_10_1 = (inst >> 21) & 0x3FF;

    let imm = (imm_20 << 20) | (imm_19_12 << 12) | (imm_11 << 11) | (imm_10_1 << 1);
    sign_extend(imm, 21)
}

// ============================================================================
// Instruction Encoding Functions
// ============================================================================

/// Encode R-type instruction
#[inline]
pub const fn encode_rtype(opcode: Opcode, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (opcode.to_u8() as u32)
        | ((rd & REGISTER_MASK) << RD_SHIFT)
        | ((funct3 & FUNCT3_MASK) << FUNCT3_SHIFT)
        | ((rs1 & REGISTER_MASK) << RS1_SHIFT)
        | ((rs2 & REGISTER_MASK) << RS2_SHIFT)
        | ((funct7 & FUNCT7_MASK) << FUNCT7_SHIFT)
}

/// Encode I-type instruction (imm truncated to 12 bits)
#[inline]
pub const fn encode_itype(opcode: Opcode, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    (opcode.to_u8() as u32)
        | ((rd & REGISTER_MASK) << RD_SHIFT)
        | ((funct3 & FUNCT3_MASK) << FUNCT3_SHIFT)
        | ((rs1 & REGISTER_MASK) << RS1_SHIFT)
        | (((imm as u32) & IMM12_MASK) << IMM_SHIFT)
}

/// Encode U-type instruction (low 12 bits of imm dropped)
#[inline]
pub const fn encode_utype(opcode: Opcode, rd: u32, imm: u32) -> u32 {
    (opcode.to_u8() as u32) | ((rd & REGISTER_MASK) << RD_SHIFT) | (imm & UPPER_IMM_MASK)
}

/// Encode B-type instruction (offset bit 0 dropped)
#[inline]
pub const fn encode_btype(opcode: Opcode, funct3: u32, rs1: u32, rs2: u32, offset: i32) -> u32 {
    let imm = offset as u32;
    (opcode.to_u8() as u32)
        | (((imm >> 11) & 0x1) << 7)
        | (((imm >> 1) & 0xF) << 8)
        | ((funct3 & FUNCT3_MASK) << FUNCT3_SHIFT)
        | ((rs1 & REGISTER_MASK) << RS1_SHIFT)
        | ((rs2 & REGISTER_MASK) << RS2_SHIFT)
        | (((imm >> 5) & 0x3F) << 25)
        | (((imm >> 12) & 0x1) << 31)
}

/// Encode J-type instruction (offset bit 0 dropped)
#[inline]
pub const fn encode_jtype(opcode: Opcode, rd: u32, offset: i32) -> u32 {
    let imm = offset as u32;
    (opcode.to_u8() as u32)
        | ((rd & REGISTER_MASK) << RD_SHIFT)
        | (((imm >> 12) & 0xFF) << 12)
        | (((imm >> 11) & 0x1) << 20)
        | (((imm >> 1) & 0x3FF) << 21)
        | (((imm >> 20) & 0x1) << 31)
}

#[inline]
fn reg(r: Register) -> u32 {
    r.index() as u32
}

#[inline]
fn shift_imm(shamt: u8, funct7: u32) -> i32 {
    (((funct7 & FUNCT7_MASK) << 5) | (shamt as u32 & SHAMT_MASK)) as i32
}

/// Encode an instruction into its canonical 32-bit word.
///
/// `Unrecognized` encodes to `0x0000_0000`, which is not a valid RV32
/// instruction and decodes back to `Unrecognized`.
pub fn encode(inst: &Instruction) -> u32 {
    use Instruction::*;

    match *inst {
        Lui { rd, imm } => encode_utype(Opcode::Lui, reg(rd), imm),
        Auipc { rd, imm } => encode_utype(Opcode::Auipc, reg(rd), imm),

        Addi { rd, rs1, imm } => encode_itype(Opcode::OpImm, reg(rd), funct3::ADD_SUB, reg(rs1), imm),
        Slti { rd, rs1, imm } => encode_itype(Opcode::OpImm, reg(rd), funct3::SLT, reg(rs1), imm),
        Sltiu { rd, rs1, imm } => encode_itype(Opcode::OpImm, reg(rd), funct3::SLTU, reg(rs1), imm),
        Xori { rd, rs1, imm } => encode_itype(Opcode::OpImm, reg(rd), funct3::XOR, reg(rs1), imm),
        Ori { rd, rs1, imm } => encode_itype(Opcode::OpImm, reg(rd), funct3::OR, reg(rs1), imm),
        Andi { rd, rs1, imm } => encode_itype(Opcode::OpImm, reg(rd), funct3::AND, reg(rs1), imm),
        Slli { rd, rs1, shamt } => {
            encode_itype(Opcode::OpImm, reg(rd), funct3::SLL, reg(rs1), shift_imm(shamt, funct7::BASE))
        }
        Srli { rd, rs1, shamt } => {
            encode_itype(Opcode::OpImm, reg(rd), funct3::SRL_SRA, reg(rs1), shift_imm(shamt, funct7::BASE))
        }
        Srai { rd, rs1, shamt } => {
            encode_itype(Opcode::OpImm, reg(rd), funct3::SRL_SRA, reg(rs1), shift_imm(shamt, funct7::ALT))
        }

        Add { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::ADD_SUB, reg(rs1), reg(rs2), funct7::BASE),
        Sub { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::ADD_SUB, reg(rs1), reg(rs2), funct7::ALT),
        Sll { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::SLL, reg(rs1), reg(rs2), funct7::BASE),
        Slt { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::SLT, reg(rs1), reg(rs2), funct7::BASE),
        Sltu { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::SLTU, reg(rs1), reg(rs2), funct7::BASE),
        Xor { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::XOR, reg(rs1), reg(rs2), funct7::BASE),
        Srl { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::SRL_SRA, reg(rs1), reg(rs2), funct7::BASE),
        Sra { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::SRL_SRA, reg(rs1), reg(rs2), funct7::ALT),
        Or { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::OR, reg(rs1), reg(rs2), funct7::BASE),
        And { rd, rs1, rs2 } => encode_rtype(Opcode::Op, reg(rd), funct3::AND, reg(rs1), reg(rs2), funct7::BASE),

        Beq { rs1, rs2, offset } => encode_btype(Opcode::Branch, funct3::BEQ, reg(rs1), reg(rs2), offset),
        Bne { rs1, rs2, offset } => encode_btype(Opcode::Branch, funct3::BNE, reg(rs1), reg(rs2), offset),
        Blt { rs1, rs2, offset } => encode_btype(Opcode::Branch, funct3::BLT, reg(rs1), reg(rs2), offset),
        Bge { rs1, rs2, offset } => encode_btype(Opcode::Branch, funct3::BGE, reg(rs1), reg(rs2), offset),
        Bltu { rs1, rs2, offset } => encode_btype(Opcode::Branch, funct3::BLTU, reg(rs1), reg(rs2), offset),
        Bgeu { rs1, rs2, offset } => encode_btype(Opcode::Branch, funct3::BGEU, reg(rs1), reg(rs2), offset),

        Jal { rd, offset } => encode_jtype(Opcode::Jal, reg(rd), offset),
        Jalr { rd, rs1, offset } => encode_itype(Opcode::Jalr, reg(rd), funct3::JALR, reg(rs1), offset),

        Ecall => Opcode::System.to_u8() as u32,
        Unrecognized => 0,
    }
}
