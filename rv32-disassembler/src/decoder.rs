//! Instruction decoder
//!
//! Decoding is total: any word that matches no known encoding becomes
//! [`Instruction::Unrecognized`], and the executor decides what to do with it.

use rv32_spec::encoding::{
    extract_branch_offset, extract_funct3, extract_funct7, extract_imm_signed,
    extract_jump_offset, extract_rd, extract_rs1, extract_rs2, extract_shamt,
    extract_upper_imm, funct3, funct7,
};
use rv32_spec::{Instruction, Opcode, Register};

/// Decode 32-bit instruction word
pub fn decode(word: u32) -> Instruction {
    match Opcode::from_instruction(word) {
        Some(Opcode::Lui) => Instruction::Lui {
            rd: rd(word),
            imm: extract_upper_imm(word),
        },
        Some(Opcode::Auipc) => Instruction::Auipc {
            rd: rd(word),
            imm: extract_upper_imm(word),
        },
        Some(Opcode::OpImm) => decode_op_imm(word),
        Some(Opcode::Op) => decode_op(word),
        Some(Opcode::Branch) => decode_branch(word),
        Some(Opcode::Jal) => Instruction::Jal {
            rd: rd(word),
            offset: extract_jump_offset(word),
        },
        Some(Opcode::Jalr) => decode_jalr(word),
        // Every SYSTEM word halts; funct3 and the immediate are not inspected.
        Some(Opcode::System) => Instruction::Ecall,
        None => Instruction::Unrecognized,
    }
}

fn decode_op_imm(word: u32) -> Instruction {
    let rd = rd(word);
    let rs1 = rs1(word);
    let imm = extract_imm_signed(word);
    let shamt = extract_shamt(word) as u8;

    match (extract_funct3(word), extract_funct7(word)) {
        (funct3::ADD_SUB, _) => Instruction::Addi { rd, rs1, imm },
        (funct3::SLT, _) => Instruction::Slti { rd, rs1, imm },
        (funct3::SLTU, _) => Instruction::Sltiu { rd, rs1, imm },
        (funct3::XOR, _) => Instruction::Xori { rd, rs1, imm },
        (funct3::OR, _) => Instruction::Ori { rd, rs1, imm },
        (funct3::AND, _) => Instruction::Andi { rd, rs1, imm },
        (funct3::SLL, funct7::BASE) => Instruction::Slli { rd, rs1, shamt },
        (funct3::SRL_SRA, funct7::BASE) => Instruction::Srli { rd, rs1, shamt },
        (funct3::SRL_SRA, funct7::ALT) => Instruction::Srai { rd, rs1, shamt },
        _ => Instruction::Unrecognized,
    }
}

fn decode_op(word: u32) -> Instruction {
    let rd = rd(word);
    let rs1 = rs1(word);
    let rs2 = rs2(word);

    match (extract_funct7(word), extract_funct3(word)) {
        (funct7::BASE, funct3::ADD_SUB) => Instruction::Add { rd, rs1, rs2 },
        (funct7::ALT, funct3::ADD_SUB) => Instruction::Sub { rd, rs1, rs2 },
        (funct7::BASE, funct3::SLL) => Instruction::Sll { rd, rs1, rs2 },
        (funct7::BASE, funct3::SLT) => Instruction::Slt { rd, rs1, rs2 },
        (funct7::BASE, funct3::SLTU) => Instruction::Sltu { rd, rs1, rs2 },
        (funct7::BASE, funct3::XOR) => Instruction::Xor { rd, rs1, rs2 },
        (funct7::BASE, funct3::SRL_SRA) => Instruction::Srl { rd, rs1, rs2 },
        (funct7::ALT, funct3::SRL_SRA) => Instruction::Sra { rd, rs1, rs2 },
        (funct7::BASE, funct3::OR) => Instruction::Or { rd, rs1, rs2 },
        (funct7::BASE, funct3::AND) => Instruction::And { rd, rs1, rs2 },
        _ => Instruction::Unrecognized,
    }
}

fn decode_branch(word: u32) -> Instruction {
    let rs1 = rs1(word);
    let rs2 = rs2(word);
    let offset = extract_branch_offset(word);

    match extract_funct3(word) {
        funct3::BEQ => Instruction::Beq { rs1, rs2, offset },
        funct3::BNE => Instruction::Bne { rs1, rs2, offset },
        funct3::BLT => Instruction::Blt { rs1, rs2, offset },
        funct3::BGE => Instruction::Bge { rs1, rs2, offset },
        funct3::BLTU => Instruction::Bltu { rs1, rs2, offset },
        funct3::BGEU => Instruction::Bgeu { rs1, rs2, offset },
        _ => Instruction::Unrecognized,
    }
}

fn decode_jalr(word: u32) -> Instruction {
    if extract_funct3(word) != funct3::JALR {
        return Instruction::Unrecognized;
    }
    Instruction::Jalr {
        rd: rd(word),
        rs1: rs1(word),
        offset: extract_imm_signed(word),
    }
}

#[inline]
fn rd(word: u32) -> Register {
    Register::from_field(extract_rd(word))
}

#[inline]
fn rs1(word: u32) -> Register {
    Register::from_field(extract_rs1(word))
}

#[inline]
fn rs2(word: u32) -> Register {
    Register::from_field(extract_rs2(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ecall() {
        assert_eq!(decode(0x00000073), Instruction::Ecall);
    }

    #[test]
    fn test_decode_any_system_word_is_ecall() {
        // ebreak and csrrw both land in the SYSTEM opcode
        assert_eq!(decode(0x00100073), Instruction::Ecall);
        assert_eq!(decode(0x30529073), Instruction::Ecall);
    }

    #[test]
    fn test_decode_lui() {
        assert_eq!(
            decode(0x000012B7),
            Instruction::Lui {
                rd: Register::T0,
                imm: 0x0000_1000,
            }
        );
    }

    #[test]
    fn test_decode_addi_sign_extends() {
        // addi a0, a1, -3
        assert_eq!(
            decode(0xFFD58513),
            Instruction::Addi {
                rd: Register::A0,
                rs1: Register::A1,
                imm: -3,
            }
        );
    }

    #[test]
    fn test_decode_add_vs_sub() {
        assert_eq!(
            decode(0x006283B3),
            Instruction::Add {
                rd: Register::T2,
                rs1: Register::T0,
                rs2: Register::T1,
            }
        );
        assert_eq!(
            decode(0x406283B3),
            Instruction::Sub {
                rd: Register::T2,
                rs1: Register::T0,
                rs2: Register::T1,
            }
        );
    }

    #[test]
    fn test_decode_op_rejects_unknown_funct7() {
        // funct7 = 0000001 is the M extension (mul), not implemented
        assert_eq!(decode(0x026283B3), Instruction::Unrecognized);
        // funct7 with bit 30 set on xor has no meaning
        assert_eq!(decode(0x4062C3B3), Instruction::Unrecognized);
    }

    #[test]
    fn test_decode_op_imm_shifts() {
        // srai a0, a0, 3
        assert_eq!(
            decode(0x40355513),
            Instruction::Srai {
                rd: Register::A0,
                rs1: Register::A0,
                shamt: 3,
            }
        );
        // slli with funct7 bit 30 set is reserved
        assert_eq!(decode(0x40351513), Instruction::Unrecognized);
    }

    #[test]
    fn test_decode_branch_reserved_funct3() {
        // funct3 = 010 in BRANCH space
        assert_eq!(decode(0x00B52063), Instruction::Unrecognized);
    }

    #[test]
    fn test_decode_jal_self_loop() {
        assert_eq!(
            decode(0x0000006F),
            Instruction::Jal {
                rd: Register::ZERO,
                offset: 0,
            }
        );
    }

    #[test]
    fn test_decode_jalr_requires_funct3_zero() {
        // jalr zero, 0(ra)
        assert_eq!(
            decode(0x00008067),
            Instruction::Jalr {
                rd: Register::ZERO,
                rs1: Register::RA,
                offset: 0,
            }
        );
        assert_eq!(decode(0x00009067), Instruction::Unrecognized);
    }

    #[test]
    fn test_decode_unknown_opcodes() {
        assert_eq!(decode(0x00000000), Instruction::Unrecognized);
        assert_eq!(decode(0xFFFFFFFF), Instruction::Unrecognized);
        // lw a0, 0(sp): loads have no data memory to read
        assert_eq!(decode(0x00012503), Instruction::Unrecognized);
    }
}
