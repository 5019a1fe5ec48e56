//! Instruction formatting to RISC-V assembly text

use rv32_spec::{Instruction, Register};

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    match instr {
        // ========== System ==========
        Instruction::Ecall => "ecall".to_string(),
        Instruction::Unrecognized => "unimp".to_string(),

        // ========== Upper Immediate ==========
        Instruction::Lui { rd, imm } => format!("lui {}, {:#x}", format_reg(*rd), imm >> 12),
        Instruction::Auipc { rd, imm } => format!("auipc {}, {:#x}", format_reg(*rd), imm >> 12),

        // ========== Register-Immediate ==========
        Instruction::Addi { rd, rs1, imm } => format_itype("addi", *rd, *rs1, *imm),
        Instruction::Slti { rd, rs1, imm } => format_itype("slti", *rd, *rs1, *imm),
        Instruction::Sltiu { rd, rs1, imm } => format_itype("sltiu", *rd, *rs1, *imm),
        Instruction::Xori { rd, rs1, imm } => format_itype("xori", *rd, *rs1, *imm),
        Instruction::Ori { rd, rs1, imm } => format_itype("ori", *rd, *rs1, *imm),
        Instruction::Andi { rd, rs1, imm } => format_itype("andi", *rd, *rs1, *imm),
        Instruction::Slli { rd, rs1, shamt } => format_itype("slli", *rd, *rs1, *shamt as i32),
        Instruction::Srli { rd, rs1, shamt } => format_itype("srli", *rd, *rs1, *shamt as i32),
        Instruction::Srai { rd, rs1, shamt } => format_itype("srai", *rd, *rs1, *shamt as i32),

        // ========== Register-Register ==========
        Instruction::Add { rd, rs1, rs2 } => format_rtype("add", *rd, *rs1, *rs2),
        Instruction::Sub { rd, rs1, rs2 } => format_rtype("sub", *rd, *rs1, *rs2),
        Instruction::Sll { rd, rs1, rs2 } => format_rtype("sll", *rd, *rs1, *rs2),
        Instruction::Slt { rd, rs1, rs2 } => format_rtype("slt", *rd, *rs1, *rs2),
        Instruction::Sltu { rd, rs1, rs2 } => format_rtype("sltu", *rd, *rs1, *rs2),
        Instruction::Xor { rd, rs1, rs2 } => format_rtype("xor", *rd, *rs1, *rs2),
        Instruction::Srl { rd, rs1, rs2 } => format_rtype("srl", *rd, *rs1, *rs2),
        Instruction::Sra { rd, rs1, rs2 } => format_rtype("sra", *rd, *rs1, *rs2),
        Instruction::Or { rd, rs1, rs2 } => format_rtype("or", *rd, *rs1, *rs2),
        Instruction::And { rd, rs1, rs2 } => format_rtype("and", *rd, *rs1, *rs2),

        // ========== Branch ==========
        Instruction::Beq { rs1, rs2, offset } => format_btype("beq", *rs1, *rs2, *offset),
        Instruction::Bne { rs1, rs2, offset } => format_btype("bne", *rs1, *rs2, *offset),
        Instruction::Blt { rs1, rs2, offset } => format_btype("blt", *rs1, *rs2, *offset),
        Instruction::Bge { rs1, rs2, offset } => format_btype("bge", *rs1, *rs2, *offset),
        Instruction::Bltu { rs1, rs2, offset } => format_btype("bltu", *rs1, *rs2, *offset),
        Instruction::Bgeu { rs1, rs2, offset } => format_btype("bgeu", *rs1, *rs2, *offset),

        // ========== Jump ==========
        Instruction::Jal { rd, offset } => format!("jal {}, {}", format_reg(*rd), offset),
        Instruction::Jalr { rd, rs1, offset } => {
            format!("jalr {}, {}({})", format_reg(*rd), offset, format_reg(*rs1))
        }
    }
}

fn format_rtype(mnemonic: &str, rd: Register, rs1: Register, rs2: Register) -> String {
    format!("{} {}, {}, {}", mnemonic, format_reg(rd), format_reg(rs1), format_reg(rs2))
}

fn format_itype(mnemonic: &str, rd: Register, rs1: Register, imm: i32) -> String {
    format!("{} {}, {}, {}", mnemonic, format_reg(rd), format_reg(rs1), imm)
}

fn format_btype(mnemonic: &str, rs1: Register, rs2: Register, offset: i32) -> String {
    format!("{} {}, {}, {}", mnemonic, format_reg(rs1), format_reg(rs2), offset)
}

fn format_reg(reg: Register) -> &'static str {
    reg.name()
}
