//! Instruction execution
//!
//! All arithmetic wraps modulo 2^32. Sequential instructions advance the pc
//! by 4; control transfers write the target directly and leave alignment and
//! bounds checks to the next fetch.

use rv32_spec::{Instruction, INSTRUCTION_SIZE};
use crate::error::{Result, RuntimeError};
use crate::state::{HaltReason, RegisterFile};

/// Execute a single decoded instruction.
///
/// `word` is the raw encoding, reported back when the instruction is
/// unimplemented. Returns `Some(reason)` when the instruction halts the
/// machine; the pc is then left pointing at the halting instruction.
pub fn execute(instr: &Instruction, word: u32, state: &mut RegisterFile) -> Result<Option<HaltReason>> {
    let pc = state.pc();

    match *instr {
        // ========== System ==========
        Instruction::Ecall => return Ok(Some(HaltReason::Ecall)),

        Instruction::Unrecognized => {
            return Err(RuntimeError::Unimplemented { word, pc });
        }

        // ========== Upper Immediate ==========
        Instruction::Lui { rd, imm } => {
            state.write(rd, imm);
        }

        Instruction::Auipc { rd, imm } => {
            state.write(rd, pc.wrapping_add(imm));
        }

        // ========== Register-Immediate ==========
        Instruction::Addi { rd, rs1, imm } => {
            let result = state.read(rs1).wrapping_add(imm as u32);
            state.write(rd, result);
        }

        Instruction::Slti { rd, rs1, imm } => {
            let result = (state.read(rs1) as i32) < imm;
            state.write(rd, result as u32);
        }

        Instruction::Sltiu { rd, rs1, imm } => {
            let result = state.read(rs1) < imm as u32;
            state.write(rd, result as u32);
        }

        Instruction::Xori { rd, rs1, imm } => {
            state.write(rd, state.read(rs1) ^ imm as u32);
        }

        Instruction::Ori { rd, rs1, imm } => {
            state.write(rd, state.read(rs1) | imm as u32);
        }

        Instruction::Andi { rd, rs1, imm } => {
            state.write(rd, state.read(rs1) & imm as u32);
        }

        Instruction::Slli { rd, rs1, shamt } => {
            state.write(rd, state.read(rs1) << (shamt & 0x1F));
        }

        Instruction::Srli { rd, rs1, shamt } => {
            state.write(rd, state.read(rs1) >> (shamt & 0x1F));
        }

        Instruction::Srai { rd, rs1, shamt } => {
            let result = (state.read(rs1) as i32) >> (shamt & 0x1F);
            state.write(rd, result as u32);
        }

        // ========== Register-Register ==========
        Instruction::Add { rd, rs1, rs2 } => {
            let result = state.read(rs1).wrapping_add(state.read(rs2));
            state.write(rd, result);
        }

        Instruction::Sub { rd, rs1, rs2 } => {
            let result = state.read(rs1).wrapping_sub(state.read(rs2));
            state.write(rd, result);
        }

        Instruction::Sll { rd, rs1, rs2 } => {
            let shamt = state.read(rs2) & 0x1F;
            state.write(rd, state.read(rs1) << shamt);
        }

        Instruction::Slt { rd, rs1, rs2 } => {
            let result = (state.read(rs1) as i32) < (state.read(rs2) as i32);
            state.write(rd, result as u32);
        }

        Instruction::Sltu { rd, rs1, rs2 } => {
            let result = state.read(rs1) < state.read(rs2);
            state.write(rd, result as u32);
        }

        Instruction::Xor { rd, rs1, rs2 } => {
            state.write(rd, state.read(rs1) ^ state.read(rs2));
        }

        Instruction::Srl { rd, rs1, rs2 } => {
            let shamt = state.read(rs2) & 0x1F;
            state.write(rd, state.read(rs1) >> shamt);
        }

        Instruction::Sra { rd, rs1, rs2 } => {
            let shamt = state.read(rs2) & 0x1F;
            let result = (state.read(rs1) as i32) >> shamt;
            state.write(rd, result as u32);
        }

        Instruction::Or { rd, rs1, rs2 } => {
            state.write(rd, state.read(rs1) | state.read(rs2));
        }

        Instruction::And { rd, rs1, rs2 } => {
            state.write(rd, state.read(rs1) & state.read(rs2));
        }

        // ========== Branch ==========
        Instruction::Beq { rs1, rs2, offset } => {
            let taken = state.read(rs1) == state.read(rs2);
            return Ok(branch(state, taken, offset));
        }

        Instruction::Bne { rs1, rs2, offset } => {
            let taken = state.read(rs1) != state.read(rs2);
            return Ok(branch(state, taken, offset));
        }

        Instruction::Blt { rs1, rs2, offset } => {
            let taken = (state.read(rs1) as i32) < (state.read(rs2) as i32);
            return Ok(branch(state, taken, offset));
        }

        Instruction::Bge { rs1, rs2, offset } => {
            let taken = (state.read(rs1) as i32) >= (state.read(rs2) as i32);
            return Ok(branch(state, taken, offset));
        }

        Instruction::Bltu { rs1, rs2, offset } => {
            let taken = state.read(rs1) < state.read(rs2);
            return Ok(branch(state, taken, offset));
        }

        Instruction::Bgeu { rs1, rs2, offset } => {
            let taken = state.read(rs1) >= state.read(rs2);
            return Ok(branch(state, taken, offset));
        }

        // ========== Jump ==========
        Instruction::Jal { rd, offset } => {
            state.write(rd, pc.wrapping_add(INSTRUCTION_SIZE));
            state.set_pc(pc.wrapping_add(offset as u32));
            return Ok(None);
        }

        Instruction::Jalr { rd, rs1, offset } => {
            // Target first: rd may alias rs1
            let target = state.read(rs1).wrapping_add(offset as u32) & !1;
            state.write(rd, pc.wrapping_add(INSTRUCTION_SIZE));
            state.set_pc(target);
            return Ok(None);
        }
    }

    state.advance(INSTRUCTION_SIZE);
    Ok(None)
}

#[inline]
fn branch(state: &mut RegisterFile, taken: bool, offset: i32) -> Option<HaltReason> {
    if taken {
        state.set_pc(state.pc().wrapping_add(offset as u32));
    } else {
        state.advance(INSTRUCTION_SIZE);
    }
    None
}
