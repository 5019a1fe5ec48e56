//! Instruction memory
//!
//! Read-only word store addressed by byte pc: word index = pc / 4. Every
//! fetch checks alignment and bounds before touching the buffer.

use crate::error::{Result, RuntimeError};
use rv32_spec::{Program, INSTRUCTION_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Wrap an already validated program
    pub fn new(program: Program) -> Self {
        Self {
            words: program.code,
        }
    }

    /// Validate and load a raw little-endian image
    pub fn load(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(Program::from_bytes(bytes)?))
    }

    /// Fetch the instruction word at byte address `pc`
    pub fn fetch_word(&self, pc: u32) -> Result<u32> {
        if pc % INSTRUCTION_SIZE != 0 {
            return Err(RuntimeError::MisalignedPc { pc });
        }
        let index = (pc / INSTRUCTION_SIZE) as usize;
        self.words
            .get(index)
            .copied()
            .ok_or(RuntimeError::OutOfBounds { pc })
    }

    /// Number of instruction words
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// One past the last valid byte address
    #[inline]
    pub fn end_address(&self) -> u64 {
        self.words.len() as u64 * INSTRUCTION_SIZE as u64
    }
}

impl From<Program> for InstructionMemory {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}
