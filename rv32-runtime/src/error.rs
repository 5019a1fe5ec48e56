//! Runtime error types

use rv32_spec::Rv32Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Program image error: {0}")]
    SpecError(#[from] Rv32Error),

    #[error("Instruction fetch out of bounds: pc {pc:#010x}")]
    OutOfBounds { pc: u32 },

    #[error("Misaligned instruction fetch: pc {pc:#010x}")]
    MisalignedPc { pc: u32 },

    #[error("Unimplemented instruction {word:#010x} at pc {pc:#010x}")]
    Unimplemented { word: u32, pc: u32 },
}

impl RuntimeError {
    /// Check if the fault happened while fetching rather than executing
    pub fn is_fetch_fault(&self) -> bool {
        matches!(
            self,
            RuntimeError::OutOfBounds { .. } | RuntimeError::MisalignedPc { .. }
        )
    }

    /// Program counter at which the fault occurred, if any
    pub fn pc(&self) -> Option<u32> {
        match self {
            RuntimeError::OutOfBounds { pc }
            | RuntimeError::MisalignedPc { pc }
            | RuntimeError::Unimplemented { pc, .. } => Some(*pc),
            RuntimeError::SpecError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
