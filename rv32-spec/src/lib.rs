//! # RV32 Integer ISA Specification
//!
//! 32-bit RISC-V integer instruction set definitions shared by the decoder,
//! the runtime, and tooling.
//!
//! ## Key Features
//! - 32 general-purpose 32-bit registers, `x0` hardwired to zero
//! - Fixed 32-bit little-endian instruction words
//! - Byte-addressed program counter, instructions at multiples of 4
//! - RV32I computational and control-transfer instructions
//! - Flat program images (no header, no symbol table)

pub mod register;
pub mod opcode;
pub mod instruction;
pub mod encoding;
pub mod error;
pub mod program;

pub use register::{Register, NUM_REGISTERS};
pub use opcode::Opcode;
pub use instruction::Instruction;
pub use error::{Rv32Error, Result};
pub use program::Program;

/// Size of one instruction in bytes
pub const INSTRUCTION_SIZE: u32 = 4;

/// Word type (32-bit register value)
pub type Word = u32;

/// Address type (byte address)
pub type Address = u32;

/// Signed word
pub type SWord = i32;
