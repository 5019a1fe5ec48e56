//! # RV32 Disassembler
//!
//! Decode RV32 instruction words and render them as assembly text.
//!
//! [`decode`] is total: every 32-bit word maps to an [`Instruction`], with
//! unknown encodings mapped to [`Instruction::Unrecognized`]. The runtime
//! uses the same decoder, so whatever the disassembler shows is what the
//! executor runs.
//!
//! ## Example
//!
//! ```rust
//! use rv32_spec::Program;
//! use rv32_disassembler::disassemble;
//!
//! let program = Program::new(vec![0x000012B7, 0x00000073]); // lui, ecall
//! let asm = disassemble(&program);
//! assert!(asm.contains("lui t0, 0x1"));
//! assert!(asm.contains("ecall"));
//! ```
//!
//! [`Instruction`]: rv32_spec::Instruction
//! [`Instruction::Unrecognized`]: rv32_spec::Instruction::Unrecognized

pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use disassembler::disassemble;
pub use decoder::decode;
pub use formatter::format;
