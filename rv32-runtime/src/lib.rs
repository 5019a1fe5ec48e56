//! # RV32 Runtime
//!
//! Fetch-decode-execute interpreter for a subset of the RV32I base integer
//! instruction set.
//!
//! ## Features
//!
//! - **32 registers**: x0-x31 with `x0` hardwired to zero
//! - **Byte-addressed pc**: instructions are fetched at `pc / 4`
//! - **Integer ISA**: LUI, AUIPC, OP-IMM, OP, branches, JAL, JALR
//! - **Halting**: ECALL, an optional step budget, or an external cancel flag
//!
//! ## Example
//!
//! ```rust
//! use rv32_runtime::{VM, VMConfig, HaltReason};
//! use rv32_spec::{Program, Register};
//!
//! // lui t0, 0x1 ; ecall
//! let program = Program::new(vec![0x000012B7, 0x00000073]);
//! let result = VM::new(program, VMConfig::default()).run().unwrap();
//!
//! assert_eq!(result.halt_reason, HaltReason::Ecall);
//! assert_eq!(result.registers.get(Register::T0), 0x1000);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod execute;
pub mod vm;

pub use state::{HaltReason, RegisterFile, RegisterSnapshot};
pub use memory::InstructionMemory;
pub use execute::execute;
pub use vm::{VM, VMConfig, ExecutionResult};
pub use error::RuntimeError;

/// Simple execution helper
///
/// Runs a program to completion with the default configuration.
pub fn run(program: rv32_spec::Program) -> Result<ExecutionResult, RuntimeError> {
    VM::new(program, VMConfig::default()).run()
}
