//! Fetch-decode-execute loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::Result;
use crate::execute::execute;
use crate::memory::InstructionMemory;
use crate::state::{HaltReason, RegisterFile, RegisterSnapshot};
use rv32_spec::Program;
use serde::Serialize;

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Maximum number of instructions to execute before halting.
    ///
    /// `None` runs until ECALL or a fault.
    pub max_steps: Option<u64>,
}

impl VMConfig {
    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Number of instructions executed (the halting ECALL is not counted)
    pub steps: u64,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// Final register file
    pub registers: RegisterSnapshot,
}

/// RV32 Virtual Machine
///
/// Owns one register file and one instruction memory for a single run.
pub struct VM {
    /// Registers and pc
    state: RegisterFile,

    /// Program image
    memory: InstructionMemory,

    /// Configuration
    config: VMConfig,

    /// External cancellation request, polled once per cycle
    cancel: Option<Arc<AtomicBool>>,

    /// Instructions retired so far
    steps: u64,
}

impl VM {
    /// Create a new VM with a program
    pub fn new(program: Program, config: VMConfig) -> Self {
        Self::with_memory(InstructionMemory::new(program), config)
    }

    /// Create a new VM over an already loaded instruction memory
    pub fn with_memory(memory: InstructionMemory, config: VMConfig) -> Self {
        Self {
            state: RegisterFile::new(),
            memory,
            config,
            cancel: None,
            steps: 0,
        }
    }

    /// Install a cancellation flag; setting it stops the run at the next cycle
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Run the VM until halt or fault
    pub fn run(mut self) -> Result<ExecutionResult> {
        let halt_reason = loop {
            if let Some(reason) = self.step()? {
                break reason;
            }
        };

        tracing::debug!(
            reason = %halt_reason,
            steps = self.steps,
            pc = format_args!("{:#010x}", self.state.pc()),
            "halted"
        );

        Ok(ExecutionResult {
            steps: self.steps,
            halt_reason,
            registers: self.state.snapshot(),
        })
    }

    /// Execute exactly one cycle.
    ///
    /// Returns `Some(reason)` once the machine has halted. Calling `step`
    /// again after an ECALL halts again at the same pc.
    pub fn step(&mut self) -> Result<Option<HaltReason>> {
        if let Some(reason) = self.check_budget() {
            return Ok(Some(reason));
        }

        let pc = self.state.pc();
        let word = self.memory.fetch_word(pc).map_err(|err| {
            tracing::warn!(pc = format_args!("{:#010x}", pc), "{}", err);
            err
        })?;

        let instr = rv32_disassembler::decode(word);

        tracing::trace!(
            step = self.steps,
            pc = format_args!("{:#010x}", pc),
            word = format_args!("{:08x}", word),
            "{}",
            rv32_disassembler::format(&instr)
        );

        match execute(&instr, word, &mut self.state) {
            Ok(Some(reason)) => Ok(Some(reason)),
            Ok(None) => {
                self.steps += 1;
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(pc = format_args!("{:#010x}", pc), "{}", err);
                Err(err)
            }
        }
    }

    fn check_budget(&self) -> Option<HaltReason> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Some(HaltReason::Cancelled);
            }
        }
        match self.config.max_steps {
            Some(limit) if self.steps >= limit => Some(HaltReason::StepLimit),
            _ => None,
        }
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &RegisterFile {
        &self.state
    }

    /// Get instruction memory (for debugging)
    pub fn memory(&self) -> &InstructionMemory {
        &self.memory
    }

    /// Instructions retired so far
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
