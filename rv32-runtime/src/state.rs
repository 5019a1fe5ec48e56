//! Architectural state: register file and program counter

use rv32_spec::{Register, NUM_REGISTERS};
use serde::{Deserialize, Serialize};

/// Register file
///
/// `x0` is enforced at the write site: writes to it are discarded, so it
/// reads as zero on every cycle without any per-cycle reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    /// Integer registers (x0-x31)
    regs: [u32; NUM_REGISTERS],

    /// Program counter (byte address)
    pc: u32,
}

impl RegisterFile {
    /// All registers and the pc start at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Read register (x0 always returns 0)
    #[inline]
    pub fn read(&self, reg: Register) -> u32 {
        self.regs[reg.index()]
    }

    /// Write register (writes to x0 are ignored)
    #[inline]
    pub fn write(&mut self, reg: Register, value: u32) {
        if !reg.is_zero() {
            self.regs[reg.index()] = value;
        }
    }

    /// Current program counter
    #[inline]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Move the program counter forward by `delta` bytes (wrapping)
    #[inline]
    pub fn advance(&mut self, delta: u32) {
        self.pc = self.pc.wrapping_add(delta);
    }

    /// Redirect the program counter
    #[inline]
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Read-only copy of every register and the pc
    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            registers: self.regs,
            pc: self.pc,
        }
    }
}

/// Snapshot of the register file handed to callers for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSnapshot {
    /// x0-x31 in architectural order
    pub registers: [u32; NUM_REGISTERS],

    /// Program counter (byte address)
    pub pc: u32,
}

impl RegisterSnapshot {
    #[inline]
    pub fn get(&self, reg: Register) -> u32 {
        self.registers[reg.index()]
    }

    /// Iterate `(register, value)` pairs in architectural order
    pub fn iter(&self) -> impl Iterator<Item = (Register, u32)> + '_ {
        Register::ALL.iter().map(move |&reg| (reg, self.get(reg)))
    }
}

/// Why a run stopped without faulting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// ECALL reached; pc is left at the ECALL
    Ecall,
    /// Configured step budget exhausted
    StepLimit,
    /// Cancellation flag observed
    Cancelled,
}

impl std::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HaltReason::Ecall => write!(f, "ecall"),
            HaltReason::StepLimit => write!(f, "step limit"),
            HaltReason::Cancelled => write!(f, "cancelled"),
        }
    }
}
