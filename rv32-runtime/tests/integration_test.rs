//! Integration tests for the RV32 runtime

use proptest::prelude::*;
use rv32_runtime::{HaltReason, RuntimeError, VMConfig, VM};
use rv32_spec::encoding::encode;
use rv32_spec::{Instruction, Program, Register};

fn program(instructions: &[Instruction]) -> Program {
    Program::new(instructions.iter().map(encode).collect())
}

#[test]
fn test_lui_then_fetch_past_end() {
    // lui t0, 0x1 with nothing after it
    let vm = VM::new(Program::new(vec![0x000012B7]), VMConfig::default());
    let err = vm.run().unwrap_err();

    assert!(matches!(err, RuntimeError::OutOfBounds { pc: 4 }));
}

#[test]
fn test_lui_single_step() {
    let mut vm = VM::new(Program::new(vec![0x000012B7]), VMConfig::default());

    assert_eq!(vm.step().unwrap(), None);
    assert_eq!(vm.state().read(Register::R5), 0x0000_1000);
    assert_eq!(vm.state().pc(), 4);
}

#[test]
fn test_addi_negative_immediate() {
    // addi a0, zero, 10 ; addi a0, a0, -3 ; ecall
    let code = vec![0x00A00513, 0xFFD50513, 0x00000073];
    let result = VM::new(Program::new(code), VMConfig::default()).run().unwrap();

    assert_eq!(result.registers.get(Register::A0), 7);
    assert_eq!(result.steps, 2);
}

#[test]
fn test_add_wraps() {
    // Program:
    //   ADDI a0, zero, -1
    //   ADDI a1, zero, 1
    //   ADD a2, a0, a1
    //   ECALL
    let code = program(&[
        Instruction::Addi {
            rd: Register::A0,
            rs1: Register::ZERO,
            imm: -1,
        },
        Instruction::Addi {
            rd: Register::A1,
            rs1: Register::ZERO,
            imm: 1,
        },
        Instruction::Add {
            rd: Register::A2,
            rs1: Register::A0,
            rs2: Register::A1,
        },
        Instruction::Ecall,
    ]);

    let result = VM::new(code, VMConfig::default()).run().unwrap();

    assert_eq!(result.registers.get(Register::A0), 0xFFFF_FFFF);
    assert_eq!(result.registers.get(Register::A2), 0);
}

#[test]
fn test_ecall_leaves_pc_at_ecall() {
    let code = program(&[
        Instruction::Addi {
            rd: Register::T0,
            rs1: Register::ZERO,
            imm: 1,
        },
        Instruction::Addi {
            rd: Register::T0,
            rs1: Register::T0,
            imm: 1,
        },
        Instruction::Ecall,
        Instruction::Unrecognized,
    ]);

    let result = VM::new(code, VMConfig::default()).run().unwrap();

    assert_eq!(result.halt_reason, HaltReason::Ecall);
    assert_eq!(result.registers.pc, 8);
    assert_eq!(result.registers.get(Register::T0), 2);
}

#[test]
fn test_unrecognized_word_faults_with_context() {
    // addi ; lw a0, 0(sp)
    let code = vec![0x00000013, 0x00012503];
    let err = VM::new(Program::new(code), VMConfig::default()).run().unwrap_err();

    match err {
        RuntimeError::Unimplemented { word, pc } => {
            assert_eq!(word, 0x00012503);
            assert_eq!(pc, 4);
        }
        other => panic!("expected Unimplemented, got {other:?}"),
    }
}

#[test]
fn test_countdown_loop() {
    // Sum 1..=10 into a1:
    //   addi a0, zero, 10
    // loop:
    //   add  a1, a1, a0
    //   addi a0, a0, -1
    //   blt  zero, a0, loop
    //   ecall
    let code = program(&[
        Instruction::Addi {
            rd: Register::A0,
            rs1: Register::ZERO,
            imm: 10,
        },
        Instruction::Add {
            rd: Register::A1,
            rs1: Register::A1,
            rs2: Register::A0,
        },
        Instruction::Addi {
            rd: Register::A0,
            rs1: Register::A0,
            imm: -1,
        },
        Instruction::Blt {
            rs1: Register::ZERO,
            rs2: Register::A0,
            offset: -8,
        },
        Instruction::Ecall,
    ]);

    let result = VM::new(code, VMConfig::default()).run().unwrap();

    assert_eq!(result.registers.get(Register::A1), 55);
    assert_eq!(result.registers.pc, 16);
}

#[test]
fn test_call_and_return() {
    // jal ra, func ; ecall ; func: addi a0, zero, 99 ; jalr zero, 0(ra)
    let code = program(&[
        Instruction::Jal {
            rd: Register::RA,
            offset: 8,
        },
        Instruction::Ecall,
        Instruction::Addi {
            rd: Register::A0,
            rs1: Register::ZERO,
            imm: 99,
        },
        Instruction::Jalr {
            rd: Register::ZERO,
            rs1: Register::RA,
            offset: 0,
        },
    ]);

    let result = VM::new(code, VMConfig::default()).run().unwrap();

    assert_eq!(result.registers.get(Register::A0), 99);
    assert_eq!(result.registers.get(Register::RA), 4);
    assert_eq!(result.registers.pc, 4);
    assert_eq!(result.steps, 3);
}

#[test]
fn test_auipc_reads_current_pc() {
    let code = program(&[
        Instruction::Addi {
            rd: Register::ZERO,
            rs1: Register::ZERO,
            imm: 0,
        },
        Instruction::Auipc {
            rd: Register::A0,
            imm: 0x2000,
        },
        Instruction::Ecall,
    ]);

    let result = VM::new(code, VMConfig::default()).run().unwrap();
    assert_eq!(result.registers.get(Register::A0), 0x2004);
}

#[test]
fn test_step_limit_on_self_loop() {
    let code = program(&[Instruction::Jal {
        rd: Register::ZERO,
        offset: 0,
    }]);

    let result = VM::new(code, VMConfig::with_max_steps(1_000)).run().unwrap();

    assert_eq!(result.halt_reason, HaltReason::StepLimit);
    assert_eq!(result.steps, 1_000);
}

#[test]
fn test_zero_step_budget_halts_before_fetch() {
    // An empty program would fault on fetch; a zero budget stops first
    let result = VM::new(Program::default(), VMConfig::with_max_steps(0))
        .run()
        .unwrap();

    assert_eq!(result.halt_reason, HaltReason::StepLimit);
    assert_eq!(result.steps, 0);
}

#[test]
fn test_cancel_from_another_thread() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let code = program(&[Instruction::Jal {
        rd: Register::ZERO,
        offset: 0,
    }]);
    let flag = Arc::new(AtomicBool::new(false));
    let vm = VM::new(code, VMConfig::default()).with_cancel_flag(flag.clone());

    let handle = std::thread::spawn(move || vm.run());
    flag.store(true, Ordering::Relaxed);
    let result = handle.join().unwrap().unwrap();

    assert_eq!(result.halt_reason, HaltReason::Cancelled);
}

fn arb_register() -> impl Strategy<Value = Register> {
    (0usize..32).prop_map(|i| Register::ALL[i])
}

fn arb_alu_instruction() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        (arb_register(), arb_register(), -2048i32..2048)
            .prop_map(|(rd, rs1, imm)| Instruction::Addi { rd, rs1, imm }),
        (arb_register(), arb_register(), -2048i32..2048)
            .prop_map(|(rd, rs1, imm)| Instruction::Xori { rd, rs1, imm }),
        (arb_register(), arb_register(), 0u8..32)
            .prop_map(|(rd, rs1, shamt)| Instruction::Srai { rd, rs1, shamt }),
        (arb_register(), any::<u32>())
            .prop_map(|(rd, imm)| Instruction::Lui { rd, imm: imm & 0xFFFF_F000 }),
        (arb_register(), arb_register(), arb_register())
            .prop_map(|(rd, rs1, rs2)| Instruction::Add { rd, rs1, rs2 }),
        (arb_register(), arb_register(), arb_register())
            .prop_map(|(rd, rs1, rs2)| Instruction::Sub { rd, rs1, rs2 }),
        (arb_register(), arb_register(), arb_register())
            .prop_map(|(rd, rs1, rs2)| Instruction::Sltu { rd, rs1, rs2 }),
        (arb_register(), arb_register(), arb_register())
            .prop_map(|(rd, rs1, rs2)| Instruction::Or { rd, rs1, rs2 }),
    ]
}

proptest! {
    #[test]
    fn prop_zero_register_stays_zero(instructions in prop::collection::vec(arb_alu_instruction(), 1..64)) {
        let mut vm = VM::new(program(&instructions), VMConfig::default());

        for _ in 0..instructions.len() {
            prop_assert_eq!(vm.step().unwrap(), None);
            prop_assert_eq!(vm.state().read(Register::ZERO), 0);
        }
        prop_assert_eq!(vm.state().pc() as usize, instructions.len() * 4);
    }

    #[test]
    fn prop_straight_line_code_runs_off_the_end(instructions in prop::collection::vec(arb_alu_instruction(), 0..32)) {
        let err = VM::new(program(&instructions), VMConfig::default()).run().unwrap_err();
        prop_assert!(
            matches!(err, RuntimeError::OutOfBounds { pc } if pc as usize == instructions.len() * 4),
            "expected OutOfBounds, got {:?}",
            err
        );
    }
}
