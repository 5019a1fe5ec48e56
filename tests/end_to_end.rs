//! End-to-end tests for the RV32 toolchain
//!
//! These tests verify the complete workflow:
//! 1. Build a raw little-endian byte image
//! 2. Validate it into a Program
//! 3. Execute the program in the VM
//! 4. Inspect the final register snapshot

use rv32_runtime::{HaltReason, RuntimeError, VMConfig, VM};
use rv32_spec::{Program, Register, Rv32Error};

fn image(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

fn run_image(bytes: &[u8]) -> Result<rv32_runtime::ExecutionResult, RuntimeError> {
    let program = Program::from_bytes(bytes)?;
    VM::new(program, VMConfig::default()).run()
}

// ============================================================================
// Image -> Execute Tests
// ============================================================================

#[test]
fn test_lui_image_runs_off_the_end() {
    // lui t0, 0x1 as raw bytes
    let bytes = [0xB7, 0x12, 0x00, 0x00];
    let err = run_image(&bytes).unwrap_err();

    assert!(matches!(err, RuntimeError::OutOfBounds { pc: 4 }));
}

#[test]
fn test_lui_then_ecall() {
    let result = run_image(&image(&[0x000012B7, 0x00000073])).unwrap();

    assert_eq!(result.halt_reason, HaltReason::Ecall);
    assert_eq!(result.registers.get(Register::R5), 0x0000_1000);
    assert_eq!(result.registers.pc, 4);
}

#[test]
fn test_addi_sequence() {
    // addi a0, zero, 10 ; addi a0, a0, -3 ; ecall
    let result = run_image(&image(&[0x00A00513, 0xFFD50513, 0x00000073])).unwrap();

    assert_eq!(result.registers.get(Register::A0), 7);
    assert_eq!(result.registers.pc, 8);
}

#[test]
fn test_add_and_sub() {
    // addi t0, zero, 50 ; addi t1, zero, 30 ; add t2, t0, t1 ; sub t3, t0, t1 ; ecall
    let words = [
        0x03200293, // addi t0, zero, 50
        0x01E00313, // addi t1, zero, 30
        0x006283B3, // add  t2, t0, t1
        0x40628E33, // sub  t3, t0, t1
        0x00000073, // ecall
    ];
    let result = run_image(&image(&words)).unwrap();

    assert_eq!(result.registers.get(Register::T2), 80);
    assert_eq!(result.registers.get(Register::T3), 20);
    assert_eq!(result.steps, 4);
}

#[test]
fn test_zero_register_write_is_discarded() {
    // addi zero, zero, 5 ; ecall
    let result = run_image(&image(&[0x00500013, 0x00000073])).unwrap();

    assert_eq!(result.registers.get(Register::ZERO), 0);
}

#[test]
fn test_unknown_word_faults() {
    let err = run_image(&image(&[0x00000013, 0x00000000])).unwrap_err();

    assert!(matches!(err, RuntimeError::Unimplemented { word: 0, pc: 4 }));
    assert!(!err.is_fetch_fault());
}

// ============================================================================
// Image Validation Tests
// ============================================================================

#[test]
fn test_empty_image_rejected() {
    let err = run_image(&[]).unwrap_err();
    assert!(matches!(err, RuntimeError::SpecError(Rv32Error::EmptyImage)));
}

#[test]
fn test_misaligned_image_rejected() {
    for len in [1usize, 2, 3, 5, 7] {
        let bytes = vec![0x13; len];
        let err = run_image(&bytes).unwrap_err();
        assert!(
            matches!(err, RuntimeError::SpecError(Rv32Error::InvalidImageSize { len: l }) if l == len),
            "len {len}: {err:?}"
        );
    }
}

#[test]
fn test_image_file_round_trip() {
    let path = std::env::temp_dir().join(format!("rv32-e2e-{}.bin", std::process::id()));
    std::fs::write(&path, image(&[0x02A00093, 0x00000073])).unwrap();

    let program = Program::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let result = VM::new(program, VMConfig::default()).run().unwrap();
    assert_eq!(result.registers.get(Register::RA), 42);
}

#[test]
fn test_missing_image_file() {
    let err = Program::from_file("/nonexistent/rv32/image.bin").unwrap_err();
    assert!(matches!(err, Rv32Error::IoError(_)));
}
