//! Main disassembler logic

use rv32_spec::{Program, INSTRUCTION_SIZE};
use crate::decoder::decode;
use crate::formatter::format;

/// Disassemble a program into assembly text
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("; RV32 Disassembly\n");
    output.push_str(&format!(
        "; Code size: {} bytes ({} instructions)\n",
        program.size_bytes(),
        program.len()
    ));
    output.push('\n');

    for (addr, word) in listing(program) {
        output.push_str(&format!("0x{:08X}:  {:08X}  {}\n", addr, word, format(&decode(word))));
    }

    output
}

/// Pair each word with its byte address
fn listing(program: &Program) -> impl Iterator<Item = (u32, u32)> + '_ {
    program
        .code
        .iter()
        .enumerate()
        .map(|(i, &word)| (i as u32 * INSTRUCTION_SIZE, word))
}
