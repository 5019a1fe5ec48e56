//! Human-readable register dump

use std::fmt::Write;

use rv32_runtime::RegisterSnapshot;

/// Render the completion notice followed by every register and the pc.
///
/// Each register line is `{abi name}  {signed decimal}  ({hex})`.
pub fn render(snapshot: &RegisterSnapshot) -> String {
    let mut out = String::new();
    out.push_str("execution completed\n");
    out.push_str("registers:\n");

    for (reg, value) in snapshot.iter() {
        let _ = writeln!(out, "{:<4}  {:>11}  ({:#010x})", reg.name(), value as i32, value);
    }

    let _ = writeln!(out, "pc:    {}", snapshot.pc);
    out
}
