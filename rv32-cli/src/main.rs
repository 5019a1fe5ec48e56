//! `rv32`: load a raw RV32 program image and run it to completion.

mod dump;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rv32_runtime::{HaltReason, VMConfig, VM};
use rv32_spec::Program;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "rv32", version, about = "Run a raw little-endian RV32 program image")]
struct Args {
    /// Path to the program image
    #[clap(value_name = "IMAGE")]
    image: PathBuf,

    /// Stop after this many instructions
    #[clap(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Log every executed instruction to stderr
    #[clap(long)]
    trace: bool,

    /// Print the final registers as JSON
    #[clap(long, conflicts_with = "disasm")]
    json: bool,

    /// Print a disassembly listing instead of executing
    #[clap(long)]
    disasm: bool,
}

fn init_logging(trace: bool) {
    let default = if trace { "warn,rv32_runtime=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.trace);

    let program = Program::from_file(&args.image)
        .with_context(|| format!("failed to load program image {}", args.image.display()))?;
    tracing::debug!(image = %args.image.display(), "loaded {}", program);

    if args.disasm {
        print!("{}", rv32_disassembler::disassemble(&program));
        return Ok(());
    }

    let config = VMConfig {
        max_steps: args.max_steps,
    };
    let result = VM::new(program, config)
        .run()
        .context("execution failed")?;

    if result.halt_reason != HaltReason::Ecall {
        tracing::warn!(steps = result.steps, "stopped before ecall: {}", result.halt_reason);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", dump::render(&result.registers));
    }

    Ok(())
}
