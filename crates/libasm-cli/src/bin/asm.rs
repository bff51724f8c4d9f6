use anyhow::Result;
use clap::Parser;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use libasm_cli::parse_u32;
use libasm_rs::{Assembler, Registry};

#[derive(Parser, Debug)]
#[command(author, version, about = "Table-driven line assembler")]
struct Opts {
    /// CPU name or alias
    #[arg(long, default_value = "6800")]
    cpu: String,
    /// Input assembly file (one instruction per line, `;` comments)
    #[arg(short, long)]
    input: PathBuf,
    /// Output binary file
    #[arg(short, long)]
    output: PathBuf,
    /// Start address in the CPU's address units (hex or dec)
    #[arg(long, default_value = "0")]
    start: String,
    /// Print a listing to stdout
    #[arg(long)]
    list: bool,
}

/// Source line with comments and blanks removed, or `None` if nothing is left.
fn source(line: &str) -> Option<&str> {
    let ls = line.trim_start();
    if ls.starts_with('#') {
        return None;
    }
    let s = match line.find(';') {
        Some(p) => &line[..p],
        None => line,
    };
    let s = s.trim_end();
    (!s.trim().is_empty()).then_some(s)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let asm = Registry::with_defaults().assembler(&opts.cpu)?;
    let text = fs::read_to_string(&opts.input)?;
    let unit = asm.address_unit().bytes();

    let mut addr = parse_u32(&opts.start)?;
    let mut bin = Vec::new();
    let mut listing = String::new();
    let mut failed = 0usize;
    for (n, raw) in text.lines().enumerate() {
        let Some(src) = source(raw) else { continue };
        let insn = asm.assemble(src, addr);
        if let Some(e) = insn.error() {
            failed += 1;
            eprintln!("{}:{}: {e}: {}", opts.input.display(), n + 1, src.trim());
        }
        debug!(line = n + 1, addr, len = insn.length(), "assembled");
        if opts.list {
            let bytes: Vec<String> = insn.bytes().iter().map(|b| format!("{b:02X}")).collect();
            let _ = writeln!(listing, "{addr:06X}: {:<12} {}", bytes.join(" "), src.trim());
        }
        bin.extend_from_slice(insn.bytes());
        addr = addr.wrapping_add(insn.length() as u32 / unit);
    }

    fs::write(&opts.output, &bin)?;
    if opts.list {
        print!("{listing}");
    }
    info!(cpu = asm.cpu_name(), bytes = bin.len(), failed, "wrote {}", opts.output.display());
    anyhow::ensure!(failed == 0, "{failed} line(s) failed to assemble");
    Ok(())
}
