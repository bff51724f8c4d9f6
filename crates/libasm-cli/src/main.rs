use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use libasm_cli::{line, load_options, load_raw_bin, parse_u32, InsnOut};
use libasm_rs::{DisMemory, Disassembler, Registry};

#[derive(Parser, Debug)]
#[command(author, version, about = "Table-driven disassembler CLI", long_about = None)]
struct Cli {
    /// JSON file with output options
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Render mnemonics and operands in lower case
    #[arg(long, global = true)]
    lowercase: bool,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct Load {
    /// CPU name or alias (see `cpus`)
    #[arg(long, default_value = "6800")]
    cpu: String,
    /// Load address of the binary, in the CPU's address units (hex or dec)
    #[arg(long, default_value = "0")]
    base: String,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported CPUs
    Cpus,
    /// List loaded segments (simple single-segment for raw .bin)
    Sections {
        #[command(flatten)]
        load: Load,
    },
    /// Disassemble a range [start, end) of addresses
    Range {
        #[command(flatten)]
        load: Load,
        /// Start address (hex or dec, default: segment start)
        start: Option<String>,
        /// End address (hex or dec, exclusive, default: segment end)
        end: Option<String>,
        /// Leave the raw instruction bytes out of the listing
        #[arg(long)]
        no_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let registry = Registry::with_defaults();
    let mut options = load_options(cli.config.as_deref())?;
    options.lowercase |= cli.lowercase;

    match cli.cmd {
        Command::Cpus => {
            println!("{:<10} {:<10} {:<10} {:<5}", "name", "aliases", "family", "unit");
            for m in registry.cpus() {
                let unit = (m.disassembler)().address_unit();
                println!("{:<10} {:<10} {:<10} {:?}", m.name, m.aliases.join(","), m.family, unit);
            }
        }
        Command::Sections { load } => {
            let dis = registry.disassembler(&load.cpu)?;
            let img = load_raw_bin(&load.input, parse_u32(&load.base)?, load.skip, load.len)?;
            println!("{:<10} {:<10} {:<10} {:<6}", "name", "start", "end", "kind");
            for s in &img.segments {
                let end = s.end(dis.address_unit());
                println!("{:<10} {:#08x}   {end:#08x}   {:<6}", s.name, s.base, s.kind);
            }
        }
        Command::Range { load, start, end, no_bytes, format, out } => {
            let dis = registry.disassembler(&load.cpu)?;
            let img = load_raw_bin(&load.input, parse_u32(&load.base)?, load.skip, load.len)?;
            let Some(mut mem) = img.memory(dis.address_unit()) else {
                anyhow::bail!("image has no segments");
            };
            let start = start.as_deref().map(parse_u32).transpose()?.unwrap_or(mem.base);
            let end = end.as_deref().map(parse_u32).transpose()?.unwrap_or_else(|| mem.end());
            anyhow::ensure!(end >= start, "end must be >= start");
            anyhow::ensure!(mem.seek(start), "start {start:#x} is outside the image");
            options.show_bytes &= !no_bytes;

            let mut insns = Vec::new();
            while mem.has_next() && mem.address() < end {
                insns.push(dis.disassemble(&mut mem));
            }
            let failed = insns.iter().filter(|i| !i.is_ok()).count();
            info!(cpu = dis.cpu_name(), count = insns.len(), failed, "disassembled");

            let buf = match format {
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for insn in &insns {
                        let _ = writeln!(buf, "{}", line(insn, &options));
                    }
                    buf
                }
                OutputFormat::Json => {
                    let rows: Vec<InsnOut> = insns.iter().map(|i| InsnOut::new(i, &options)).collect();
                    serde_json::to_string_pretty(&rows)? + "\n"
                }
            };
            write_out(out.as_deref(), &buf)?;
        }
    }
    Ok(())
}

fn write_out(path: Option<&Path>, buf: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, buf)?;
    } else {
        print!("{buf}");
    }
    Ok(())
}
