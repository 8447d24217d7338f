//! rpnsheet - Evaluate a sheet of postfix cell formulas.
//!
//! Reads the sheet from FILE (or standard input), computes every cell and
//! prints the values sorted by cell name. A circular dependency is reported
//! on standard output and is not treated as a failure.

use anyhow::{Context, Result};
use clap::Parser;
use rpnsheet_core::Document;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Evaluate a sheet of postfix (RPN) cell formulas
#[derive(Parser)]
#[command(name = "rpnsheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sheet file to read (standard input when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print one `NAME => VALUE` line per cell
    #[arg(short, long)]
    readable: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut doc = match &cli.file {
        Some(path) => Document::open(path)
            .with_context(|| format!("Failed to read sheet: {}", path.display()))?,
        None => Document::from_reader(io::stdin().lock())
            .context("Failed to read sheet from standard input")?,
    };

    if let Err(e) = doc.compute() {
        if let Some(cycle) = e.as_circular() {
            println!("{}", cycle);
            return Ok(());
        }
        return Err(e).context("Failed to compute sheet");
    }

    let stdout = io::stdout();
    doc.print(BufWriter::new(stdout.lock()), cli.readable)
        .context("Failed to write values")?;
    Ok(())
}
