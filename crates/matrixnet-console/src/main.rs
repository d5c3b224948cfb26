//! MatrixNet - The Operator's Console
//!
//! Command-driven simulator of a covert network topology: secure hosts
//! joined by sealable backdoor tunnels, with route tracing under a
//! step-dependent cost model and structural-resilience queries.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use matrixnet_console::Console;

#[derive(Parser)]
#[command(
    name = "matrixnet",
    about = "Covert network topology simulator",
    version
)]
struct Cli {
    /// Command file to execute; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write replies to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing; logs go to stderr so the reply stream stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut console = Console::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(reply) = console.execute(&line) {
            writeln!(writer, "{reply}")?;
        }
    }
    writer.flush()?;

    Ok(())
}
