use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use meterlog_kernel::config::StoreConfig;
use meterlog_kernel::log::{CsvFileStore, ReadingStore};
use meterlog_kernel::pipeline::{latest_summary, record_reading, RecordOutcome};
use meterlog_kernel::report::{FIRST_ENTRY_NOTICE, NO_ENTRIES_NOTICE};

mod logging;
mod prompt;

/// Electricity Meter Logger
#[derive(Parser, Debug)]
#[command(name = "meterlog")]
#[command(about = "Record electricity meter readings and track daily usage", long_about = None)]
struct Cli {
    /// `add` records a new reading, `show` prints the latest one
    #[arg(value_enum, ignore_case = true)]
    mode: Mode,

    /// Path to the reading log (overrides --config)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Path to store config JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Add,
    Show,
}

fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let config = if let Some(path) = &cli.config {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        StoreConfig::from_json(&data)?
    } else {
        StoreConfig::default_config()
    };

    Ok(match &cli.log {
        Some(path) => config.with_log_path(path),
        None => config,
    })
}

fn run_add<S: ReadingStore, R: BufRead, W: Write>(
    store: &mut S,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Electricity Meter Logger - Add Mode")?;
    let reading = prompt::read_reading(input, output)?;

    match record_reading(store, reading).context("recording reading")? {
        RecordOutcome::FirstEntry => writeln!(output, "{FIRST_ENTRY_NOTICE}")?,
        RecordOutcome::Compared(report) => writeln!(output, "\n{report}")?,
    }
    Ok(())
}

fn run_show<S: ReadingStore, W: Write>(store: &S, output: &mut W) -> Result<()> {
    writeln!(output, "Electricity Meter Logger - Show Mode")?;

    match latest_summary(store).context("summarising log")? {
        Some(summary) => writeln!(output, "\n{summary}")?,
        None => writeln!(output, "{NO_ENTRIES_NOTICE}")?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = load_config(&cli)?;
    debug!("using log at {}", config.log_path.display());
    let mut store = CsvFileStore::from_config(&config);

    let mut output = io::stdout().lock();
    match cli.mode {
        Mode::Add => run_add(&mut store, &mut io::stdin().lock(), &mut output),
        Mode::Show => run_show(&store, &mut output),
    }
}
