use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dockerlog_logs::{EventExtractor, OutputFormat};

/// Dockerlog - Extract container and image lifecycle events from Docker API proxy logs
#[derive(Parser, Debug)]
#[command(name = "dockerlog")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log file to read (reads standard input if omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Display output in a human-readable format
    #[arg(short, long)]
    readable: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries only event records
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let result = run_app(args);

    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

fn run_app(args: Args) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open log file '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let format = OutputFormat::from_readable(args.readable);
    let mut extractor = EventExtractor::new().context("failed to build event matchers")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let summary = extractor
        .run(reader, &mut writer, format)
        .context("failed to process log input")?;

    tracing::info!(
        lines = summary.lines_read,
        events = summary.events_emitted,
        "finished"
    );

    Ok(())
}
