//! Mission runner CLI.
//!
//! Reads mission text from a file or stdin, runs every explorer in order,
//! and prints one outcome line per explorer.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mars_explorer::run_mission;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Run explorer missions on a bounded Martian surface.
#[derive(Parser, Debug)]
#[command(name = "mars-explorer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a mission file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Emit outcomes as a JSON array instead of report lines
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the reports.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read mission file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read mission from stdin")?;
            buffer
        }
    };

    let outcomes = run_mission(&input)?;
    info!(explorers = outcomes.len(), "mission complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("{outcome}");
        }
    }

    Ok(())
}
