mod scenario;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::scenario::{Replay, Scenario};

#[derive(Parser, Debug)]
#[command(
    name = "folio-sim",
    about = "Replay a scripted page session and print the UI commands it produces"
)]
struct Cli {
    /// Scenario JSON: config, page description, layout, and timed events.
    scenario: PathBuf,

    /// Stop draining timers that fall due after this many milliseconds.
    #[arg(long)]
    until: Option<u64>,

    /// Pretty-print each command instead of one JSON object per line.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.scenario)
        .with_context(|| format!("failed to read {}", cli.scenario.display()))?;
    let scenario = Scenario::from_json(&json)?;
    log::info!(
        "replaying {} events from {}",
        scenario.events.len(),
        cli.scenario.display()
    );

    let replay = Replay::new(scenario.config.clone());
    let emitted = replay.run(&scenario, cli.until)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for entry in &emitted {
        if cli.pretty {
            writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?;
        } else {
            writeln!(out, "{}", serde_json::to_string(entry)?)?;
        }
    }
    out.flush()?;
    log::info!("{} commands emitted", emitted.len());
    Ok(())
}
