//! Stinger CLI - renders the game-outcome sound effects.
//!
//! Running `stinger` with no arguments creates the output directory if needed
//! and writes every built-in clip into it.

mod commands;

use clap::Parser;
use stinger_config::RenderConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stinger")]
#[command(author, version, about = "Render the win/lose stingers as WAV files", long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    commands::generate::run(RenderConfig::default())
}
