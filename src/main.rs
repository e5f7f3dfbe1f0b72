//! number-guess - console entry point.

mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use number_guess::{FileRecordStore, GameConfig, GameRng, GameSession, MemoryRecordStore};

use cli::{Cli, StdConsole};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = cli.apply(config);
    info!(?config, ephemeral = cli.ephemeral, "Starting session");

    let rng = GameRng::from_seed_or_entropy(config.seed);
    let console = StdConsole::new(io::stdin().lock(), io::stdout(), config.feedback_tokens.clone());

    let summary = if cli.ephemeral {
        GameSession::new(config, console, rng, MemoryRecordStore::new()).run()
    } else {
        let store = FileRecordStore::new(&config.records_dir);
        GameSession::new(config, console, rng, store).run()
    };

    info!(?summary, "Session ended");
    Ok(())
}
