//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use number_guess::GameConfig;

/// Guess the number, or let the computer guess yours.
#[derive(Parser, Debug)]
#[command(name = "number-guess")]
#[command(about = "Console number-guessing game with persisted best scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for record files (overrides the config file)
    #[arg(long)]
    pub records_dir: Option<PathBuf>,

    /// Seed for hidden numbers and coin flips
    #[arg(long)]
    pub seed: Option<u64>,

    /// Attempt cap per round
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Keep records in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(dir) = &self.records_dir {
            config = config.with_records_dir(dir);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max) = self.max_attempts {
            config = config.with_max_attempts(max);
        }
        config
    }
}
