use clap::Parser;
use std::path::PathBuf;

use crate::predictor::Level;

#[derive(Parser, Debug)]
#[command(name = "smart-games", about = "Rock Paper Scissors and Coin Toss against a computer that learns")]
pub struct Args {
    /// Statistics file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub stats_file: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Rounds per match, must be odd
    #[arg(long, default_value_t = 3)]
    pub best_of: u32,

    /// Computer level: 0 random, 1 frequency, 2 markov
    #[arg(long, default_value = "1")]
    pub level: Level,

    /// Seconds to pick a move before the round is forfeited, 0 for no limit
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub round_seconds: u64,

    /// Seed the computer for reproducible play
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print statistics and exit
    #[arg(long)]
    pub summary: bool,
}
