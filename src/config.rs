//! Validated runtime settings built from the command line.

use anyhow::{Context, Result};
use std::{path::PathBuf, time::Duration};

use crate::{
    args::Args,
    predictor::Level,
    stats::default_stats_path,
    tracker::BestOf,
};

#[derive(Debug, Clone)]
pub struct Settings {
    pub stats_path: PathBuf,
    pub log_dir: PathBuf,
    pub best_of: BestOf,
    pub level: Level,
    pub seed: Option<u64>,
    /// Time allowed per round. `None` disables the round timer.
    pub round_limit: Option<Duration>,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self> {
        let stats_path = match &args.stats_file {
            Some(path) => path.clone(),
            None => default_stats_path(),
        };
        let best_of = BestOf::new(args.best_of).context("invalid --best-of")?;
        let round_limit = (args.round_seconds > 0).then(|| Duration::from_secs(args.round_seconds));

        Ok(Self {
            stats_path,
            log_dir: args.log_dir.clone(),
            best_of,
            level: args.level,
            seed: args.seed,
            round_limit,
        })
    }
}
