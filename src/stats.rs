//! Persistent win/loss statistics stored as a JSON file.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    session::GameKind,
    tracker::{MatchState, Side},
};

pub const STATS_FILE: &str = "game_stats.json";

/// Get the default stats file path inside the platform data directory.
pub fn default_stats_path() -> PathBuf {
    stats_path_in(dirs::data_dir())
}

/// Falls back to the working directory when the platform has no data directory.
fn stats_path_in(data_dir: Option<PathBuf>) -> PathBuf {
    match data_dir {
        Some(mut path) => {
            path.push("smart-games");
            path.push(STATS_FILE);
            path
        }
        None => {
            warn!("No data directory for this platform, using ./{}", STATS_FILE);
            PathBuf::from(STATS_FILE)
        }
    }
}

/// Totals for one game kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tally {
    pub games: u64,
    pub player_wins: u64,
    pub computer_wins: u64,
    pub ties: u64,
    pub rounds: u64,
    pub last_played: Option<DateTime<Utc>>,
}

impl Tally {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.player_wins as f64 / self.games as f64 * 100.0
        }
    }

    fn add(&mut self, other: &Tally) {
        self.games += other.games;
        self.player_wins += other.player_wins;
        self.computer_wins += other.computer_wins;
        self.ties += other.ties;
        self.rounds += other.rounds;
        self.last_played = self.last_played.max(other.last_played);
    }
}

/// Everything that is persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    pub classic: Tally,
    pub extended: Tally,
    pub coin: Tally,
}

impl StatsRecord {
    pub fn tally(&self, kind: GameKind) -> &Tally {
        match kind {
            GameKind::Classic => &self.classic,
            GameKind::Extended => &self.extended,
            GameKind::Coin => &self.coin,
        }
    }

    pub fn tally_mut(&mut self, kind: GameKind) -> &mut Tally {
        match kind {
            GameKind::Classic => &mut self.classic,
            GameKind::Extended => &mut self.extended,
            GameKind::Coin => &mut self.coin,
        }
    }

    pub fn totals(&self) -> Tally {
        let mut total = Tally::default();
        for kind in GameKind::ALL {
            total.add(self.tally(kind));
        }
        total
    }

    /// Folds a finished match into the tally for `kind`.
    pub fn record_match(
        &mut self,
        kind: GameKind,
        state: &MatchState,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let Some(winner) = state.winner() else {
            anyhow::bail!("cannot record a {} match that is still in progress", kind);
        };

        let tally = self.tally_mut(kind);
        tally.games += 1;
        match winner {
            Side::Player => tally.player_wins += 1,
            Side::Computer => tally.computer_wins += 1,
        }
        tally.ties += u64::from(state.draws());
        tally.rounds += u64::from(state.round());
        tally.last_played = Some(at);
        Ok(())
    }

    pub fn summary(&self, kind: GameKind) -> String {
        let s = self.tally(kind);
        format!(
            "Games played: {}\nYour wins: {}\nComputer wins: {}\nTies: {}",
            s.games, s.player_wins, s.computer_wins, s.ties
        )
    }
}

/// Stats record bound to the file it is loaded from and saved to.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    record: StatsRecord,
}

impl StatsStore {
    /// Loads stats from `path`. A missing or corrupt file yields zeroed stats.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = match read_record(&path) {
            Ok(Some(record)) => {
                info!("Loaded stats from {}", path.display());
                record
            }
            Ok(None) => {
                info!("No stats file at {}, starting fresh", path.display());
                StatsRecord::default()
            }
            Err(e) => {
                warn!("Discarding unreadable stats file {}: {:#}", path.display(), e);
                StatsRecord::default()
            }
        };

        Self { path, record }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &StatsRecord {
        &self.record
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create stats directory {}", dir.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.record)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write stats file {}", self.path.display()))?;
        Ok(())
    }

    /// Records a finished match and writes the file.
    pub fn record_match(&mut self, kind: GameKind, state: &MatchState) -> Result<()> {
        self.record.record_match(kind, state, Utc::now())?;
        self.save()
    }
}

fn read_record(path: &Path) -> Result<Option<StatsRecord>> {
    if !path.exists() {
        return Ok(None);
    }

    let text = fs::read_to_string(path).context("Failed to read stats file")?;
    let record = serde_json::from_str(&text).context("Failed to parse stats file")?;
    Ok(Some(record))
}
