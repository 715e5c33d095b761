use std::{
    fmt::Display,
    io::Stdout,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    predictor::Level,
    session::{GameKind, RoundReport, Session},
    stats::StatsStore,
    tracker::BestOf,
};

use super::{
    handlers::{GameHandler, InputHandler},
    types::{LogBuffer, Screen},
};

/// Main application state container.
pub struct App {
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) menu_index: usize,
    pub(in crate::ui) pending_game: Option<GameKind>,
    pub(in crate::ui) best_of_input: String,
    pub(in crate::ui) best_of: BestOf,
    pub(in crate::ui) level: Level,
    pub(in crate::ui) seed: Option<u64>,
    pub(in crate::ui) round_limit: Option<Duration>,
    /// When the current round is forfeited. Only set while a round is open.
    pub(in crate::ui) round_deadline: Option<Instant>,
    pub(in crate::ui) session: Option<Session>,
    pub(in crate::ui) last_report: Option<RoundReport>,
    pub(in crate::ui) stats: StatsStore,
    pub(in crate::ui) stats_tab: GameKind,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(
        stats: StatsStore,
        best_of: BestOf,
        level: Level,
        seed: Option<u64>,
        round_limit: Option<Duration>,
        logs: LogBuffer,
    ) -> Self {
        Self {
            screen: Screen::Menu,
            menu_index: 0,
            pending_game: None,
            best_of_input: best_of.get().to_string(),
            best_of,
            level,
            seed,
            round_limit,
            round_deadline: None,
            session: None,
            last_report: None,
            stats,
            stats_tab: GameKind::Classic,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Some(deadline) = self.round_deadline
                && !event::poll(deadline.saturating_duration_since(Instant::now()))?
            {
                GameHandler::new(self).check_deadline(Instant::now());
                continue;
            }

            let event = event::read()?;
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
            {
                if InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
