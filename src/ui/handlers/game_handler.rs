//! Match lifecycle: start, play rounds, record finished matches.

use std::time::Instant;

use crate::{
    coin::CoinSide,
    rules::parse_move,
    session::{GameKind, RoundReport, Session},
    tracker::Side,
};

use super::super::{app::App, types::Screen};

/// Helper struct for managing game-specific state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_match(&mut self, kind: GameKind) {
        let session = Session::with_seed(kind, self.app.best_of, self.app.level, self.app.seed);
        let level_note = if kind == GameKind::Coin {
            String::new()
        } else {
            format!(", level {}", self.app.level)
        };
        self.app.log(format!(
            "Starting {} ({}{})",
            kind.title(),
            self.app.best_of,
            level_note
        ));

        self.app.session = Some(session);
        self.app.last_report = None;
        self.app.screen = Screen::Playing;
        self.arm_round_timer();
    }

    /// Starts another match with the same game and settings.
    pub fn rematch(&mut self) {
        if let Some(session) = self.app.session.as_mut() {
            session.restart();
            self.app.last_report = None;
            self.app.log("Rematch started");
            self.arm_round_timer();
        }
    }

    pub fn abandon_match(&mut self) {
        if let Some(session) = self.app.session.take() {
            if !session.is_over() && session.state().round() > 0 {
                self.app.log(format!(
                    "Abandoned {} after {} round(s)",
                    session.kind(),
                    session.state().round()
                ));
            }
        }
        self.app.last_report = None;
        self.app.round_deadline = None;
        self.app.screen = Screen::Menu;
    }

    /// Handles a move letter typed on the play screen.
    pub fn play_key(&mut self, c: char) {
        let Some(session) = self.app.session.as_mut() else {
            return;
        };

        let result = match session.kind().variant() {
            Some(variant) => parse_move(variant, &c.to_string())
                .and_then(|mv| session.play_move(mv)),
            None => match CoinSide::try_from(c) {
                Ok(side) => session.call_coin(side),
                Err(bad) => Err(anyhow::anyhow!("invalid coin side: {}", bad)),
            },
        };

        match result {
            Ok(report) => self.apply_report(report),
            Err(e) => self.app.log(format!("Input rejected: {}", e)),
        }
    }

    /// Forfeits the open round once `now` has reached the round deadline.
    pub fn check_deadline(&mut self, now: Instant) {
        if !self.app.round_deadline.is_some_and(|deadline| now >= deadline) {
            return;
        }
        let Some(session) = self.app.session.as_mut() else {
            self.app.round_deadline = None;
            return;
        };

        match session.forfeit_round() {
            Ok(report) => {
                self.app.log(format!("Time's up! Round {} goes to the computer", report.round));
                self.apply_report(report);
            }
            Err(e) => {
                tracing::warn!("Round timer fired without an open round: {:#}", e);
                self.app.round_deadline = None;
            }
        }
    }

    fn apply_report(&mut self, report: RoundReport) {
        self.app.log(report.to_string());
        let winner = report.match_winner;
        self.app.last_report = Some(report);
        match winner {
            Some(winner) => {
                self.app.round_deadline = None;
                self.finish_match(winner);
            }
            None => self.arm_round_timer(),
        }
    }

    fn arm_round_timer(&mut self) {
        self.app.round_deadline = self.app.round_limit.map(|limit| Instant::now() + limit);
    }

    fn finish_match(&mut self, winner: Side) {
        let Some(session) = self.app.session.as_ref() else {
            return;
        };

        let kind = session.kind();
        let result = self.app.stats.record_match(kind, session.state());

        self.app.log(match winner {
            Side::Player => "Congratulations! You are the champion!",
            Side::Computer => "Computer is the champion! Better luck next time.",
        });
        if let Err(e) = result {
            tracing::error!("Failed to save stats: {:#}", e);
            self.app.log(format!("Failed to save stats: {}", e));
        }
    }
}
