//! One match of a game: predictor, rules and tracker wired together.

use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};
use std::fmt;
use tracing::debug;

use crate::{
    coin::{self, CoinSide},
    predictor::{self, History, Level, TransitionCounts},
    rules::{Move, Outcome, Variant},
    tracker::{BestOf, MatchState, Side},
};

/// The games on offer. Also the key of each tally in the stats file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameKind {
    Classic,
    Extended,
    Coin,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Classic, GameKind::Extended, GameKind::Coin];

    pub fn variant(self) -> Option<Variant> {
        match self {
            GameKind::Classic => Some(Variant::Classic),
            GameKind::Extended => Some(Variant::Extended),
            GameKind::Coin => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            GameKind::Classic => "classic",
            GameKind::Extended => "extended",
            GameKind::Coin => "coin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GameKind::Classic => "Rock Paper Scissors",
            GameKind::Extended => "Rock Paper Scissors (Extended)",
            GameKind::Coin => "Coin Toss",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// What one side showed in a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Choice {
    Hand(Move),
    Coin(CoinSide),
    /// The player let the round timer run out.
    TimedOut,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Hand(mv) => write!(f, "{}", mv),
            Choice::Coin(side) => write!(f, "{}", side),
            Choice::TimedOut => write!(f, "no move"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
    /// Set on the round that decides the match.
    pub match_winner: Option<Side>,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round {}: you {}, computer {} ({})",
            self.round, self.player, self.computer, self.outcome
        )
    }
}

/// State of the match in progress plus the player's move history.
#[derive(Debug)]
pub struct Session {
    kind: GameKind,
    level: Level,
    state: MatchState,
    history: History,
    transitions: TransitionCounts,
    rounds: Vec<RoundReport>,
    rng: StdRng,
}

impl Session {
    pub fn new(kind: GameKind, best_of: BestOf, level: Level, rng: StdRng) -> Self {
        Self {
            kind,
            level,
            state: MatchState::new(best_of),
            history: History::new(),
            transitions: TransitionCounts::new(),
            rounds: Vec::new(),
            rng,
        }
    }

    pub fn with_seed(kind: GameKind, best_of: BestOf, level: Level, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(kind, best_of, level, rng)
    }

    /// Plays a Rock-Paper-Scissors round.
    pub fn play_move(&mut self, player: Move) -> Result<RoundReport> {
        let Some(variant) = self.kind.variant() else {
            anyhow::bail!("{} is not a hand game", self.kind);
        };
        if !variant.is_legal(player) {
            anyhow::bail!("{} is not a legal move in {}", player, self.kind);
        }
        self.ensure_open()?;

        // Predict from what was known before this round.
        let computer = predictor::predict(
            variant,
            &self.history,
            &self.transitions,
            self.level,
            &mut self.rng,
        );
        let outcome = variant.resolve(player, computer);

        self.state.record(outcome)?;
        if let Some(last) = self.history.last() {
            self.transitions.record(last, player);
        }
        self.history.push(player);

        Ok(self.finish_round(Choice::Hand(player), Choice::Hand(computer), outcome))
    }

    /// Plays a coin toss round.
    pub fn call_coin(&mut self, call: CoinSide) -> Result<RoundReport> {
        if self.kind != GameKind::Coin {
            anyhow::bail!("{} is not a coin game", self.kind);
        }
        self.ensure_open()?;

        let tossed = coin::toss(&mut self.rng);
        let outcome = coin::resolve_call(call, tossed);
        self.state.record(outcome)?;

        Ok(self.finish_round(Choice::Coin(call), Choice::Coin(tossed), outcome))
    }

    /// Gives the round to the computer because the player ran out of time.
    /// The player made no move, so history and transitions stay as they were.
    pub fn forfeit_round(&mut self) -> Result<RoundReport> {
        self.ensure_open()?;

        let computer = match self.kind.variant() {
            Some(variant) => Choice::Hand(predictor::predict(
                variant,
                &self.history,
                &self.transitions,
                self.level,
                &mut self.rng,
            )),
            None => Choice::Coin(coin::toss(&mut self.rng)),
        };
        self.state.record(Outcome::Loss)?;

        Ok(self.finish_round(Choice::TimedOut, computer, Outcome::Loss))
    }

    /// Starts a fresh match. History is per session, so it is cleared too.
    pub fn restart(&mut self) {
        self.state.reset();
        self.history.clear();
        self.transitions.clear();
        self.rounds.clear();
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state.is_complete() {
            anyhow::bail!("match is over, start a new one");
        }
        Ok(())
    }

    fn finish_round(&mut self, player: Choice, computer: Choice, outcome: Outcome) -> RoundReport {
        let report = RoundReport {
            round: self.state.round(),
            player,
            computer,
            outcome,
            match_winner: self.state.winner(),
        };
        debug!("{}", report);
        self.rounds.push(report.clone());
        report
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn transitions(&self) -> &TransitionCounts {
        &self.transitions
    }

    pub fn rounds(&self) -> &[RoundReport] {
        &self.rounds
    }

    pub fn is_over(&self) -> bool {
        self.state.is_complete()
    }
}
