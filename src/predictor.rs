//! Computer move selection from the player's move history.

use anyhow::Result;
use rand::{Rng, seq::SliceRandom};
use std::{collections::HashMap, fmt, str::FromStr};

use crate::rules::{Move, Variant};

/// How hard the computer tries to read the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Level {
    /// Uniform random pick.
    Random,
    /// Counter the player's most frequent move.
    #[default]
    Frequency,
    /// Counter the move that most often followed the player's last move.
    Markov,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Random, Level::Frequency, Level::Markov];

    pub fn number(self) -> u8 {
        match self {
            Level::Random => 0,
            Level::Frequency => 1,
            Level::Markov => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Random => "random",
            Level::Frequency => "frequency",
            Level::Markov => "markov",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Level {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "random" => Ok(Level::Random),
            "1" | "frequency" | "simple" => Ok(Level::Frequency),
            "2" | "markov" | "advanced" => Ok(Level::Markov),
            other => anyhow::bail!("unknown level {:?} (expected 0, 1 or 2)", other),
        }
    }
}

/// Player moves for the current session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Most frequent move; ties go to the earlier move in priority order.
    pub fn mode(&self) -> Option<Move> {
        let mut freq: HashMap<Move, usize> = HashMap::new();
        for mv in &self.moves {
            *freq.entry(*mv).or_insert(0) += 1;
        }
        most_frequent(&freq)
    }
}

impl From<Vec<Move>> for History {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

/// How often each move followed each previous move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionCounts {
    counts: HashMap<Move, HashMap<Move, usize>>,
}

impl TransitionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_history(history: &History) -> Self {
        let mut counts = Self::new();
        for pair in history.moves().windows(2) {
            counts.record(pair[0], pair[1]);
        }
        counts
    }

    pub fn record(&mut self, prev: Move, next: Move) {
        *self
            .counts
            .entry(prev)
            .or_default()
            .entry(next)
            .or_insert(0) += 1;
    }

    /// Most frequent successor of `prev`, if any was recorded.
    pub fn likely_next(&self, prev: Move) -> Option<Move> {
        self.counts.get(&prev).and_then(most_frequent)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

fn most_frequent(freq: &HashMap<Move, usize>) -> Option<Move> {
    // min_by_key keeps the first minimum, so Reverse(count) then move order breaks ties.
    freq.iter()
        .filter(|(_, count)| **count > 0)
        .min_by_key(|(mv, count)| (std::cmp::Reverse(**count), **mv))
        .map(|(mv, _)| *mv)
}

/// Picks the computer's move for the next round.
pub fn predict<R: Rng + ?Sized>(
    variant: Variant,
    history: &History,
    transitions: &TransitionCounts,
    level: Level,
    rng: &mut R,
) -> Move {
    match level {
        Level::Random => random_move(variant, rng),
        Level::Frequency => frequency_move(variant, history, rng),
        Level::Markov => match history
            .last()
            .and_then(|last| transitions.likely_next(last))
        {
            Some(expected) => counter_of(variant, expected, rng),
            None => frequency_move(variant, history, rng),
        },
    }
}

fn frequency_move<R: Rng + ?Sized>(variant: Variant, history: &History, rng: &mut R) -> Move {
    match history.mode() {
        Some(expected) => counter_of(variant, expected, rng),
        None => random_move(variant, rng),
    }
}

fn counter_of<R: Rng + ?Sized>(variant: Variant, expected: Move, rng: &mut R) -> Move {
    variant
        .counters(expected)
        .first()
        .copied()
        .unwrap_or_else(|| random_move(variant, rng))
}

fn random_move<R: Rng + ?Sized>(variant: Variant, rng: &mut R) -> Move {
    variant
        .moves()
        .choose(rng)
        .copied()
        .unwrap_or(Move::Rock)
}
