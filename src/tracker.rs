use anyhow::Result;
use std::fmt;

use crate::rules::Outcome;

/// Number of decisive rounds in a match. Always odd and positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BestOf(u32);

impl BestOf {
    pub fn new(n: u32) -> Result<Self> {
        if n == 0 || n % 2 == 0 {
            anyhow::bail!("number of rounds must be odd and positive, got {}", n);
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Wins needed to take the match: strictly more than half.
    pub fn rounds_to_win(self) -> u32 {
        self.0 / 2 + 1
    }
}

impl Default for BestOf {
    fn default() -> Self {
        Self(3)
    }
}

impl fmt::Display for BestOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "best of {}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

/// Round and score counters for one best-of-N match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    best_of: BestOf,
    round: u32,
    player_wins: u32,
    computer_wins: u32,
    draws: u32,
}

impl MatchState {
    pub fn new(best_of: BestOf) -> Self {
        Self {
            best_of,
            round: 0,
            player_wins: 0,
            computer_wins: 0,
            draws: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.best_of);
    }

    /// Counts a finished round. Draws use up a round but never move the score.
    pub fn record(&mut self, outcome: Outcome) -> Result<()> {
        if self.is_complete() {
            anyhow::bail!("match is already decided");
        }

        self.round += 1;
        match outcome {
            Outcome::Win => self.player_wins += 1,
            Outcome::Loss => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        let needed = self.best_of.rounds_to_win();
        if self.player_wins >= needed {
            Some(Side::Player)
        } else if self.computer_wins >= needed {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn best_of(&self) -> BestOf {
        self.best_of
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }
}
