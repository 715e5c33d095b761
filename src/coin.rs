//! Coin toss: call the side, win if the toss matches.

use rand::Rng;
use std::{convert::TryFrom, fmt};

use crate::rules::Outcome;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn code(self) -> char {
        match self {
            CoinSide::Heads => 'h',
            CoinSide::Tails => 't',
        }
    }
}

impl fmt::Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoinSide::Heads => "Heads",
            CoinSide::Tails => "Tails",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<char> for CoinSide {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'h' => Ok(CoinSide::Heads),
            't' => Ok(CoinSide::Tails),
            _ => Err(value),
        }
    }
}

pub fn toss<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.gen_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

/// A coin round never draws: a matching call wins, anything else loses.
pub fn resolve_call(call: CoinSide, tossed: CoinSide) -> Outcome {
    if call == tossed {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
