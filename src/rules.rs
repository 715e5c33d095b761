use anyhow::Result;
use std::{convert::TryFrom, fmt};

/// A hand shape. Declaration order is the fixed priority order used to break ties.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

pub const ALL_MOVES: [Move; 5] = [
    Move::Rock,
    Move::Paper,
    Move::Scissors,
    Move::Lizard,
    Move::Spock,
];

const CLASSIC_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// `BEATS[winner][loser]`, indexed by `Move::index`.
const BEATS: [[bool; 5]; 5] = [
    //  R      P      S      L      K
    [false, false, true, true, false], // Rock
    [true, false, false, false, true], // Paper
    [false, true, false, true, false], // Scissors
    [false, true, false, false, true], // Lizard
    [true, false, true, false, false], // Spock
];

impl Move {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> char {
        match self {
            Move::Rock => 'r',
            Move::Paper => 'p',
            Move::Scissors => 's',
            Move::Lizard => 'l',
            Move::Spock => 'k',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
        }
    }

    pub fn beats(self, other: Move) -> bool {
        BEATS[self.index()][other.index()]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<char> for Move {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'r' => Ok(Move::Rock),
            'p' => Ok(Move::Paper),
            's' => Ok(Move::Scissors),
            'l' => Ok(Move::Lizard),
            'k' => Ok(Move::Spock),
            _ => Err(value),
        }
    }
}

/// Result of a round from the player's point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Draw => "draw",
        };
        write!(f, "{}", s)
    }
}

/// Rock-Paper-Scissors rule set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    Classic,
    Extended,
}

impl Variant {
    /// Legal moves in priority order.
    pub fn moves(self) -> &'static [Move] {
        match self {
            Variant::Classic => &CLASSIC_MOVES,
            Variant::Extended => &ALL_MOVES,
        }
    }

    pub fn is_legal(self, mv: Move) -> bool {
        self.moves().contains(&mv)
    }

    /// Moves of this variant that beat `mv`, in priority order.
    pub fn counters(self, mv: Move) -> Vec<Move> {
        self.moves()
            .iter()
            .copied()
            .filter(|m| m.beats(mv))
            .collect()
    }

    /// Outcome for the player when `player` meets `computer`.
    pub fn resolve(self, player: Move, computer: Move) -> Outcome {
        if player == computer {
            Outcome::Draw
        } else if player.beats(computer) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

pub fn parse_move(variant: Variant, input: &str) -> Result<Move> {
    let mut chars = input.trim().chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        anyhow::bail!("expected a single move letter, got {:?}", input);
    };

    let mv = Move::try_from(c).map_err(|bad| anyhow::anyhow!("invalid move letter: {}", bad))?;
    if !variant.is_legal(mv) {
        anyhow::bail!("{} is not played in the {:?} variant", mv, variant);
    }
    Ok(mv)
}
