//! The three moves and their cyclic dominance relation.
//!
//! Rock beats scissors, scissors beats paper, paper beats rock. The relation
//! is not transitive, so `Move` has no `PartialOrd`; the game's comparison
//! operators are the named methods below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoshamboError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// All moves in index order.
pub const ALL_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

impl Move {
    /// Stable index: rock=0, paper=1, scissors=2.
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Move> {
        ALL_MOVES.get(index).copied()
    }

    /// The move this one wins against.
    pub fn dominates(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that wins against this one.
    pub fn dominated_by(self) -> Move {
        match self {
            Move::Scissors => Move::Rock,
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
        }
    }

    /// `self > other`
    pub fn beats(self, other: Move) -> bool {
        self.dominates() == other
    }

    /// `self < other`
    pub fn loses_to(self, other: Move) -> bool {
        other.beats(self)
    }

    /// `self >= other`
    pub fn beats_or_draws(self, other: Move) -> bool {
        self == other || self.beats(other)
    }

    /// `self <= other`
    pub fn loses_or_draws(self, other: Move) -> bool {
        self == other || self.loses_to(other)
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = RoshamboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "r" | "rock" => Ok(Move::Rock),
            "2" | "p" | "paper" => Ok(Move::Paper),
            "3" | "s" | "scissors" => Ok(Move::Scissors),
            _ => Err(RoshamboError::InvalidMove(s.trim().to_string())),
        }
    }
}
