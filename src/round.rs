//! One round's result and how it is judged.

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Result of a round seen from the actor's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// Judge `actor` against `opponent`.
pub fn judge(actor: Move, opponent: Move) -> Outcome {
    if actor.beats(opponent) {
        Outcome::Win
    } else if actor.loses_to(opponent) {
        Outcome::Loss
    } else {
        Outcome::Draw
    }
}

/// Both moves of one round. The actor is whoever owns the statistics log the
/// result is recorded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub actor_move: Move,
    pub opponent_move: Move,
}

impl RoundResult {
    pub fn new(actor_move: Move, opponent_move: Move) -> Self {
        RoundResult {
            actor_move,
            opponent_move,
        }
    }

    /// The same round from the opponent's side.
    pub fn swapped(&self) -> RoundResult {
        RoundResult::new(self.opponent_move, self.actor_move)
    }

    pub fn outcome(&self) -> Outcome {
        judge(self.actor_move, self.opponent_move)
    }

    pub fn actor_wins(&self) -> bool {
        self.actor_move.beats(self.opponent_move)
    }

    pub fn opponent_wins(&self) -> bool {
        self.actor_move.loses_to(self.opponent_move)
    }

    pub fn is_draw(&self) -> bool {
        self.actor_move == self.opponent_move
    }
}
