use rand::Rng;

use super::random::random_move;
use super::Participant;
use crate::config::PlayerStrategy;
use crate::moves::{Move, ALL_MOVES};
use crate::round::RoundResult;
use crate::stats::Statistics;

/// Stand-in for the human side when simulating.
pub struct ScriptedPlayer<R> {
    strategy: PlayerStrategy,
    stats: Statistics,
    rng: R,
}

impl<R: Rng> ScriptedPlayer<R> {
    pub fn new(strategy: PlayerStrategy, rng: R) -> Self {
        ScriptedPlayer {
            strategy,
            stats: Statistics::new(),
            rng,
        }
    }
}

impl<R: Rng> Participant for ScriptedPlayer<R> {
    fn next_move(&mut self) -> Move {
        match self.strategy {
            PlayerStrategy::ConstantRock => Move::Rock,
            PlayerStrategy::ConstantPaper => Move::Paper,
            PlayerStrategy::ConstantScissors => Move::Scissors,
            PlayerStrategy::Cycle => ALL_MOVES[self.stats.count() % ALL_MOVES.len()],
            PlayerStrategy::Random => random_move(&mut self.rng),
        }
    }

    fn record(&mut self, result: RoundResult) {
        self.stats.add(result);
    }

    fn stats(&self) -> &Statistics {
        &self.stats
    }
}
