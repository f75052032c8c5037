use rand::Rng;

use super::Participant;
use crate::moves::{Move, ALL_MOVES};
use crate::round::RoundResult;
use crate::stats::Statistics;

/// Uniformly random move.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())]
}

/// Opponent that ignores history entirely.
pub struct RandomOpponent<R> {
    stats: Statistics,
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        RandomOpponent {
            stats: Statistics::new(),
            rng,
        }
    }
}

impl<R: Rng> Participant for RandomOpponent<R> {
    fn next_move(&mut self) -> Move {
        random_move(&mut self.rng)
    }

    fn record(&mut self, result: RoundResult) {
        self.stats.add(result);
    }

    fn stats(&self) -> &Statistics {
        &self.stats
    }
}
