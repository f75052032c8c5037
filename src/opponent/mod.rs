//! Participants: anything that can pick a move and learn from a finished round.

pub mod chain;
pub mod random;
pub mod scripted;

use rand::Rng;

use crate::config::{ChainConfig, OpponentKind};
use crate::moves::Move;
use crate::round::RoundResult;
use crate::stats::Statistics;

pub use chain::{ChainOpponent, FrequencyTable};
pub use random::RandomOpponent;
pub use scripted::ScriptedPlayer;

pub trait Participant {
    /// Choose the move for the coming round.
    fn next_move(&mut self) -> Move;

    /// Feed back a finished round, with this participant as the actor.
    fn record(&mut self, result: RoundResult);

    fn stats(&self) -> &Statistics;
}

impl<P: Participant + ?Sized> Participant for Box<P> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }

    fn record(&mut self, result: RoundResult) {
        (**self).record(result)
    }

    fn stats(&self) -> &Statistics {
        (**self).stats()
    }
}

pub fn build_opponent<R>(kind: OpponentKind, chain: ChainConfig, rng: R) -> Box<dyn Participant + Send>
where
    R: Rng + Send + 'static,
{
    match kind {
        OpponentKind::Random => Box::new(RandomOpponent::new(rng)),
        OpponentKind::Chain => Box::new(ChainOpponent::new(chain, rng)),
    }
}

/// Play one round between two automated participants and record it on both
/// sides. Both moves are chosen before either side learns the result.
pub fn play_round(player: &mut dyn Participant, opponent: &mut dyn Participant) -> RoundResult {
    let player_move = player.next_move();
    let opponent_move = opponent.next_move();
    let result = RoundResult::new(player_move, opponent_move);
    player.record(result);
    opponent.record(result.swapped());
    result
}
