//! Markov-chain opponent.
//!
//! The predictor looks at the last `history_length` moves the other party
//! made and takes the final `segment_length` of them as the current context.
//! Every earlier place where that context occurred contributes the move that
//! followed it to a frequency table. A weighted draw from the table gives the
//! predicted next move, and the opponent plays whatever beats it. With no
//! matching context the move is uniformly random.

use std::fmt;

use itertools::Itertools;
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::random::random_move;
use super::Participant;
use crate::config::ChainConfig;
use crate::moves::{Move, ALL_MOVES};
use crate::round::RoundResult;
use crate::stats::Statistics;

/// Occurrence count per successor move, indexed by `Move::index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; 3],
}

impl FrequencyTable {
    /// Count what followed each occurrence of the trailing segment of `window`.
    /// An occurrence that ends at the end of `window` has no successor and
    /// adds nothing.
    pub fn build(window: &[Move], segment_length: usize) -> FrequencyTable {
        let mut table = FrequencyTable::default();
        if segment_length == 0 || window.len() < segment_length {
            return table;
        }

        let key = &window[window.len() - segment_length..];
        for run in window.windows(segment_length + 1) {
            if &run[..segment_length] == key {
                table.observe(run[segment_length]);
            }
        }
        table
    }

    pub fn observe(&mut self, m: Move) {
        self.counts[m.index()] += 1;
    }

    pub fn count(&self, m: Move) -> usize {
        self.counts[m.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Draw a move with probability proportional to its count.
    /// `None` when the table is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        if self.is_empty() {
            return None;
        }
        let dist = WeightedIndex::new(self.counts).ok()?;
        Move::from_index(dist.sample(rng))
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = ALL_MOVES
            .iter()
            .map(|&m| format!("{}={}", m, self.count(m)))
            .join(" ");
        write!(f, "{}", entries)
    }
}

/// Opponent that counters the move its chain predicts for the other party.
pub struct ChainOpponent<R> {
    /// Segment and window sizes.
    config: ChainConfig,
    /// Rounds from this opponent's side; the window is read from its tail.
    stats: Statistics,
    /// Source for the weighted draw and the random fallback.
    rng: R,
}

impl<R: Rng> ChainOpponent<R> {
    pub fn new(config: ChainConfig, rng: R) -> Self {
        ChainOpponent {
            config,
            stats: Statistics::new(),
            rng,
        }
    }

    /// The other party's most recent moves, oldest first.
    pub fn window(&self) -> Vec<Move> {
        self.stats
            .recent(self.config.history_length)
            .iter()
            .map(|r| r.opponent_move)
            .collect()
    }

    /// Frequency table for the current window, rebuilt on every call.
    pub fn frequencies(&self) -> FrequencyTable {
        FrequencyTable::build(&self.window(), self.config.segment_length)
    }
}

impl<R: Rng> Participant for ChainOpponent<R> {
    fn next_move(&mut self) -> Move {
        let window = self.window();
        let table = FrequencyTable::build(&window, self.config.segment_length);

        match table.sample(&mut self.rng) {
            Some(predicted) => {
                debug!(
                    "chain: window [{}] table {{{}}} predicted {} -> {}",
                    window.iter().join(", "),
                    table,
                    predicted,
                    predicted.dominated_by()
                );
                predicted.dominated_by()
            }
            None => {
                debug!("chain: window [{}] has no match, random move", window.iter().join(", "));
                random_move(&mut self.rng)
            }
        }
    }

    fn record(&mut self, result: RoundResult) {
        self.stats.add(result);
    }

    fn stats(&self) -> &Statistics {
        &self.stats
    }
}
