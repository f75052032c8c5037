//! Append-only log of round results for one participant.
//!
//! Counts and rates are always recomputed from the log, so they can never
//! drift from its contents.

use serde::Serialize;

use crate::round::{Outcome, RoundResult};

/// Every round one participant has played, in order.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Results from this participant's side, oldest first. Only ever appended to.
    results: Vec<RoundResult>,
}

/// Snapshot of the derived metrics, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub win_rate: f64,
    pub loss_rate: f64,
    pub draw_rate: f64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub fn add(&mut self, result: RoundResult) {
        self.results.push(result);
    }

    /// Append every result of `other`, keeping its order.
    pub fn merge(&mut self, other: &Statistics) {
        self.results.extend_from_slice(&other.results);
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    /// The last `n` results, oldest first.
    pub fn recent(&self, n: usize) -> &[RoundResult] {
        let start = self.results.len().saturating_sub(n);
        &self.results[start..]
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn count_of(&self, outcome: Outcome) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome() == outcome)
            .count()
    }

    pub fn wins(&self) -> usize {
        self.count_of(Outcome::Win)
    }

    pub fn losses(&self) -> usize {
        self.count_of(Outcome::Loss)
    }

    pub fn draws(&self) -> usize {
        self.count_of(Outcome::Draw)
    }

    /// Fraction of rounds with `outcome`; 0.0 for an empty log.
    pub fn rate(&self, outcome: Outcome) -> f64 {
        match self.count() {
            0 => 0.0,
            total => self.count_of(outcome) as f64 / total as f64,
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(Outcome::Win)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(Outcome::Loss)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(Outcome::Draw)
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            games: self.count(),
            wins: self.wins(),
            losses: self.losses(),
            draws: self.draws(),
            win_rate: self.win_rate(),
            loss_rate: self.loss_rate(),
            draw_rate: self.draw_rate(),
        }
    }
}
