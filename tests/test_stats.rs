//! Tests for the statistics aggregator.

use approx::assert_abs_diff_eq;

use roshambo::moves::{Move, ALL_MOVES};
use roshambo::round::{Outcome, RoundResult};
use roshambo::stats::Statistics;

fn stats_with(wins: usize, losses: usize, draws: usize) -> Statistics {
    let mut stats = Statistics::new();
    for _ in 0..wins {
        stats.add(RoundResult::new(Move::Paper, Move::Rock));
    }
    for _ in 0..losses {
        stats.add(RoundResult::new(Move::Paper, Move::Scissors));
    }
    for _ in 0..draws {
        stats.add(RoundResult::new(Move::Paper, Move::Paper));
    }
    stats
}

#[test]
fn empty_statistics() {
    let stats = Statistics::new();
    assert_eq!(stats.count(), 0);
    assert_eq!(stats.wins(), 0);
    assert_eq!(stats.losses(), 0);
    assert_eq!(stats.draws(), 0);
    assert_eq!(stats.win_rate(), 0.0);
    assert_eq!(stats.loss_rate(), 0.0);
    assert_eq!(stats.draw_rate(), 0.0);
}

#[test]
fn counts_follow_the_log() {
    let stats = stats_with(3, 2, 1);
    assert_eq!(stats.count(), 6);
    assert_eq!(stats.wins(), 3);
    assert_eq!(stats.losses(), 2);
    assert_eq!(stats.draws(), 1);
    assert_eq!(stats.results().len(), 6);
}

#[test]
fn rate_is_count_over_total() {
    for (w, l, d) in [(1, 0, 0), (0, 4, 1), (2, 2, 2), (7, 1, 3), (0, 0, 5)] {
        let stats = stats_with(w, l, d);
        let total = (w + l + d) as f64;
        assert_abs_diff_eq!(stats.rate(Outcome::Win), w as f64 / total, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.rate(Outcome::Loss), l as f64 / total, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.rate(Outcome::Draw), d as f64 / total, epsilon = 1e-12);
    }
}

#[test]
fn rates_sum_to_one() {
    let mut stats = Statistics::new();
    for a in ALL_MOVES {
        for b in ALL_MOVES {
            stats.add(RoundResult::new(a, b));
            let sum = stats.win_rate() + stats.loss_rate() + stats.draw_rate();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
        }
    }
    // Every pair once: three of each outcome.
    assert_eq!(stats.wins(), 3);
    assert_eq!(stats.losses(), 3);
    assert_eq!(stats.draws(), 3);
}

#[test]
fn summary_serializes() {
    let summary = stats_with(1, 1, 2).summary();
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["games"], 4);
    assert_eq!(json["draws"], 2);
    assert_eq!(json["draw_rate"], 0.5);
}
