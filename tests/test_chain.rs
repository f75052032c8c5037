//! Tests for the Markov-chain opponent.

use rand::rngs::StdRng;
use rand::SeedableRng;

use roshambo::config::ChainConfig;
use roshambo::moves::Move::{self, Paper, Rock, Scissors};
use roshambo::opponent::{ChainOpponent, FrequencyTable, Participant};
use roshambo::round::RoundResult;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn chain(segment_length: usize, history_length: usize, seed: u64) -> ChainOpponent<StdRng> {
    ChainOpponent::new(
        ChainConfig::new(segment_length, history_length).unwrap(),
        StdRng::seed_from_u64(seed),
    )
}

/// Record the other party's moves; the predictor always played rock.
fn feed(opponent: &mut ChainOpponent<StdRng>, moves: &[Move]) {
    for &m in moves {
        opponent.record(RoundResult::new(Rock, m));
    }
}

fn tally(opponent: &mut ChainOpponent<StdRng>, draws: usize) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for _ in 0..draws {
        counts[opponent.next_move().index()] += 1;
    }
    counts
}

fn assert_uniform(counts: [usize; 3], draws: usize) {
    let expected = draws as f64 / 3.0;
    for (index, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(
            deviation < 0.01,
            "move {} chosen {} times, expected ~{:.0} ({:.2}% off)",
            index,
            count,
            expected,
            deviation * 100.0
        );
    }
}

// ---------------------------------------------------------------------------
// Uniform fallback
// ---------------------------------------------------------------------------

#[test]
fn no_history_is_uniform() {
    let mut opponent = chain(1, 10, 11);
    assert_uniform(tally(&mut opponent, 300_000), 300_000);
}

#[test]
fn segment_longer_than_history_is_uniform() {
    let mut opponent = chain(4, 3, 12);
    feed(&mut opponent, &[Rock; 20]);
    assert!(opponent.frequencies().is_empty());
    assert_uniform(tally(&mut opponent, 300_000), 300_000);
}

#[test]
fn single_move_gives_no_prediction() {
    let mut opponent = chain(1, 10, 13);
    feed(&mut opponent, &[Rock]);
    assert!(opponent.frequencies().is_empty());
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

#[test]
fn repeated_rock_is_countered_with_paper() {
    let mut opponent = chain(1, 10, 14);
    for round in 0..30 {
        let chosen = opponent.next_move();
        if round >= 2 {
            assert_eq!(chosen, Paper, "round {}", round);
        }
        opponent.record(RoundResult::new(chosen, Rock));
    }
    let table = opponent.frequencies();
    assert_eq!(table.count(Rock), table.total());
    assert_eq!(table.total(), 9);
}

#[test]
fn longer_segment_follows_the_pattern() {
    // rock, rock, paper repeating: after [rock, rock] comes paper.
    let mut opponent = chain(2, 12, 15);
    feed(&mut opponent, &[Rock, Rock, Paper, Rock, Rock, Paper, Rock, Rock]);
    let table = opponent.frequencies();
    assert_eq!(table.count(Paper), 2);
    assert_eq!(table.total(), 2);
    for _ in 0..100 {
        assert_eq!(opponent.next_move(), Scissors);
    }
}

#[test]
fn ties_are_drawn_proportionally() {
    // After rock came paper once and scissors once.
    let mut opponent = chain(1, 10, 16);
    feed(&mut opponent, &[Rock, Paper, Rock, Scissors, Rock]);
    let counts = tally(&mut opponent, 20_000);
    // Countering paper is scissors, countering scissors is rock.
    assert_eq!(counts[Paper.index()], 0);
    for m in [Rock, Scissors] {
        let count = counts[m.index()] as i64;
        assert!((count - 10_000).abs() < 500, "{} chosen {} times", m, count);
    }
}

#[test]
fn unequal_counts_are_drawn_proportionally() {
    // After rock came paper three times and scissors once.
    let window = [Rock, Paper, Rock, Paper, Rock, Paper, Rock, Scissors, Rock];
    let table = FrequencyTable::build(&window, 1);
    assert_eq!(table.count(Paper), 3);
    assert_eq!(table.count(Scissors), 1);

    let mut rng = StdRng::seed_from_u64(20);
    let mut counts = [0usize; 3];
    for _ in 0..40_000 {
        counts[table.sample(&mut rng).unwrap().index()] += 1;
    }
    assert_eq!(counts[Rock.index()], 0);
    assert!((counts[Paper.index()] as i64 - 30_000).abs() < 600, "paper drawn {} times", counts[Paper.index()]);
    assert!((counts[Scissors.index()] as i64 - 10_000).abs() < 600, "scissors drawn {} times", counts[Scissors.index()]);

    // The opponent answers paper with scissors and scissors with rock.
    let mut opponent = chain(1, 10, 21);
    feed(&mut opponent, &window);
    let answers = tally(&mut opponent, 40_000);
    assert_eq!(answers[Paper.index()], 0);
    assert!((answers[Scissors.index()] as i64 - 30_000).abs() < 600, "scissors played {} times", answers[Scissors.index()]);
    assert!((answers[Rock.index()] as i64 - 10_000).abs() < 600, "rock played {} times", answers[Rock.index()]);
}

#[test]
fn learns_from_the_other_party_not_itself() {
    // The predictor keeps playing scissors, the other side keeps playing rock.
    // Countering its own moves would give rock; countering the other side
    // gives paper.
    let mut opponent = chain(1, 10, 17);
    for _ in 0..5 {
        opponent.record(RoundResult::new(Scissors, Rock));
    }
    for _ in 0..100 {
        assert_eq!(opponent.next_move(), Paper);
    }
}

// ---------------------------------------------------------------------------
// Window bounding
// ---------------------------------------------------------------------------

#[test]
fn window_keeps_only_recent_moves() {
    let mut opponent = chain(1, 3, 18);
    // Rock was followed by rock and paper early on, but only the last three
    // moves (paper, scissors, rock) are visible, where rock has no successor.
    feed(&mut opponent, &[Rock, Rock, Paper, Scissors, Rock]);
    assert_eq!(opponent.window(), vec![Paper, Scissors, Rock]);
    assert!(opponent.frequencies().is_empty());
    assert_eq!(opponent.stats().count(), 5);

    // Through the whole history rock would be answered with paper or
    // scissors only; the bounded window falls back to random, rock included.
    let counts = tally(&mut opponent, 300);
    assert!(counts[Rock.index()] > 0);
}

#[test]
fn old_pattern_is_forgotten() {
    let mut opponent = chain(1, 4, 19);
    feed(&mut opponent, &[Rock; 6]);
    assert_eq!(opponent.next_move(), Paper);

    // Switching to scissors pushes rock out of the window.
    feed(&mut opponent, &[Scissors; 4]);
    assert_eq!(opponent.window(), vec![Scissors; 4]);
    assert_eq!(opponent.frequencies().count(Scissors), 3);
    for _ in 0..50 {
        assert_eq!(opponent.next_move(), Rock);
    }
}
