//! Batch play: a scripted player against an opponent, many rounds per
//! session, sessions in parallel.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::error::RoshamboResult;
use crate::opponent::{build_opponent, play_round, Participant, ScriptedPlayer};
use crate::stats::{Statistics, StatsSummary};

/// What `simulate --json` prints.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub summary: StatsSummary,
}

impl SimulationReport {
    pub fn new(config: &SimulationConfig, stats: &Statistics) -> Self {
        SimulationReport {
            config: *config,
            summary: stats.summary(),
        }
    }
}

/// Run every session and return the player's statistics, merged in session
/// order. A fixed seed gives identical results on every run.
pub fn simulate(config: &SimulationConfig) -> RoshamboResult<Statistics> {
    config.validate()?;
    let base_seed = config.seed.unwrap_or_else(rand::random);
    info!("simulating {} sessions with base seed {}", config.sessions, base_seed);

    let sessions: Vec<Statistics> = (0..config.sessions)
        .into_par_iter()
        .map(|index| run_session(config, base_seed.wrapping_add(index as u64)))
        .collect();

    let mut total = Statistics::new();
    for session in &sessions {
        total.merge(session);
    }
    Ok(total)
}

/// One session with fresh participants.
pub fn run_session(config: &SimulationConfig, seed: u64) -> Statistics {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut player = ScriptedPlayer::new(config.player, StdRng::seed_from_u64(rng.gen()));
    let mut opponent = build_opponent(
        config.opponent,
        config.chain,
        StdRng::seed_from_u64(rng.gen()),
    );

    for _ in 0..config.rounds {
        play_round(&mut player, opponent.as_mut());
    }

    let stats = player.stats();
    debug!(
        "session seed {}: {} wins, {} losses, {} draws",
        seed,
        stats.wins(),
        stats.losses(),
        stats.draws()
    );
    stats.clone()
}
