//! Validated settings for sessions, simulations, and the chain predictor.

use clap::ValueEnum;
use log::{info, warn};
use serde::Serialize;

use crate::error::{RoshamboError, RoshamboResult};

pub const DEFAULT_SEGMENT_LENGTH: usize = 1;
pub const DEFAULT_HISTORY_LENGTH: usize = 10;

/// Which opponent the player faces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    Random,
    #[default]
    Chain,
}

/// Scripted player used by `simulate` in place of a human.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStrategy {
    #[default]
    ConstantRock,
    ConstantPaper,
    ConstantScissors,
    /// rock, paper, scissors, rock, ...
    Cycle,
    Random,
}

/// Predictor parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainConfig {
    /// Length of the recent-move segment used as the lookup key.
    pub segment_length: usize,
    /// Number of most recent opponent moves the predictor learns from.
    pub history_length: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            segment_length: DEFAULT_SEGMENT_LENGTH,
            history_length: DEFAULT_HISTORY_LENGTH,
        }
    }
}

impl ChainConfig {
    pub fn new(segment_length: usize, history_length: usize) -> RoshamboResult<Self> {
        let config = ChainConfig {
            segment_length,
            history_length,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RoshamboResult<()> {
        if self.segment_length == 0 {
            return Err(RoshamboError::InvalidConfig(
                "segment length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// True when no segment can ever be formed, so every move is random.
    pub fn always_random(&self) -> bool {
        self.segment_length > self.history_length
    }

    /// Returns whether a warning was logged.
    pub fn warn_if_always_random(&self) -> bool {
        if !self.always_random() {
            return false;
        }
        warn!(
            "segment length {} exceeds history length {}; the chain opponent will only play random moves",
            self.segment_length, self.history_length
        );
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub opponent: OpponentKind,
    pub chain: ChainConfig,
    /// Stop after this many rounds; unlimited when `None`.
    pub rounds: Option<usize>,
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn validate(&self) -> RoshamboResult<()> {
        self.chain.validate()
    }

    pub fn log(&self) {
        info!("[Session]");
        info!("| OPPONENT: {:?}", self.opponent);
        info!("| SEGMENT_LENGTH: {}", self.chain.segment_length);
        info!("| HISTORY_LENGTH: {}", self.chain.history_length);
        info!("| ROUNDS: {:?}", self.rounds);
        info!("| SEED: {:?}", self.seed);
        self.chain.warn_if_always_random();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    pub player: PlayerStrategy,
    pub opponent: OpponentKind,
    pub chain: ChainConfig,
    /// Rounds per session.
    pub rounds: usize,
    pub sessions: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            player: PlayerStrategy::default(),
            opponent: OpponentKind::default(),
            chain: ChainConfig::default(),
            rounds: 100,
            sessions: 1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> RoshamboResult<()> {
        self.chain.validate()?;
        if self.sessions == 0 {
            return Err(RoshamboError::InvalidConfig(
                "at least one session is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn log(&self) {
        info!("[Simulation]");
        info!("| PLAYER: {:?}", self.player);
        info!("| OPPONENT: {:?}", self.opponent);
        info!("| SEGMENT_LENGTH: {}", self.chain.segment_length);
        info!("| HISTORY_LENGTH: {}", self.chain.history_length);
        info!("| ROUNDS: {}", self.rounds);
        info!("| SESSIONS: {}", self.sessions);
        info!("| SEED: {:?}", self.seed);
        self.chain.warn_if_always_random();
    }
}
