use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoshamboError {
    #[error("Invalid move: {0} (expected 1, 2, 3, rock, paper or scissors)")]
    InvalidMove(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type RoshamboResult<T> = Result<T, RoshamboError>;
