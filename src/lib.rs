pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod interrupt;
pub mod log_init;
pub mod moves;
pub mod opponent;
pub mod round;
pub mod session;
pub mod simulate;
pub mod stats;
