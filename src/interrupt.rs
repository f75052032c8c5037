//! Final report when the session is interrupted.
//!
//! A blocking read on stdin cannot be broken out of, so the Ctrl-C handler
//! prints the report itself and exits. It reads a copy of the player's
//! statistics that the session keeps up to date after every round.

use std::io::{self, Write};
use std::process;
use std::sync::Arc;

use log::info;
use parking_lot::Mutex;

use crate::display;
use crate::error::RoshamboResult;
use crate::round::RoundResult;
use crate::stats::Statistics;

/// Exit status after SIGINT, as shells report it.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Player statistics shared between the session and the interrupt handler.
#[derive(Debug, Clone, Default)]
pub struct SharedStats {
    inner: Arc<Mutex<Statistics>>,
}

impl SharedStats {
    pub fn new() -> Self {
        SharedStats::default()
    }

    pub fn add(&self, result: RoundResult) {
        self.inner.lock().add(result);
    }

    /// Copy of the statistics as they stand now.
    pub fn snapshot(&self) -> Statistics {
        self.inner.lock().clone()
    }
}

/// Write the report that ends an interrupted session. Starts on a fresh line
/// because the prompt is still waiting for input.
pub fn write_interrupt_report<W: Write>(output: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", display::stats_report(stats))?;
    output.flush()
}

/// Install the Ctrl-C / termination handler for an interactive session.
pub fn install(shared: SharedStats) -> RoshamboResult<()> {
    ctrlc::set_handler(move || {
        let stats = shared.snapshot();
        info!("interrupted after {} rounds", stats.count());
        let _ = write_interrupt_report(&mut io::stdout(), &stats);
        process::exit(INTERRUPTED_EXIT_CODE);
    })?;
    Ok(())
}
