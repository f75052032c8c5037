//! Interactive game: one human against one opponent, round by round.
//!
//! The final statistics report is written on every way out of the loop:
//! quitting, end of input, reaching the round limit, or an I/O error.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::display;
use crate::error::RoshamboResult;
use crate::interrupt::SharedStats;
use crate::moves::Move;
use crate::opponent::Participant;
use crate::round::RoundResult;
use crate::stats::Statistics;

/// What the player typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Play(Move),
    Quit,
}

pub fn parse_choice(line: &str) -> RoshamboResult<Choice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Ok(Choice::Quit),
        other => other.parse().map(Choice::Play),
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    RoundLimit,
}

/// One player's game against `opponent`.
pub struct Session<P> {
    /// The AI side; it records every round from its own point of view.
    opponent: P,
    /// The player's statistics, one entry per round.
    stats: Statistics,
    /// Stop after this many rounds; unlimited when `None`.
    round_limit: Option<usize>,
    /// Copy of `stats` read by the interrupt handler.
    shared: Option<SharedStats>,
}

impl<P: Participant> Session<P> {
    pub fn new(opponent: P, round_limit: Option<usize>) -> Self {
        Session {
            opponent,
            stats: Statistics::new(),
            round_limit,
            shared: None,
        }
    }

    /// Mirror every round into `shared` so an interrupt can still report.
    pub fn with_shared_stats(mut self, shared: SharedStats) -> Self {
        for &result in self.stats.results() {
            shared.add(result);
        }
        self.shared = Some(shared);
        self
    }

    /// The player's statistics.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn opponent(&self) -> &P {
        &self.opponent
    }

    /// Play one round with the player's move already known. The opponent
    /// picks its move without seeing it.
    pub fn play_round(&mut self, player_move: Move) -> RoundResult {
        let opponent_move = self.opponent.next_move();
        let result = RoundResult::new(player_move, opponent_move);
        self.stats.add(result);
        if let Some(shared) = &self.shared {
            shared.add(result);
        }
        self.opponent.record(result.swapped());
        result
    }

    /// Run the prompt loop, then write the statistics report regardless of
    /// how the loop ended. Ctrl-C is covered by `interrupt::install`.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> RoshamboResult<SessionEnd> {
        let ended = self.play_rounds(input, output);
        let report = write!(output, "{}", display::stats_report(&self.stats));

        let ended = ended?;
        report?;
        info!("session ended ({:?}) after {} rounds", ended, self.stats.count());
        Ok(ended)
    }

    fn play_rounds<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> RoshamboResult<SessionEnd> {
        write!(output, "{}", display::welcome())?;

        let mut line = String::new();
        loop {
            if self.round_limit.is_some_and(|limit| self.stats.count() >= limit) {
                return Ok(SessionEnd::RoundLimit);
            }

            writeln!(output, "{}", display::prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(SessionEnd::EndOfInput);
            }

            match parse_choice(&line) {
                Ok(Choice::Quit) => return Ok(SessionEnd::Quit),
                Ok(Choice::Play(player_move)) => {
                    let result = self.play_round(player_move);
                    writeln!(output, "{}", display::round_report(&result))?;
                }
                Err(err) => {
                    debug!("rejected input {:?}", line.trim());
                    writeln!(output, "{}", err)?;
                }
            }
        }
    }
}
