//! Terminal output: colored round lines and the statistics table.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};

use crate::round::{Outcome, RoundResult};
use crate::stats::Statistics;

pub fn welcome() -> String {
    "Welcome to Roshambo, aka. Rock Paper Scissors.\n"
        .yellow()
        .to_string()
}

pub fn prompt() -> String {
    format!(
        "{} {}{} {}{} {}{} {}{}",
        "Please choose Rock".green(),
        "(1)".red(),
        ", Paper".green(),
        "(2)".red(),
        ", Scissors".green(),
        "(3)".red(),
        " or Quit".green(),
        "(q)".red(),
        ".".green(),
    )
}

/// Two-line description of a round, `result` seen from the player's side.
pub fn round_report(result: &RoundResult) -> String {
    let moves = format!(
        "Player chooses {}. AI chooses {}.",
        result.actor_move.to_string().yellow(),
        result.opponent_move.to_string().yellow(),
    );
    let verdict = match result.outcome() {
        Outcome::Draw => format!("Game is a {}.", "draw".yellow()),
        Outcome::Win => format!("{} Congratulations!", "Player wins.".yellow()),
        Outcome::Loss => format!("{}", "AI wins.".yellow()),
    };
    format!("{}\n{}\n", moves, verdict)
}

pub fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Table of the player's wins, the AI's wins and draws.
pub fn stats_table(stats: &Statistics) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Result", "Count", "Rate"]);

    let rows = [
        ("Player wins", Outcome::Win),
        ("AI wins", Outcome::Loss),
        ("Draws", Outcome::Draw),
    ];
    for (label, outcome) in rows {
        table.add_row(vec![
            label.to_string(),
            stats.count_of(outcome).to_string(),
            percent(stats.rate(outcome)),
        ]);
    }

    for index in [1, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn stats_report(stats: &Statistics) -> String {
    if stats.is_empty() {
        "No games were played.\n".to_string()
    } else {
        format!("{}\n", stats_table(stats))
    }
}
