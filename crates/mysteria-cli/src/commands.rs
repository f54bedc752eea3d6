//! Command-line interface and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use mysteria_initiative::{coerce_turns, Rung, ThresholdSchedule, TurnVerdict};
use serde::Serialize;

use crate::config::SCHEDULE_ENV;
use crate::error::{CliError, Result};

/// Rows shown by `table` when no count is given.
pub const DEFAULT_TABLE_ROWS: i64 = 12;

/// Initiative calculator for the Codex Mysteria combat rules.
#[derive(Debug, Parser)]
#[command(name = "initiative", author, version, about, long_about = None)]
pub struct Cli {
    /// Threshold schedule file (JSON)
    #[arg(long, global = true, env = SCHEDULE_ENV)]
    pub schedule: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turns granted by an initiative value
    Turns {
        /// Initiative as typed, e.g. "120" or "304.5"
        #[arg(allow_hyphen_values = true)]
        initiative: String,
    },
    /// Minimum initiative for a number of turns
    Threshold {
        /// Turn count (fractions are floored, values below 1 read as 1)
        #[arg(allow_negative_numbers = true)]
        turns: f64,
    },
    /// Table of thresholds with per-turn increments
    Table {
        /// Number of rows
        #[arg(short, long, default_value_t = DEFAULT_TABLE_ROWS, allow_negative_numbers = true)]
        count: i64,
    },
}

#[derive(Debug, Serialize)]
struct TurnsReport {
    #[serde(flatten)]
    verdict: TurnVerdict,
    next_threshold: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ThresholdReport {
    turns: i64,
    threshold: u64,
}

/// Execute `command` against `schedule` and return the text to print.
pub fn run(command: &Command, schedule: &ThresholdSchedule, json: bool) -> Result<String> {
    match command {
        Command::Turns { initiative } => {
            let verdict = TurnVerdict::from_input(schedule, initiative)
                .ok_or_else(|| CliError::InvalidInitiative(initiative.clone()))?;
            tracing::debug!(
                initiative = verdict.initiative,
                turns = verdict.turns,
                "Evaluated initiative"
            );

            if json {
                let report = TurnsReport {
                    verdict,
                    next_threshold: verdict.next_threshold(schedule),
                };
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(verdict.to_string())
            }
        }
        Command::Threshold { turns } => {
            let turns = coerce_turns(*turns);
            let threshold = schedule.min_initiative_for_turns(turns);

            if json {
                Ok(serde_json::to_string_pretty(&ThresholdReport { turns, threshold })?)
            } else {
                Ok(threshold.to_string())
            }
        }
        Command::Table { count } => {
            let count = (*count).clamp(1, i64::from(schedule.max_turns())) as usize;
            let rungs: Vec<Rung> = schedule.ladder().take(count).collect();

            if json {
                Ok(serde_json::to_string_pretty(&rungs)?)
            } else {
                Ok(render_table(&rungs))
            }
        }
    }
}

fn render_table(rungs: &[Rung]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Züge").add_attribute(Attribute::Bold),
            Cell::new("Initiative").add_attribute(Attribute::Bold),
            Cell::new("Zuwachs").add_attribute(Attribute::Bold),
        ]);

    for rung in rungs {
        let increment = rung
            .increment
            .map_or_else(|| "-".to_string(), |inc| format!("+{}", inc));
        table.add_row(vec![
            Cell::new(rung.turns).set_alignment(CellAlignment::Right),
            Cell::new(rung.threshold).set_alignment(CellAlignment::Right),
            Cell::new(increment).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}
