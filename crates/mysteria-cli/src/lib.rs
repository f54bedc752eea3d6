//! Codex Mysteria initiative calculator
//!
//! Terminal counterpart of the combat-rules calculator: reads an initiative
//! value the way the rules page does and reports the turns it grants, the
//! threshold for a turn count, or the threshold table.
//!
//! # Example
//!
//! ```
//! use mysteria_cli::{run, Command};
//! use mysteria_initiative::ThresholdSchedule;
//!
//! let command = Command::Threshold { turns: 10.0 };
//! let out = run(&command, &ThresholdSchedule::STANDARD, false).unwrap();
//! assert_eq!(out, "305");
//! ```

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{run, Cli, Command};
pub use config::load_schedule;
pub use error::{CliError, Result};
