//! Codex Mysteria Initiative
//!
//! Initiative threshold schedule for the combat rules: how much initiative a
//! combatant needs to act `x` times in one round, and the inverse.
//!
//! # Schedule
//!
//! The first nine thresholds are fixed table values:
//!
//! ```text
//! turns:      1   2   3   4    5    6    7    8    9
//! initiative: 1  35  55  80  105  135  170  210  255
//! ```
//!
//! Past the table, the step between thresholds starts from the last table
//! step (255 - 210 = 45) and grows by 5 per turn, so the sequence is a
//! quadratic in `x` from turn 9 onward:
//!
//! ```text
//! threshold(x) = threshold(9) + 45·k + 5·k(k+1)/2,   k = x - 9
//! ```
//!
//! # Domain
//!
//! Turn counts are capped at [`SAFETY_MAX_TURNS`] (2000). Requests beyond the
//! cap are clamped to it, so values past turn 2000 are best-effort and not
//! part of the schedule.
//!
//! # Example
//!
//! ```
//! use mysteria_initiative::{min_initiative_for_turns, thresholds_for, turns_from_initiative};
//!
//! assert_eq!(min_initiative_for_turns(10), 305);
//! assert_eq!(turns_from_initiative(304.0), 9);
//! assert_eq!(thresholds_for(3), vec![1, 35, 55]);
//! ```

mod error;
mod input;
mod ladder;
mod schedule;
mod verdict;

pub use error::{Result, ScheduleError};
pub use input::{coerce_turns, parse_initiative};
pub use ladder::{Rung, ThresholdLadder};
pub use schedule::{ScheduleConfig, ThresholdSchedule};
pub use verdict::{TurnVerdict, INVALID_INITIATIVE_MESSAGE};

/// Exact minimum initiative for 1 through 9 turns.
pub const SEED_THRESHOLDS: [u64; 9] = [1, 35, 55, 80, 105, 135, 170, 210, 255];

/// Amount the per-turn increment grows by past the seed table.
pub const INC_GROWTH: u64 = 5;

/// Upper bound on turn counts the schedule answers for.
pub const SAFETY_MAX_TURNS: u32 = 2000;

// The standard schedule must be valid without runtime checks
const _: () = assert!(SEED_THRESHOLDS.len() >= 2);
const _: () = assert!(SAFETY_MAX_TURNS as usize >= SEED_THRESHOLDS.len());

/// Minimum initiative needed for `turns` turns under the standard schedule.
///
/// Non-positive turn counts are treated as 1.
pub fn min_initiative_for_turns(turns: i64) -> u64 {
    ThresholdSchedule::STANDARD.min_initiative_for_turns(turns)
}

/// Number of turns `initiative` grants under the standard schedule.
///
/// NaN, infinite and negative initiative grant 0 turns.
pub fn turns_from_initiative(initiative: f64) -> u32 {
    ThresholdSchedule::STANDARD.turns_from_initiative(initiative)
}

/// Thresholds for 1 through `count` turns under the standard schedule.
pub fn thresholds_for(count: i64) -> Vec<u64> {
    ThresholdSchedule::STANDARD.thresholds_for(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_table_is_strictly_increasing() {
        for pair in SEED_THRESHOLDS.windows(2) {
            assert!(pair[0] < pair[1], "{:?} not increasing", pair);
        }
    }

    #[test]
    fn free_functions_use_standard_schedule() {
        assert_eq!(min_initiative_for_turns(9), 255);
        assert_eq!(turns_from_initiative(255.0), 9);
        assert_eq!(thresholds_for(9), SEED_THRESHOLDS.to_vec());
    }
}
