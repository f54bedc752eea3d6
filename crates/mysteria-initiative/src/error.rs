//! Error types for schedule construction.

use thiserror::Error;

/// Result type for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Reasons a custom threshold schedule is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Extrapolation needs the last two seed values.
    #[error("seed table needs at least 2 thresholds, got {0}")]
    SeedTooShort(usize),

    /// Seed thresholds must strictly increase.
    #[error("seed threshold for {turns} turns ({value}) does not exceed the previous one ({previous})")]
    NotIncreasing {
        turns: usize,
        previous: u64,
        value: u64,
    },

    /// The turn cap must cover the whole seed table.
    #[error("max turns {max_turns} is below the seed length {seed_len}")]
    MaxTurnsBelowSeed { max_turns: u32, seed_len: usize },

    /// The threshold at the turn cap does not fit in 64 bits.
    #[error("threshold for {0} turns overflows u64")]
    Overflow(u32),
}
