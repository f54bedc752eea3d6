//! Threshold schedule: seed table plus quadratic extrapolation.
//!
//! A schedule maps a turn count `x` to the minimum initiative for `x` turns.
//! Turns `1..=n` read the seed table directly. Past the table the increment
//! starts at the last seed delta `d = seed[n-1] - seed[n-2]` and grows by `g`
//! per turn:
//!
//! ```text
//! increment(x) = increment(x-1) + g
//! threshold(x) = threshold(x-1) + increment(x)
//! ```
//!
//! Summed out, with `k = x - n`:
//!
//! ```text
//! threshold(x) = seed[n-1] + d·k + g·k(k+1)/2
//! ```
//!
//! so every lookup is O(1) and the inverse is a binary search over a strictly
//! increasing sequence.

use std::borrow::Cow;

use crate::error::{Result, ScheduleError};
use crate::ladder::ThresholdLadder;
use crate::{INC_GROWTH, SAFETY_MAX_TURNS, SEED_THRESHOLDS};

/// Validated threshold schedule.
///
/// Every threshold for `1..=max_turns` fits in a `u64` and the sequence is
/// strictly increasing over that range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ScheduleConfig", into = "ScheduleConfig")
)]
pub struct ThresholdSchedule {
    seed: Cow<'static, [u64]>,
    inc_growth: u64,
    max_turns: u32,
}

impl ThresholdSchedule {
    /// The Codex Mysteria combat schedule.
    pub const STANDARD: Self = Self {
        seed: Cow::Borrowed(&SEED_THRESHOLDS),
        inc_growth: INC_GROWTH,
        max_turns: SAFETY_MAX_TURNS,
    };

    /// Build a custom schedule.
    pub fn new(seed: Vec<u64>, inc_growth: u64, max_turns: u32) -> Result<Self> {
        if seed.len() < 2 {
            return Err(ScheduleError::SeedTooShort(seed.len()));
        }

        for (i, pair) in seed.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ScheduleError::NotIncreasing {
                    turns: i + 2,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }

        if (max_turns as usize) < seed.len() {
            return Err(ScheduleError::MaxTurnsBelowSeed {
                max_turns,
                seed_len: seed.len(),
            });
        }

        let schedule = Self {
            seed: Cow::Owned(seed),
            inc_growth,
            max_turns,
        };

        // The sequence is increasing, so the cap bounds every threshold.
        if schedule.checked_threshold(max_turns).is_none() {
            return Err(ScheduleError::Overflow(max_turns));
        }

        Ok(schedule)
    }

    /// Seed thresholds, index 0 holding the value for 1 turn.
    pub fn seed(&self) -> &[u64] {
        &self.seed
    }

    /// Growth of the per-turn increment past the seed table.
    pub const fn inc_growth(&self) -> u64 {
        self.inc_growth
    }

    /// Largest turn count the schedule answers for.
    pub const fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Number of seed entries.
    pub fn seed_len(&self) -> u32 {
        self.seed.len() as u32
    }

    /// Increment between the last two seed thresholds.
    ///
    /// Extrapolation resumes from this delta.
    pub fn last_seed_delta(&self) -> u64 {
        let n = self.seed.len();
        self.seed[n - 1] - self.seed[n - 2]
    }

    /// Minimum initiative for `turns` turns.
    ///
    /// Turn counts below 1 are treated as 1. Turn counts above
    /// [`max_turns`](Self::max_turns) are clamped to it, so the result there
    /// is the capped threshold rather than an extrapolated one.
    pub fn min_initiative_for_turns(&self, turns: i64) -> u64 {
        self.threshold(self.clamp_turns(turns))
    }

    /// Number of turns granted by `initiative`.
    ///
    /// Returns the largest `x` in `1..=max_turns` with
    /// `threshold(x) <= initiative`, or 0 below the first threshold.
    /// NaN, infinite and negative initiative yield 0.
    pub fn turns_from_initiative(&self, initiative: f64) -> u32 {
        if !initiative.is_finite() || initiative < 0.0 {
            return 0;
        }

        // Thresholds are integers; `as` saturates for huge values
        let initiative = initiative.floor() as u64;

        let seeded = self.seed.partition_point(|&t| t <= initiative);
        if seeded < self.seed.len() {
            return seeded as u32;
        }

        // threshold(low) <= initiative holds throughout
        let mut low = self.seed_len();
        let mut high = self.max_turns;
        while low < high {
            let mid = low + (high - low).div_ceil(2);
            if self.threshold(mid) <= initiative {
                low = mid;
            } else {
                high = mid - 1;
            }
        }
        low
    }

    /// Thresholds for 1 through `count` turns.
    ///
    /// `count` is clamped to `1..=max_turns`.
    pub fn thresholds_for(&self, count: i64) -> Vec<u64> {
        let count = self.clamp_turns(count);
        self.ladder()
            .take(count as usize)
            .map(|rung| rung.threshold)
            .collect()
    }

    /// Lazy iterator over every rung of the schedule.
    pub fn ladder(&self) -> ThresholdLadder<'_> {
        ThresholdLadder::new(self)
    }

    /// Threshold for a turn count already inside `1..=max_turns`.
    pub(crate) fn threshold(&self, turns: u32) -> u64 {
        // Construction verified the cap, so this cannot saturate
        self.checked_threshold(turns).unwrap_or(u64::MAX)
    }

    fn checked_threshold(&self, turns: u32) -> Option<u64> {
        let n = self.seed.len();
        let turns = turns.max(1) as usize;
        if turns <= n {
            return Some(self.seed[turns - 1]);
        }

        let k = (turns - n) as u64;
        // k(k+1) is even and fits: k < 2^32
        let triangle = k * (k + 1) / 2;
        let linear = self.last_seed_delta().checked_mul(k)?;
        let growth = self.inc_growth.checked_mul(triangle)?;
        self.seed[n - 1].checked_add(linear)?.checked_add(growth)
    }

    fn clamp_turns(&self, turns: i64) -> u32 {
        if turns < 1 {
            return 1;
        }
        if turns > i64::from(self.max_turns) {
            tracing::debug!(
                turns,
                max_turns = self.max_turns,
                "turn count beyond schedule cap, clamping"
            );
            return self.max_turns;
        }
        turns as u32
    }
}

impl Default for ThresholdSchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Plain form of a schedule, as read from configuration.
///
/// Missing fields take the standard schedule's values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleConfig {
    pub seed: Vec<u64>,
    pub inc_growth: u64,
    pub max_turns: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            seed: SEED_THRESHOLDS.to_vec(),
            inc_growth: INC_GROWTH,
            max_turns: SAFETY_MAX_TURNS,
        }
    }
}

impl TryFrom<ScheduleConfig> for ThresholdSchedule {
    type Error = ScheduleError;

    fn try_from(config: ScheduleConfig) -> Result<Self> {
        Self::new(config.seed, config.inc_growth, config.max_turns)
    }
}

impl From<ThresholdSchedule> for ScheduleConfig {
    fn from(schedule: ThresholdSchedule) -> Self {
        Self {
            seed: schedule.seed.into_owned(),
            inc_growth: schedule.inc_growth,
            max_turns: schedule.max_turns,
        }
    }
}
