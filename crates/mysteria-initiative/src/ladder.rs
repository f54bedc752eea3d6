//! Iteration over the rungs of a threshold schedule.

use crate::ThresholdSchedule;

/// One row of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rung {
    /// Turn count
    pub turns: u32,
    /// Minimum initiative for `turns` turns
    pub threshold: u64,
    /// Step up from the previous rung (`None` for the first)
    pub increment: Option<u64>,
}

/// Iterator over rungs `1..=max_turns` of a schedule.
#[derive(Debug, Clone)]
pub struct ThresholdLadder<'a> {
    schedule: &'a ThresholdSchedule,
    next: u64,
    previous: Option<u64>,
}

impl<'a> ThresholdLadder<'a> {
    /// Start at the first rung.
    pub fn new(schedule: &'a ThresholdSchedule) -> Self {
        Self {
            schedule,
            next: 1,
            previous: None,
        }
    }

    /// Start at rung `turns`, clamped to `1..=max_turns + 1`.
    pub fn starting_at(schedule: &'a ThresholdSchedule, turns: u32) -> Self {
        let next = u64::from(turns).clamp(1, u64::from(schedule.max_turns()) + 1);
        let previous = (next > 1).then(|| schedule.threshold((next - 1) as u32));
        Self {
            schedule,
            next,
            previous,
        }
    }
}

impl Iterator for ThresholdLadder<'_> {
    type Item = Rung;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > u64::from(self.schedule.max_turns()) {
            return None;
        }

        let turns = self.next as u32;
        let threshold = self.schedule.threshold(turns);
        let increment = self.previous.map(|prev| threshold - prev);

        self.next += 1;
        self.previous = Some(threshold);

        Some(Rung {
            turns,
            threshold,
            increment,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.schedule.max_turns()) + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ThresholdLadder<'_> {}
