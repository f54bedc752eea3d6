//! Result line shown by the calculator.

use std::fmt;

use crate::{parse_initiative, ThresholdSchedule};

/// Message for text that holds no initiative value.
pub const INVALID_INITIATIVE_MESSAGE: &str = "Bitte eine gültige Initiative eingeben.";

/// Turns granted for one initiative value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TurnVerdict {
    /// Initiative as entered
    pub initiative: f64,
    /// Turns granted this round
    pub turns: u32,
}

impl TurnVerdict {
    /// Evaluate `initiative` against `schedule`.
    pub fn new(schedule: &ThresholdSchedule, initiative: f64) -> Self {
        Self {
            initiative,
            turns: schedule.turns_from_initiative(initiative),
        }
    }

    /// Evaluate form text, or `None` if it holds no number.
    pub fn from_input(schedule: &ThresholdSchedule, text: &str) -> Option<Self> {
        parse_initiative(text).map(|initiative| Self::new(schedule, initiative))
    }

    /// Minimum initiative for one more turn, if the schedule goes that far.
    pub fn next_threshold(&self, schedule: &ThresholdSchedule) -> Option<u64> {
        (self.turns < schedule.max_turns())
            .then(|| schedule.min_initiative_for_turns(i64::from(self.turns) + 1))
    }
}

impl fmt::Display for TurnVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.turns == 1 { "Zug" } else { "Züge" };
        write!(f, "Bei einer Initiative von ")?;
        if self.initiative.is_infinite() {
            let sign = if self.initiative < 0.0 { "-" } else { "" };
            write!(f, "{}Infinity", sign)?;
        } else {
            write!(f, "{}", self.initiative)?;
        }
        write!(f, " darfst du {} {} pro Runde ausführen.", self.turns, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STD: ThresholdSchedule = ThresholdSchedule::STANDARD;

    #[test]
    fn plural_message() {
        let verdict = TurnVerdict::new(&STD, 120.0);
        assert_eq!(verdict.turns, 5);
        assert_eq!(
            verdict.to_string(),
            "Bei einer Initiative von 120 darfst du 5 Züge pro Runde ausführen."
        );
    }

    #[test]
    fn singular_message() {
        let verdict = TurnVerdict::new(&STD, 34.5);
        assert_eq!(
            verdict.to_string(),
            "Bei einer Initiative von 34.5 darfst du 1 Zug pro Runde ausführen."
        );
    }

    #[test]
    fn zero_turns_is_plural() {
        let verdict = TurnVerdict::new(&STD, -5.0);
        assert_eq!(verdict.turns, 0);
        assert!(verdict.to_string().ends_with("0 Züge pro Runde ausführen."));
    }

    #[test]
    fn infinite_initiative_renders_like_the_page() {
        let verdict = TurnVerdict::new(&STD, f64::INFINITY);
        assert!(verdict.to_string().contains("von Infinity darfst"));
    }

    #[test]
    fn from_form_text() {
        let verdict = TurnVerdict::from_input(&STD, " 305 Punkte").unwrap();
        assert_eq!(verdict.turns, 10);
        assert!(TurnVerdict::from_input(&STD, "viel").is_none());
    }

    #[test]
    fn next_threshold_until_cap() {
        assert_eq!(TurnVerdict::new(&STD, 304.0).next_threshold(&STD), Some(305));
        assert_eq!(TurnVerdict::new(&STD, 0.0).next_threshold(&STD), Some(1));
        assert_eq!(TurnVerdict::new(&STD, 1e12).next_threshold(&STD), None);
    }
}
