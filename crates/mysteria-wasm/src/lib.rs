//! Browser bindings for the initiative calculator.
//!
//! Exposes the threshold schedule to the combat-rules page under the names
//! the page script calls. JavaScript numbers arrive as `f64` and are coerced
//! the same way the form does: turn counts are floored and read as at least
//! 1, and initiative that is NaN, infinite or negative grants 0 turns.

use mysteria_initiative::{coerce_turns, ThresholdSchedule, TurnVerdict, INVALID_INITIATIVE_MESSAGE};
use wasm_bindgen::prelude::*;

/// Minimum initiative for `turns` turns.
#[wasm_bindgen(js_name = minInitiativeForTurns)]
pub fn min_initiative_for_turns(turns: f64) -> f64 {
    mysteria_initiative::min_initiative_for_turns(coerce_turns(turns)) as f64
}

/// Turns granted by `initiative`.
#[wasm_bindgen(js_name = turnsFromInitiative)]
pub fn turns_from_initiative(initiative: f64) -> u32 {
    mysteria_initiative::turns_from_initiative(initiative)
}

/// Thresholds for 1 through `count` turns, as a `Float64Array`.
#[wasm_bindgen(js_name = thresholdsFor)]
pub fn thresholds_for(count: f64) -> Vec<f64> {
    mysteria_initiative::thresholds_for(coerce_turns(count))
        .into_iter()
        .map(|t| t as f64)
        .collect()
}

/// Text for the calculator's result panel.
#[wasm_bindgen(js_name = describeInitiative)]
pub fn describe_initiative(text: &str) -> String {
    match TurnVerdict::from_input(&ThresholdSchedule::STANDARD, text) {
        Some(verdict) => verdict.to_string(),
        None => INVALID_INITIATIVE_MESSAGE.to_string(),
    }
}
