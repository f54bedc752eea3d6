//! Schedule configuration.
//!
//! The standard combat schedule is used unless a JSON file is given:
//!
//! ```json
//! { "seed": [1, 35, 55, 80, 105, 135, 170, 210, 255], "inc_growth": 5, "max_turns": 2000 }
//! ```
//!
//! Missing fields fall back to the standard values.

use std::fs;
use std::path::Path;

use mysteria_initiative::ThresholdSchedule;

use crate::error::{CliError, Result};

/// Environment variable naming a schedule file.
pub const SCHEDULE_ENV: &str = "MYSTERIA_SCHEDULE";

/// Load the schedule from `path`, or the standard schedule if none is given.
pub fn load_schedule(path: Option<&Path>) -> Result<ThresholdSchedule> {
    let Some(path) = path else {
        return Ok(ThresholdSchedule::STANDARD);
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schedule: ThresholdSchedule = serde_json::from_str(&text)?;

    tracing::info!(
        path = %path.display(),
        seed_len = schedule.seed_len(),
        inc_growth = schedule.inc_growth(),
        max_turns = schedule.max_turns(),
        "Loaded custom threshold schedule"
    );

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_path_is_standard() {
        assert_eq!(load_schedule(None).unwrap(), ThresholdSchedule::STANDARD);
    }

    #[test]
    fn loads_custom_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": [10, 20, 40], "inc_growth": 3, "max_turns": 50}}"#).unwrap();

        let schedule = load_schedule(Some(file.path())).unwrap();
        assert_eq!(schedule.seed(), &[10, 20, 40]);
        assert_eq!(schedule.min_initiative_for_turns(4), 63);
    }

    #[test]
    fn rejects_invalid_schedule() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": [5, 5]}}"#).unwrap();

        let err = load_schedule(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::Json(_)), "{:?}", err);
        assert!(err.to_string().contains("does not exceed"), "{}", err);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_schedule(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
