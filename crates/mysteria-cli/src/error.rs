//! Error types for the initiative CLI.

use std::path::PathBuf;

use mysteria_initiative::INVALID_INITIATIVE_MESSAGE;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Schedule file could not be read
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schedule file is malformed, or output could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Initiative text holds no number
    #[error("{msg} (got {0:?})", msg = INVALID_INITIATIVE_MESSAGE)]
    InvalidInitiative(String),
}
