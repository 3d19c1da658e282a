//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for subtitle-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` on the config, corpus, and server paths. The search core
/// itself is infallible.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a `MM:SS` / `HH:MM:SS` timestamp cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Wrong number of colon-separated parts, or a part that is not an unsigned integer.
    #[error("invalid timestamp '{0}': expected MM:SS or HH:MM:SS")]
    InvalidTimestamp(String),
}

/// Error returned when loading the subtitle corpus fails.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Corpus file not found at the expected path.
    #[error("corpus not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// Corpus contents are not a JSON array of videos.
    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}
