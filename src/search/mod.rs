//! Substring search over bilingual subtitles.
//!
//! This module provides the linear-scan engine together with its relevance
//! scoring, timestamp ordering, and highlight markup helpers.

// Module declarations
pub(crate) mod engine;
pub(crate) mod highlight;
pub(crate) mod scoring;
pub(crate) mod timecode;

// Public re-exports (used via lib.rs)
pub use engine::SearchEngine;
pub use highlight::{DEFAULT_CLOSE, DEFAULT_OPEN, Highlighter};
pub use scoring::english_relevance;
pub use timecode::parse_timestamp;
