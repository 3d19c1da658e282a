//! In-memory search over bilingual, timestamped video subtitles.
//!
//! [`SearchEngine`] scans an immutable corpus of [`Video`]s for substring
//! matches in English, Chinese, or both, orders results by year and start
//! time, and caches each distinct query. The [`server`] module exposes the
//! engine as MCP tools.

pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;
pub mod types;

pub use cache::{CacheKey, CacheStats, QueryCache};
pub use config::Config;
pub use corpus::{load_corpus, parse_corpus};
pub use error::{CorpusError, Result, TimestampError};
pub use search::{Highlighter, SearchEngine, english_relevance, parse_timestamp};
pub use server::SubtitleServer;
pub use state::AppState;
pub use types::{Language, SearchOptions, SearchResult, Subtitle, Video};
