//! Corpus statistics and cache control handlers.

use crate::error::Result;
use crate::state::AppState;
use std::fmt::Write as _;

/// Summarize the loaded corpus and the query cache.
pub fn handle_corpus_stats(state: &AppState) -> Result<String> {
    let engine = &state.engine;
    let years = engine.available_years();
    let cache = engine.cache_stats();

    let mut out = String::new();
    writeln!(out, "Videos: {}", engine.video_count())?;
    writeln!(out, "Subtitles: {}", engine.subtitle_count())?;
    if years.is_empty() {
        writeln!(out, "Years: none")?;
    } else {
        let years: Vec<String> = years.iter().map(ToString::to_string).collect();
        writeln!(out, "Years: {}", years.join(", "))?;
    }
    writeln!(
        out,
        "Cache: {} entries, {} hits, {} misses",
        cache.entries, cache.hits, cache.misses
    )?;

    Ok(out)
}

/// Drop every cached search result.
pub fn handle_clear_cache(state: &AppState) -> String {
    let entries = state.engine.cache_stats().entries;
    state.engine.clear_cache();
    format!("Cleared {} cached search(es).", entries)
}
