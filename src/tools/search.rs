//! Subtitle search handler.

use crate::error::Result;
use crate::state::AppState;
use crate::types::{Language, SearchResult};
use anyhow::Context;
use rmcp::schemars;
use serde::Deserialize;
use std::{fmt::Write as _, sync::Arc};

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Text to find in subtitles (case-insensitive substring). Leave empty and set `year` to browse a year.
    #[serde(default)]
    pub query: Option<String>,
    /// Subtitle language(s) to match (default: both)
    #[serde(default)]
    pub language: Option<Language>,
    /// Only return videos from this year
    #[serde(default)]
    pub year: Option<u16>,
    /// Maximum number of results to return (default: 100)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Wrap matched text in highlight markup
    #[serde(default)]
    pub highlight: bool,
    /// Return a JSON array of results instead of a text listing
    #[serde(default)]
    pub json: bool,
}

/// Execute a search and format the results.
///
/// The scan runs on the blocking pool; repeated queries are answered from the
/// engine's cache.
pub async fn handle_search(state: &AppState, request: SearchRequest) -> Result<String> {
    let options = state
        .defaults
        .options(request.language, request.year, request.limit);
    let query = request.query.unwrap_or_default();

    let results = {
        let engine = Arc::clone(&state.engine);
        let query = query.clone();
        tokio::task::spawn_blocking(move || engine.search(&query, &options))
            .await
            .context("Search task panicked")?
    };

    let query = query.trim();
    let results: Vec<SearchResult> = if request.highlight {
        // Only mark up the fields the language mode searched
        let mark = |text: &str, searched: bool| {
            if searched {
                state.engine.highlight_text(text, query).into_owned()
            } else {
                text.to_string()
            }
        };
        results
            .iter()
            .map(|r| SearchResult {
                text: mark(&r.text, options.language.includes_english()),
                text_cn: mark(&r.text_cn, options.language.includes_chinese()),
                ..r.clone()
            })
            .collect()
    } else {
        results.to_vec()
    };

    if request.json {
        return serde_json::to_string_pretty(&results).context("Failed to serialize results");
    }

    format_results(query, options.language, options.year, &results)
}

fn format_results(
    query: &str,
    language: Language,
    year: Option<u16>,
    results: &[SearchResult],
) -> Result<String> {
    let mut out = String::new();

    if query.is_empty() && year.is_none() {
        out.push_str("Nothing to search: provide a query, a year, or both.\n");
        return Ok(out);
    }

    if results.is_empty() {
        write!(out, "No results found")?;
        if !query.is_empty() {
            write!(out, " for '{}' (language: {})", query, language)?;
        }
        if let Some(year) = year {
            write!(out, " in {}", year)?;
        }
        out.push_str(".\n\nSearch tips:\n");
        out.push_str("• Matching is a plain substring match, so try a shorter term\n");
        out.push_str("• Use language \"both\" to search English and Chinese text\n");
        out.push_str("• Leave the query empty and set a year to browse that year\n");
        return Ok(out);
    }

    if query.is_empty() {
        writeln!(
            out,
            "Browsing {}: {} video(s)\n",
            year.unwrap_or_default(),
            results.len()
        )?;
    } else {
        writeln!(
            out,
            "Found {} result(s) for '{}' (language: {})\n",
            results.len(),
            query,
            language
        )?;
    }

    for (i, r) in results.iter().enumerate() {
        writeln!(
            out,
            "{}. [{}] {} (session {}) {} → {}  score {:.1}",
            i + 1,
            r.video_year,
            r.video_title,
            r.video_session,
            r.start_time,
            r.end_time,
            r.relevance_score
        )?;
        writeln!(out, "   {}", r.text)?;
        if !r.text_cn.is_empty() {
            writeln!(out, "   {}", r.text_cn)?;
        }
        writeln!(out, "   {}", r.video_url)?;
    }

    Ok(out)
}
