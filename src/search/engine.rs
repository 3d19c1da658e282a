//! Linear-scan search over the subtitle corpus.

use super::highlight::Highlighter;
use super::scoring::{BROWSE_SCORE, CHINESE_MATCH_SCORE, english_relevance};
use super::timecode::sort_seconds;
use crate::cache::{CacheKey, CacheStats, QueryCache, Results};
use crate::types::{SearchOptions, SearchResult, Video};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::Arc;

/// In-memory search engine over an immutable corpus of subtitled videos.
///
/// Owns the corpus for its whole lifetime and a query cache that only grows
/// until [`SearchEngine::clear_cache`] is called. Safe to share across threads.
#[derive(Debug)]
pub struct SearchEngine {
    videos: Arc<[Video]>,
    cache: QueryCache,
    highlighter: Highlighter,
}

impl SearchEngine {
    /// Create an engine over `videos`. The corpus is never mutated afterwards.
    pub fn new(videos: impl Into<Arc<[Video]>>) -> Self {
        let videos = videos.into();
        tracing::info!(
            videos = videos.len(),
            subtitles = videos.iter().map(|v| v.subtitles.len()).sum::<usize>(),
            "Search engine ready"
        );
        Self {
            videos,
            cache: QueryCache::new(),
            highlighter: Highlighter::default(),
        }
    }

    /// Replace the markup used by [`SearchEngine::highlight_text`].
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Search the corpus.
    ///
    /// The query is trimmed and lower-cased. With an empty query and no year,
    /// returns an empty result without touching the cache. With an empty query
    /// and a year, returns one preview row per video of that year. Results are
    /// ordered by year, then by start time within the video, and capped at
    /// `options.limit`.
    ///
    /// Identical `(query, language, year)` lookups return the same cached `Arc`
    /// until the cache is cleared.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Results {
        let query = query.trim().to_lowercase();

        if query.is_empty() && options.year.is_none() {
            return Arc::from(Vec::new());
        }

        let key = CacheKey::new(query, options.language, options.year);
        let mut scanned = false;
        let results = self.cache.get_or_compute(key.clone(), || {
            scanned = true;
            self.scan(&key, options.limit)
        });

        tracing::debug!(
            query = %key.query,
            language = %key.language,
            year = ?key.year,
            results = results.len(),
            "{}",
            if scanned { "Cache miss, scanned corpus" } else { "Cache hit" }
        );
        results
    }

    fn scan(&self, key: &CacheKey, limit: usize) -> Results {
        let mut results = Vec::new();

        for video in self.videos.iter() {
            if key.year.is_some_and(|year| video.year != year) {
                continue;
            }

            if key.query.is_empty() {
                // Year browse: one preview row per video
                if let Some(first) = video.subtitles.first() {
                    results.push(SearchResult::new(video, first, BROWSE_SCORE));
                }
                continue;
            }

            for subtitle in &video.subtitles {
                let mut matched = false;
                let mut relevance_score = 0.0;

                if key.language.includes_english()
                    && let Some(score) =
                        english_relevance(&subtitle.text.to_lowercase(), &key.query)
                {
                    matched = true;
                    relevance_score += score;
                }

                if key.language.includes_chinese()
                    && subtitle.text_cn.to_lowercase().contains(&key.query)
                {
                    matched = true;
                    relevance_score += CHINESE_MATCH_SCORE;
                }

                if matched {
                    results.push(SearchResult::new(video, subtitle, relevance_score));
                }
            }
        }

        // Stable sort keeps corpus order for equal (year, start time)
        results.sort_by_cached_key(|r| (r.video_year, sort_seconds(&r.start_time)));
        results.truncate(limit);
        results.into()
    }

    /// Wrap case-insensitive occurrences of `query` in `text` with highlight markup.
    pub fn highlight_text<'a>(&self, text: &'a str, query: &str) -> Cow<'a, str> {
        self.highlighter.highlight(text, query)
    }

    /// Distinct years present in the corpus, ascending.
    pub fn available_years(&self) -> Vec<u16> {
        self.videos
            .iter()
            .map(|v| v.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn subtitle_count(&self) -> usize {
        self.videos.iter().map(|v| v.subtitles.len()).sum()
    }

    /// Drop every cached query result.
    pub fn clear_cache(&self) {
        let entries = self.cache.len();
        self.cache.clear();
        tracing::info!(entries, "Cleared search cache");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Check whether results for this exact lookup are cached.
    ///
    /// The query is normalized the same way as in [`SearchEngine::search`].
    pub fn is_cached(&self, query: &str, options: &SearchOptions) -> bool {
        let key = CacheKey::new(query.trim().to_lowercase(), options.language, options.year);
        self.cache.contains(&key)
    }
}
