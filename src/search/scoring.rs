//! Relevance scoring for subtitle matches.
//!
//! Scores are informative only: results are ordered by year and start time,
//! never by score.

/// Score awarded to every English match before bonuses.
const ENGLISH_BASE_SCORE: f64 = 10.0;

/// Bonus per non-overlapping occurrence of the query in the English text.
const OCCURRENCE_BONUS: f64 = 5.0;

/// Maximum bonus for a match at the very start of the text.
const POSITION_BONUS: f64 = 10.0;

/// Flat score for a Chinese match, independent of occurrence count and position.
pub(crate) const CHINESE_MATCH_SCORE: f64 = 10.0;

/// Score for a year-browse preview row.
pub(crate) const BROWSE_SCORE: f64 = 1.0;

/// Calculate relevance of an English match.
///
/// Both arguments are already lower-cased. Scoring:
/// - Base score: 10
/// - Bonus: +5 per non-overlapping occurrence of `query`
/// - Bonus: `max(0, 10 - position / 10)` where `position` is the UTF-16
///   code unit index of the first occurrence
///
/// Returns `None` when `text` does not contain `query`.
pub fn english_relevance(text: &str, query: &str) -> Option<f64> {
    let byte_pos = text.find(query)?;
    let position = text[..byte_pos].encode_utf16().count() as f64;
    let occurrences = text.matches(query).count() as f64;

    Some(
        ENGLISH_BASE_SCORE
            + occurrences * OCCURRENCE_BONUS
            + (POSITION_BONUS - position / 10.0).max(0.0),
    )
}
