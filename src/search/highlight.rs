//! Presentation markup around query occurrences.

use regex::{Captures, RegexBuilder};
use std::borrow::Cow;

/// Default opening tag wrapped around each match.
pub const DEFAULT_OPEN: &str = r#"<span class="highlight">"#;

/// Default closing tag wrapped around each match.
pub const DEFAULT_CLOSE: &str = "</span>";

/// Wraps case-insensitive occurrences of a query in markup.
///
/// Stateless with respect to the corpus and cache; the same highlighter can be
/// applied to any text, including result text returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN, DEFAULT_CLOSE)
    }
}

impl Highlighter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Wrap every case-insensitive occurrence of `query` in `text`.
    ///
    /// The query is matched literally (regex metacharacters are escaped) and the
    /// matched substring keeps its original casing. Returns `text` unchanged
    /// when either argument is empty.
    pub fn highlight<'a>(&self, text: &'a str, query: &str) -> Cow<'a, str> {
        if text.is_empty() || query.is_empty() {
            return Cow::Borrowed(text);
        }

        let pattern = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("Cannot highlight query '{}': {}", query, e);
                return Cow::Borrowed(text);
            }
        };

        pattern.replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}{}", self.open, &caps[0], self.close)
        })
    }
}
