//! Highlight markup handler.

use crate::state::AppState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HighlightRequest {
    /// Text to annotate
    pub text: String,
    /// Query whose case-insensitive occurrences get wrapped in markup
    pub query: String,
}

/// Wrap occurrences of the query in the engine's configured markup.
pub fn handle_highlight(state: &AppState, request: &HighlightRequest) -> String {
    state
        .engine
        .highlight_text(&request.text, &request.query)
        .into_owned()
}
