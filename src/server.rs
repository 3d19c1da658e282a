//! MCP server exposing the subtitle search engine as tools.

use crate::state::AppState;
use crate::tools::{
    HighlightRequest, SearchRequest, handle_clear_cache, handle_corpus_stats, handle_highlight,
    handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for bilingual subtitle search
#[derive(Clone)]
pub struct SubtitleServer {
    /// Shared engine and request defaults
    state: Arc<AppState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for SubtitleServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubtitleServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl SubtitleServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search subtitles by case-insensitive substring in English, Chinese, or both. Results are ordered oldest year first, then by time within each video. Leave the query empty and set a year to browse one preview line per video from that year.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request)
            .await
            .map_err(|e| format!("{:#}", e))
    }

    #[tool(
        description = "Wrap every case-insensitive occurrence of a query inside a text in highlight markup, preserving the original casing."
    )]
    async fn highlight(
        &self,
        Parameters(request): Parameters<HighlightRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_highlight(&self.state, &request))
    }

    #[tool(
        description = "Show corpus statistics: available years, video count, subtitle count, and search cache usage."
    )]
    async fn corpus_stats(&self) -> std::result::Result<String, String> {
        handle_corpus_stats(&self.state).map_err(|e| format!("{:#}", e))
    }

    #[tool(description = "Clear all cached search results.")]
    async fn clear_cache(&self) -> std::result::Result<String, String> {
        Ok(handle_clear_cache(&self.state))
    }
}

#[tool_handler]
impl ServerHandler for SubtitleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "subtitle-search: substring search over bilingual (English/Chinese) video subtitles. \
                 Use search with a query to find lines, or with only a year to browse that year. \
                 Use corpus_stats to see which years are available.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Inlines subschemas so the `language` enum renders as a choice list instead
/// of a `$ref` in MCP clients.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let schema = settings.into_generator().into_root_schema_for::<T>();
    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => Arc::new(object),
        other => panic!(
            "Schema for {} is not a JSON object: {:?}",
            std::any::type_name::<T>(),
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_search_schema_inlines_language_enum() {
        let schema = inline_schema_for_type::<SearchRequest>();
        let rendered = serde_json::to_string(&*schema).unwrap();
        check!(rendered.contains("\"both\""));
        check!(!rendered.contains("$ref"));
    }
}
