use anyhow::Context;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use subtitle_search::{AppState, Config, SearchEngine, SubtitleServer, load_corpus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    subtitle_search::tracing::init();

    let config = Config::load(None)?;

    // An explicit path on the command line wins over the config file
    let corpus_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.corpus_path.clone())
        .context(
            "No corpus configured: pass a JSON file path, set SUBTITLE_SEARCH_CORPUS, \
             or set corpus_path in the config file",
        )?;

    let videos = load_corpus(&corpus_path).await?;
    let engine = SearchEngine::new(videos).with_highlighter(config.highlight.highlighter());
    let server = SubtitleServer::new(AppState::new(engine, config.search));

    tracing::info!("Starting subtitle-search MCP server");

    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
