//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Filter directives for this crate, e.g. `subtitle_search=debug`. Falls back to `RUST_LOG`.
pub const LOG_ENV: &str = "SUBTITLE_SEARCH_LOG";

/// Set to `json` for newline-delimited JSON log records.
pub const LOG_FORMAT_ENV: &str = "SUBTITLE_SEARCH_LOG_FORMAT";

/// Initialize tracing. Safe to call multiple times.
///
/// Always writes to stderr: stdout carries the MCP transport.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);

        let result = if json {
            builder.json().try_init()
        } else {
            builder.compact().try_init()
        };

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
