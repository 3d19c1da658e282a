//! Shared state handed to every tool handler.

use crate::config::SearchDefaults;
use crate::search::SearchEngine;
use std::sync::Arc;

/// The engine plus the request defaults the server was configured with.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    pub defaults: SearchDefaults,
}

impl AppState {
    pub fn new(engine: SearchEngine, defaults: SearchDefaults) -> Self {
        Self {
            engine: Arc::new(engine),
            defaults,
        }
    }
}
