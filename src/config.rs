//! TOML configuration with environment overrides.
//!
//! Resolution order for the config file:
//! 1. An explicit path passed by the caller
//! 2. `SUBTITLE_SEARCH_CONFIG`
//! 3. `<config dir>/subtitle-search/config.toml`, if it exists
//! 4. Built-in defaults
//!
//! `SUBTITLE_SEARCH_CORPUS` overrides `corpus_path` regardless of source.

use crate::error::Result;
use crate::search::{DEFAULT_CLOSE, DEFAULT_OPEN, Highlighter};
use crate::types::{DEFAULT_LIMIT, Language, SearchOptions};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "SUBTITLE_SEARCH_CONFIG";

/// Env var overriding the corpus path.
pub const CORPUS_ENV: &str = "SUBTITLE_SEARCH_CORPUS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON file holding the video corpus
    pub corpus_path: Option<PathBuf>,
    pub search: SearchDefaults,
    pub highlight: HighlightConfig,
}

/// Defaults applied to search requests that leave a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchDefaults {
    pub language: Language,
    pub limit: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            language: Language::Both,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchDefaults {
    /// Build options from optional request fields, falling back to these defaults.
    pub fn options(
        &self,
        language: Option<Language>,
        year: Option<u16>,
        limit: Option<usize>,
    ) -> SearchOptions {
        SearchOptions {
            language: language.unwrap_or(self.language),
            year,
            limit: limit.unwrap_or(self.limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    pub open: String,
    pub close: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

impl HighlightConfig {
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(self.open.clone(), self.close.clone())
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Load the config following the documented resolution order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve(
            explicit,
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            default_config_path(),
            std::env::var_os(CORPUS_ENV).map(PathBuf::from),
        )
    }

    fn resolve(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        fallback: Option<PathBuf>,
        corpus_override: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::from_file(&path)?,
            None => match fallback.filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        if let Some(corpus) = corpus_override {
            config.corpus_path = Some(corpus);
        }

        Ok(config)
    }
}

/// `<config dir>/subtitle-search/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subtitle-search").join("config.toml"))
}
