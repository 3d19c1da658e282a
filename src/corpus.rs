//! Loading the video corpus from JSON.
//!
//! The corpus is a JSON array of videos using camelCase keys (`videoUrl`,
//! `startTime`, `textCn`, ...). Loading happens once at startup; the engine
//! only ever sees the parsed, immutable records.

use crate::error::{CorpusError, Result};
use crate::types::Video;
use anyhow::Context;
use std::path::Path;

/// Parse a corpus from JSON text.
pub fn parse_corpus(content: &str) -> std::result::Result<Vec<Video>, CorpusError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a corpus file.
pub async fn load_corpus(path: &Path) -> Result<Vec<Video>> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to access corpus at {}", path.display()))?;
    if !exists {
        return Err(CorpusError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read corpus at {}", path.display()))?;

    let videos = parse_corpus(&content)
        .with_context(|| format!("Invalid corpus at {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        videos = videos.len(),
        "Loaded corpus"
    );
    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    const SAMPLE: &str = r#"[
        {
            "id": "wwdc2021-10001",
            "title": "Keynote",
            "year": 2021,
            "session": "10001",
            "thumbnail": "thumbs/10001.jpg",
            "videoUrl": "https://example.com/10001",
            "subtitles": [
                {"startTime": "00:00:05", "endTime": "00:00:09", "text": "Welcome to WWDC", "textCn": "欢迎"}
            ]
        },
        {
            "id": "wwdc2019-101",
            "title": "Platforms",
            "year": 2019,
            "session": "101",
            "thumbnail": "thumbs/101.jpg",
            "videoUrl": "https://example.com/101"
        }
    ]"#;

    #[test]
    fn test_parse_corpus() {
        let videos = parse_corpus(SAMPLE).unwrap();
        check!(videos.len() == 2);
        check!(videos[0].subtitles[0].start_time == "00:00:05");
        check!(videos[1].subtitles.is_empty());
    }

    #[test]
    fn test_parse_corpus_rejects_objects() {
        let_assert!(Err(CorpusError::Parse(_)) = parse_corpus(r#"{"videos": []}"#));
    }

    #[tokio::test]
    async fn test_load_corpus_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let videos = load_corpus(&path).await.unwrap();
        check!(videos.len() == 2);
    }

    #[tokio::test]
    async fn test_load_corpus_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let_assert!(Err(err) = load_corpus(&dir.path().join("nope.json")).await);
        let_assert!(Some(CorpusError::NotFound { .. }) = err.downcast_ref::<CorpusError>());
    }

    #[tokio::test]
    async fn test_load_corpus_access_error_is_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("corpus.json");
        std::fs::write(&file, SAMPLE).unwrap();

        // A regular file used as a directory fails with ENOTDIR, not NotFound
        let_assert!(Err(err) = load_corpus(&file.join("nested.json")).await);
        check!(err.downcast_ref::<CorpusError>().is_none());
        check!(format!("{:#}", err).contains("Failed to access corpus"));
    }
}
