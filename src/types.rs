use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default cap on the number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 100;

/// A single timed caption line with English and Chinese text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtitle {
    pub start_time: String,
    pub end_time: String,
    pub text: String,
    pub text_cn: String,
}

/// A video and its subtitles, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub year: u16,
    pub session: String,
    pub thumbnail: String,
    pub video_url: String,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
}

/// One matching subtitle, denormalized with its owning video's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub video_id: String,
    pub video_title: String,
    pub video_year: u16,
    pub video_session: String,
    pub video_thumbnail: String,
    pub video_url: String,
    pub start_time: String,
    pub end_time: String,
    pub text: String,
    pub text_cn: String,
    pub relevance_score: f64,
}

impl SearchResult {
    pub(crate) fn new(video: &Video, subtitle: &Subtitle, relevance_score: f64) -> Self {
        Self {
            video_id: video.id.clone(),
            video_title: video.title.clone(),
            video_year: video.year,
            video_session: video.session.clone(),
            video_thumbnail: video.thumbnail.clone(),
            video_url: video.video_url.clone(),
            start_time: subtitle.start_time.clone(),
            end_time: subtitle.end_time.clone(),
            text: subtitle.text.clone(),
            text_cn: subtitle.text_cn.clone(),
            relevance_score,
        }
    }
}

/// Which text field(s) participate in substring matching.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English caption text only
    En,
    /// Chinese caption text only
    Cn,
    /// Both fields; contributions from each are summed
    #[default]
    Both,
}

impl Language {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Cn => "cn",
            Self::Both => "both",
        }
    }

    pub(crate) const fn includes_english(self) -> bool {
        matches!(self, Self::En | Self::Both)
    }

    pub(crate) const fn includes_chinese(self) -> bool {
        matches!(self, Self::Cn | Self::Both)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by [`SearchEngine::search`](crate::SearchEngine::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub language: Language,
    /// Restrict to videos from this year. With an empty query, browse the year.
    pub year: Option<u16>,
    /// Maximum number of results. Zero yields an empty result.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            language: Language::Both,
            year: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_language_display() {
        check!(Language::En.to_string() == "en");
        check!(Language::Cn.to_string() == "cn");
        check!(Language::Both.to_string() == "both");
    }

    #[test]
    fn test_language_deserializes_lowercase() {
        let_assert!(Ok(language) = serde_json::from_str::<Language>("\"cn\""));
        check!(language == Language::Cn);
        let_assert!(Err(_) = serde_json::from_str::<Language>("\"zh\""));
    }

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        check!(options.language == Language::Both);
        check!(options.year.is_none());
        check!(options.limit == 100);
    }

    #[test]
    fn test_video_deserializes_camel_case() {
        let json = r#"{
            "id": "10001",
            "title": "Platforms State of the Union",
            "year": 2021,
            "session": "102",
            "thumbnail": "thumbs/102.jpg",
            "videoUrl": "https://example.com/102",
            "subtitles": [
                {"startTime": "00:05", "endTime": "00:09", "text": "Hello", "textCn": "你好"}
            ]
        }"#;

        let video: Video = serde_json::from_str(json).unwrap();
        check!(video.year == 2021);
        check!(video.video_url == "https://example.com/102");
        check!(video.subtitles.len() == 1);
        check!(video.subtitles[0].text_cn == "你好");
    }

    #[test]
    fn test_search_result_serializes_camel_case() {
        let video = Video {
            id: "1".into(),
            title: "T".into(),
            year: 2020,
            session: "s".into(),
            thumbnail: "t".into(),
            video_url: "u".into(),
            subtitles: vec![],
        };
        let subtitle = Subtitle {
            start_time: "00:01".into(),
            end_time: "00:02".into(),
            text: "a".into(),
            text_cn: "b".into(),
        };

        let value = serde_json::to_value(SearchResult::new(&video, &subtitle, 1.0)).unwrap();
        check!(value["videoYear"] == 2020);
        check!(value["textCn"] == "b");
        check!(value["relevanceScore"] == 1.0);
    }
}
