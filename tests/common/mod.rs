//! Shared test fixtures and corpus builders for integration tests.
//!
//! # Available Fixtures
//!
//! - `keynote_corpus`: one 2021 video with two subtitles (welcome / thanks)
//! - `multi_year_corpus`: several videos across 2019-2022 with bilingual lines
//! - `engine`: a fresh `SearchEngine` over `multi_year_corpus` with an empty cache
//! - `app_state`: an `AppState` wrapping `engine` with default request settings
//!
//! Every fixture builds a new engine, so cache state never leaks between tests.

use rstest::fixture;
use subtitle_search::config::SearchDefaults;
use subtitle_search::{AppState, SearchEngine, Subtitle, Video};

/// Builds a subtitle whose end time equals its start time.
#[allow(dead_code)] // Used across different integration test crates
pub fn subtitle(start: &str, text: &str, text_cn: &str) -> Subtitle {
    Subtitle {
        start_time: start.to_string(),
        end_time: start.to_string(),
        text: text.to_string(),
        text_cn: text_cn.to_string(),
    }
}

/// Builds a video with derived title, session, and URLs.
#[allow(dead_code)] // Used across different integration test crates
pub fn video(id: &str, year: u16, subtitles: Vec<Subtitle>) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Session {}", id),
        year,
        session: id.to_string(),
        thumbnail: format!("thumbs/{}.jpg", id),
        video_url: format!("https://example.com/videos/{}", id),
        subtitles,
    }
}

#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn keynote_corpus() -> Vec<Video> {
    vec![video(
        "keynote",
        2021,
        vec![
            subtitle("00:00:05", "Welcome to WWDC", "欢迎"),
            subtitle("00:10:00", "Thanks everyone", "谢谢"),
        ],
    )]
}

/// Videos are deliberately listed out of year order.
#[fixture]
pub fn multi_year_corpus() -> Vec<Video> {
    vec![
        video(
            "swiftui-2022",
            2022,
            vec![
                subtitle("01:05:00", "SwiftUI layout in depth", "SwiftUI 布局详解"),
                subtitle("00:02:10", "What's new in SwiftUI", "SwiftUI 新功能"),
                subtitle("00:30:00", "Charts are built with swift", "图表"),
            ],
        ),
        video(
            "concurrency-2021",
            2021,
            vec![
                subtitle("00:00:30", "Meet async/await in Swift", "认识 Swift 中的异步"),
                subtitle("00:12:45", "Actors protect mutable state", "Actor 保护可变状态"),
            ],
        ),
        video(
            "privacy-2019",
            2019,
            vec![
                subtitle("02:15", "Privacy is a fundamental human right", "隐私是一项基本人权"),
                subtitle("10:00", "Sign in with Apple", "通过 Apple 登录"),
            ],
        ),
        video(
            "widgets-2021",
            2021,
            vec![
                subtitle("00:00:10", "Widgets on the home screen", "主屏幕上的小组件"),
                subtitle("00:05:00", "Build widgets with SwiftUI", "使用 SwiftUI 构建小组件"),
            ],
        ),
        video("empty-2020", 2020, vec![]),
    ]
}

#[fixture]
pub fn engine(multi_year_corpus: Vec<Video>) -> SearchEngine {
    SearchEngine::new(multi_year_corpus)
}

#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn app_state(engine: SearchEngine) -> AppState {
    AppState::new(engine, SearchDefaults::default())
}
