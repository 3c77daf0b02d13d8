/// Language tag(s) requested when the caller does not specify any,
/// passed verbatim to the external tool (e.g. "th" or "th,en").
pub const DEFAULT_LANGUAGES: &str = "th";

/// One subtitle extraction request. Lives only for the duration of a
/// single call; nothing about it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleRequest {
    pub video_url: String,
    pub languages: String,
    /// Auto-generated track when true, creator-provided track when false.
    pub auto_subtitles: bool,
    /// Raw cookie-file content for private or members-only videos.
    pub cookies: Option<String>,
}

impl SubtitleRequest {
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
            languages: DEFAULT_LANGUAGES.to_string(),
            auto_subtitles: true,
            cookies: None,
        }
    }
}
