use async_trait::async_trait;

use crate::domain::SubtitleRequest;

/// Fetches the raw subtitle file content for one request.
#[async_trait]
pub trait SubtitleFetcher: Send + Sync {
    async fn fetch(&self, request: &SubtitleRequest) -> Result<String, SubtitleFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubtitleFetchError {
    /// The tool exited non-zero, or exited clean without producing a
    /// subtitle file. Both cases carry the tail of its error stream.
    #[error("no subtitles found: {diagnostic}")]
    NotFound { diagnostic: String },
    #[error("failed to launch subtitle tool: {0}")]
    Spawn(String),
    #[error("workspace i/o failed: {0}")]
    Workspace(String),
}
