use std::sync::Arc;

use crate::application::ports::{SubtitleFetchError, SubtitleFetcher};
use crate::domain::SubtitleRequest;
use crate::infrastructure::text_processing::srt_to_plain_text;

/// Orchestrates one extraction: fetch the raw subtitle file, strip the
/// caption framing, hand back plain text. Each call is a single
/// best-effort attempt; there is no retry and no caching.
pub struct ExtractionService<S>
where
    S: SubtitleFetcher,
{
    fetcher: Arc<S>,
}

impl<S> ExtractionService<S>
where
    S: SubtitleFetcher,
{
    pub fn new(fetcher: Arc<S>) -> Self {
        Self { fetcher }
    }

    pub async fn extract(&self, request: &SubtitleRequest) -> Result<String, ExtractionError> {
        if request.video_url.trim().is_empty() {
            return Err(ExtractionError::EmptyUrl);
        }

        let srt = self
            .fetcher
            .fetch(request)
            .await
            .map_err(ExtractionError::Fetch)?;

        Ok(srt_to_plain_text(&srt))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("video url must not be empty")]
    EmptyUrl,
    #[error(transparent)]
    Fetch(#[from] SubtitleFetchError),
}
