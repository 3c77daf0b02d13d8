use std::sync::Arc;

use crate::application::ports::SubtitleFetcher;
use crate::application::services::ExtractionService;

pub struct AppState<S>
where
    S: SubtitleFetcher,
{
    pub extraction_service: Arc<ExtractionService<S>>,
}

impl<S> Clone for AppState<S>
where
    S: SubtitleFetcher,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
        }
    }
}
