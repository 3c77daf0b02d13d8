mod subtitle_fetcher;

pub use subtitle_fetcher::{SubtitleFetchError, SubtitleFetcher};
