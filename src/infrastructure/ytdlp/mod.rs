mod fetcher;

pub use fetcher::{DEFAULT_BINARY, YtDlpFetcher};
