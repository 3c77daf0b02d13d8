mod subtitle_request;

pub use subtitle_request::{DEFAULT_LANGUAGES, SubtitleRequest};
