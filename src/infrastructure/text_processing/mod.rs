mod srt_to_text;

pub use srt_to_text::srt_to_plain_text;
