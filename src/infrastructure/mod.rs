pub mod observability;
pub mod text_processing;
pub mod ytdlp;
