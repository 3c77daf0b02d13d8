mod health;
mod subtitles;

pub use health::health_handler;
pub use subtitles::subtitles_handler;
