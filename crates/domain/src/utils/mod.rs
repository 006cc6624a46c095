//! Pure helpers shared by views and stores

pub mod format;
pub mod youtube;

pub use format::{format_date, format_duration, format_file_size};
pub use youtube::{extract_video_id, is_valid_youtube_url};
