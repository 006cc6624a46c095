//! YouTube URL validation

use once_cell::sync::Lazy;
use regex::Regex;

// Accepts youtube.com/watch?v=<id> and youtu.be/<id>, with or without scheme
// and www. The capture is the video id up to the next query separator.
static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?:youtube\.com|youtu\.be)/(?:watch\?v=)?([^\s&]+)")
        .expect("static pattern is valid")
});

/// Whether the given string looks like a YouTube video URL.
#[must_use]
pub fn is_valid_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}

/// Extract the video id from a YouTube URL, if present.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<&str> {
    YOUTUBE_URL.captures(url).and_then(|captures| captures.get(1)).map(|m| m.as_str())
}
