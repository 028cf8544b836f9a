use serde::{Deserialize, Serialize};

/// Lightweight listing entry collected while paginating the channel search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub description: String,
}

/// Per-video metadata from the batch detail lookup, keyed by video id.
#[derive(Debug, Clone)]
pub struct VideoDetail {
    pub duration_seconds: u64,
    pub category: String,
    pub description: String,
}

/// Normalized movie entry.
///
/// `stars` is never empty (falls back to `["Unknown"]`) and
/// `duration_minutes` is at or above the movie threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub category: String,
    pub stars: Vec<String>,
    pub duration_minutes: u64,
    pub description: String,
}

/// A video below the movie threshold (trailer, short, teaser).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    pub title: String,
    pub duration_minutes: u64,
}

/// Classified channel uploads, both lists in listing order (newest first).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub clips: Vec<Clip>,
}
