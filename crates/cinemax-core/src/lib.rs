//! Cinemax Core Library
//!
//! Core functionality for fetching a YouTube channel's upload list and
//! heuristically extracting movie metadata (title, cast, duration,
//! description) from free-text titles and descriptions.

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod types;
pub mod youtube;

// Re-export commonly used items at crate root
pub use catalog::{Classified, build_catalog, classify_video};
pub use config::{API_KEY_ENV, Config, DEFAULT_CHANNEL_HANDLE, DEFAULT_MIN_MOVIE_MINUTES};
pub use error::{CinemaxError, Result};
pub use extract::{DEFAULT_STOPLIST, clean_title, extract_stars, summarize_description};
pub use format::{format_clip_readable, format_movie_readable};
pub use types::{Catalog, Clip, Movie, VideoDetail, VideoRecord};
pub use youtube::{VideoPages, YouTubeClient};
