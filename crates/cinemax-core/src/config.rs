use crate::error::{CinemaxError, Result};

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Channel the original deployment tracks.
pub const DEFAULT_CHANNEL_HANDLE: &str = "itelediconstudio";

/// Videos shorter than this are treated as trailers/shorts, not movies.
pub const DEFAULT_MIN_MOVIE_MINUTES: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub channel_handle: String,
    pub min_movie_minutes: u64,
}

impl Config {
    /// Build a config from the environment, failing when the API key is unset.
    pub fn from_env(channel_handle: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| CinemaxError::MissingApiKey {
            env_var: API_KEY_ENV.to_string(),
        })?;

        Ok(Self {
            api_key,
            channel_handle: channel_handle.into(),
            min_movie_minutes: DEFAULT_MIN_MOVIE_MINUTES,
        })
    }
}
