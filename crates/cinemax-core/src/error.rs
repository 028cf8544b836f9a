use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinemaxError {
    #[error("Could not resolve channel handle {handle}")]
    ChannelResolutionFailed { handle: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, CinemaxError>;
