use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VouchError {
    #[error("Unsupported media type for {}: expected an audio file", path.display())]
    UnsupportedMedia { path: PathBuf },

    #[error("Failed to read audio file {}: {reason}", path.display())]
    AudioRead { path: PathBuf, reason: String },

    #[error("Analysis request failed with status {status}: {body}")]
    ServiceFailed { status: u16, body: String },

    #[error("Analysis response contained no content")]
    EmptyResponse,

    #[error("Invalid report data: {reason}")]
    InvalidReport { reason: String },

    #[error("An analysis is already in progress")]
    AnalysisInFlight,

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, VouchError>;
