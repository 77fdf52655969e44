use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("run {run_id} did not complete within {timeout:?}")]
    RunTimeout { run_id: String, timeout: Duration },
}

pub type Result<T> = std::result::Result<T, ClientError>;
