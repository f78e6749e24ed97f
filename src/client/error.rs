//! Errors raised while fetching or normalizing API responses.

use reqwest::StatusCode;

use super::normalize::NormalizeError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Builder(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
