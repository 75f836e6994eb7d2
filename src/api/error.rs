//! Error handling for the dashboard API module

use thiserror::Error;

/// Every way a dashboard refresh can fail. The UI treats all of them alike.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The payload carried an `error` field.
    #[error("{0}")]
    Server(String),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The body was not valid JSON for the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn from_status(status: reqwest::StatusCode) -> FetchError {
        FetchError::Http {
            status: status.as_u16(),
        }
    }
}
