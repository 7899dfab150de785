use reqwest::StatusCode;
use std::fmt;

/// Why a read of the latest recommendation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS or body read failure.
    Transport { detail: String },
    Timeout,
    /// Non-2xx response.
    Http { status: StatusCode },
    /// Body is not JSON or does not match the recommendation shape.
    Decode { detail: String },
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Timeout => "timeout",
            FetchError::Http { .. } => "http",
            FetchError::Decode { .. } => "decode",
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode {
                detail: err.to_string(),
            }
        } else {
            FetchError::Transport {
                detail: err.to_string(),
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { detail } => write!(f, "network request failed: {detail}"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Http { status } => write!(f, "HTTP error! status: {}", status.as_u16()),
            FetchError::Decode { detail } => write!(f, "invalid response body: {detail}"),
        }
    }
}

impl std::error::Error for FetchError {}
