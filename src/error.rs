//! Error types for the ranking-insight SDK.
//!
//! Every gateway call fails with one of a small, closed set of kinds
//! ([`ErrorKind`]) so views can react to a transport failure, a non-2xx
//! response, and a malformed payload differently. The `context` carried by
//! each request error is the fixed, human-readable message of the endpoint
//! that failed (e.g. `"Failed to fetch stats"`).

use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("{context}: transport error: {message}")]
    Transport {
        context: &'static str,
        message: String,
    },

    #[error("{context}: HTTP status {status}")]
    HttpStatus { context: &'static str, status: u16 },

    #[error("{context}: unexpected response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, RankingError>;

/// Structured classification of a [`RankingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    HttpStatus(u16),
    Decode,
    Io,
    InvalidArgument,
    Cancelled,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => f.write_str("transport"),
            ErrorKind::HttpStatus(code) => write!(f, "http_status({code})"),
            ErrorKind::Decode => f.write_str("decode"),
            ErrorKind::Io => f.write_str("io"),
            ErrorKind::InvalidArgument => f.write_str("invalid_argument"),
            ErrorKind::Cancelled => f.write_str("cancelled"),
        }
    }
}

impl RankingError {
    /// Return the structured kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RankingError::Transport { .. } => ErrorKind::Transport,
            RankingError::HttpStatus { status, .. } => ErrorKind::HttpStatus(*status),
            RankingError::Decode { .. } => ErrorKind::Decode,
            RankingError::Io(_) => ErrorKind::Io,
            RankingError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            RankingError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// The fixed endpoint message for request errors, if any.
    pub fn context(&self) -> Option<&'static str> {
        match self {
            RankingError::Transport { context, .. }
            | RankingError::HttpStatus { context, .. }
            | RankingError::Decode { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Whether repeating the same request could plausibly succeed.
    ///
    /// Transport failures, request timeouts, rate limiting and server-side
    /// (5xx) errors are retryable. Client errors and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            RankingError::Transport { .. } => true,
            RankingError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 408 || *status == 429
            }
            _ => false,
        }
    }
}
