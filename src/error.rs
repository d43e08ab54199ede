//! Error types for node operations.
//!
//! Failures fall into four groups, and each group has its own variant so callers
//! can tell them apart without string matching:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`NodeError::InvalidArgument`] | Bad input, rejected before anything is sent |
//! | [`NodeError::Transport`] | Connection failure, timeout, garbled status line |
//! | [`NodeError::HttpStatus`] | The node answered with a non-2xx status |
//! | [`NodeError::MalformedResponse`] | 2xx status, but the body broke the wire format |
//!
//! Nothing in this crate retries. [`NodeError::is_retryable`] is a hint for
//! callers that want to build their own retry policy.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NodeError>;

/// Errors returned by node operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// Invalid argument (bad URL shape, unusable input)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange itself failed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The node answered with a non-2xx status code
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The response body violated the expected format
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl NodeError {
    /// Whether repeating the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            NodeError::Transport(TransportError::ConnectionFailed(_))
            | NodeError::Transport(TransportError::TimedOut(_)) => true,
            NodeError::HttpStatus(status) => crate::client::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Whether the node refused the credentials (401) or the account's rights (403).
    pub fn is_access_denied(&self) -> bool {
        matches!(self, NodeError::HttpStatus(status) if crate::client::is_access_denied_status(*status))
    }

    /// Status code carried by this error, if the node sent one.
    pub fn status(&self) -> Option<u16> {
        match self {
            NodeError::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }
}

/// Failures of a single request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Could not connect to the node or the proxy
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The per-call timeout elapsed
    #[error("connection timed out: {0}")]
    TimedOut(String),

    /// The status line or headers could not be understood
    #[error("malformed HTTP response: {0}")]
    MalformedStatus(String),

    /// Anything else the HTTP stack reported
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::TimedOut(err.to_string())
        } else if err.is_connect() {
            TransportError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            TransportError::MalformedStatus(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl From<url::ParseError> for NodeError {
    fn from(err: url::ParseError) -> Self {
        NodeError::InvalidArgument(format!("Invalid URL: {}", err))
    }
}
