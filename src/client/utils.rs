//! Utility functions for the node client.
//!
//! This module provides helper functions for:
//! - Sanitizing text values (whitespace collapsing)
//! - Status code classification
//! - Node URL validation

use crate::error::{NodeError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn whitespace_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[ \t\r\n\x0B\x0C]+").expect("static pattern"))
}

/// Collapse whitespace runs to a single space and trim spaces at both ends.
///
/// # Examples
///
/// ```
/// use estraier_http::client::sanitize;
///
/// assert_eq!(sanitize("  a \t\r\n b  "), "a b");
/// assert_eq!(sanitize("\n\n"), "");
/// ```
pub fn sanitize(text: &str) -> String {
    whitespace_runs()
        .replace_all(text, " ")
        .trim_matches(' ')
        .to_string()
}

/// Check if status code indicates success
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Check if status code indicates retryable error
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 425 | 429 | 502 | 503 | 504)
}

/// Whether the node rejected the account: bad credentials or missing rights.
pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Validate a node URL and strip a trailing slash.
///
/// Only `http` and `https` URLs with a host are accepted.
///
/// ```
/// use estraier_http::client::validate_node_url;
///
/// assert_eq!(
///     validate_node_url("http://localhost:1978/node/test/").unwrap(),
///     "http://localhost:1978/node/test"
/// );
/// assert!(validate_node_url("ftp://localhost/node").is_err());
/// ```
pub fn validate_node_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(NodeError::InvalidArgument(format!(
            "Unsupported scheme '{}' in {}",
            parsed.scheme(),
            url
        )));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(NodeError::InvalidArgument(format!("Missing host in {}", url)));
    }
    Ok(url.trim_end_matches('/').to_string())
}
