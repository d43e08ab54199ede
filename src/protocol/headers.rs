//! Header value formatting for node requests.
//!
//! | Header | Format | Example |
//! |--------|--------|---------|
//! | Authorization | `Basic base64(user:pass)` | `Basic YWRtaW46YWRtaW4=` |
//! | User-Agent | `estraier_http/{version}` | `estraier_http/0.1.0` |
//!
//! # Examples
//!
//! ```
//! use estraier_http::protocol::{format_basic_auth, user_agent};
//!
//! assert_eq!(format_basic_auth("admin", "admin"), "Basic YWRtaW46YWRtaW4=");
//! assert!(user_agent().starts_with("estraier_http/"));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Format an `Authorization` header value for Basic authentication.
///
/// # Examples
///
/// ```
/// use estraier_http::protocol::format_basic_auth;
///
/// assert_eq!(format_basic_auth("user", "pass"), "Basic dXNlcjpwYXNz");
/// ```
pub fn format_basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

/// Default `User-Agent` value.
#[inline]
pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic_auth() {
        assert_eq!(format_basic_auth("admin", "admin"), "Basic YWRtaW46YWRtaW4=");
    }

    #[test]
    fn test_format_basic_auth_keeps_colon_in_password() {
        let header = format_basic_auth("u", "p:w");
        let decoded = STANDARD.decode(header.strip_prefix("Basic ").unwrap()).unwrap();
        assert_eq!(decoded, b"u:p:w");
    }

    #[test]
    fn test_user_agent() {
        assert!(user_agent().starts_with("estraier_http/"));
    }
}
