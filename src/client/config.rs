//! Client configuration.

use crate::error::{NodeError, Result};
use crate::protocol::constants::{DEFAULT_AWIDTH, DEFAULT_HWIDTH, DEFAULT_WWIDTH};
use crate::protocol::{user_agent, SnippetWidth};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP proxy used for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy host name or address
    pub host: String,
    /// Proxy port
    pub port: u16,
}

impl ProxyConfig {
    /// Proxy URL in `http://host:port` form.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Basic authentication credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// User name
    pub user: String,
    /// Password, masked in `Debug` output
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Configuration of a [`NodeClient`](crate::NodeClient).
///
/// # Examples
///
/// ```
/// use estraier_http::client::ClientConfig;
///
/// let mut config = ClientConfig::new("http://localhost:1978/node/test");
/// config.set_auth("admin", "admin");
/// config.set_timeout(5);
/// config.set_snippet_width(240, -1, 32);
///
/// assert_eq!(config.timeout().unwrap().as_secs(), 5);
/// assert_eq!(config.snippet_width().head, 96);
/// assert_eq!(config.snippet_width().around, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Node URL, e.g. `http://localhost:1978/node/test`
    pub url: String,
    /// HTTP proxy; `None` connects directly, ignoring proxy environment variables
    pub proxy: Option<ProxyConfig>,
    /// Per-call timeout in seconds; `None` waits forever
    pub timeout_secs: Option<u64>,
    /// Basic authentication credentials
    pub auth: Option<Credentials>,
    /// Whole snippet width; zero or less omits snippets
    pub wwidth: i32,
    /// Width of the document head in snippets
    pub hwidth: i32,
    /// Width around each highlighted word
    pub awidth: i32,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Log failed calls at `warn` level
    pub enable_logging: bool,
}

impl ClientConfig {
    /// Configuration for the given node URL, other fields defaulted.
    pub fn new(url: impl Into<String>) -> Self {
        ClientConfig {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use estraier_http::client::ClientConfig;
    ///
    /// let config = ClientConfig::from_json(
    ///     r#"{"url": "http://localhost:1978/node/a", "timeout_secs": 10}"#,
    /// ).unwrap();
    /// assert_eq!(config.timeout_secs, Some(10));
    /// assert_eq!(config.wwidth, 480);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| NodeError::InvalidArgument(format!("Invalid client config: {}", e)))
    }

    /// Route every request through the proxy at `host:port`.
    pub fn set_proxy(&mut self, host: &str, port: u16) {
        self.proxy = Some(ProxyConfig {
            host: host.to_string(),
            port,
        });
    }

    /// Set the per-call timeout in seconds. Negative means no timeout.
    pub fn set_timeout(&mut self, secs: i64) {
        self.timeout_secs = u64::try_from(secs).ok();
    }

    /// Authenticate every request with Basic credentials.
    pub fn set_auth(&mut self, user: &str, password: &str) {
        self.auth = Some(Credentials {
            user: user.to_string(),
            password: password.to_string(),
        });
    }

    /// Set snippet widths.
    ///
    /// `wwidth` is always taken; zero or less disables snippets. `hwidth` and
    /// `awidth` are only taken when non-negative.
    pub fn set_snippet_width(&mut self, wwidth: i32, hwidth: i32, awidth: i32) {
        self.wwidth = wwidth;
        if hwidth >= 0 {
            self.hwidth = hwidth;
        }
        if awidth >= 0 {
            self.awidth = awidth;
        }
    }

    /// Per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Snippet widths sent with searches.
    pub fn snippet_width(&self) -> SnippetWidth {
        SnippetWidth {
            whole: self.wwidth,
            head: self.hwidth,
            around: self.awidth,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: String::new(),
            proxy: None,
            timeout_secs: None,
            auth: None,
            wwidth: DEFAULT_WWIDTH,
            hwidth: DEFAULT_HWIDTH,
            awidth: DEFAULT_AWIDTH,
            user_agent: user_agent(),
            enable_logging: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.snippet_width(), SnippetWidth { whole: 480, head: 96, around: 96 });
        assert!(config.timeout().is_none());
        assert!(config.enable_logging);
    }

    #[test]
    fn test_negative_timeout_disables() {
        let mut config = ClientConfig::default();
        config.set_timeout(30);
        config.set_timeout(-1);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_proxy_url() {
        let mut config = ClientConfig::default();
        config.set_proxy("proxy.local", 3128);
        assert_eq!(config.proxy.unwrap().url(), "http://proxy.local:3128");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let mut config = ClientConfig::default();
        config.set_auth("admin", "s3cret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ClientConfig::from_json("{not json").is_err());
    }
}
