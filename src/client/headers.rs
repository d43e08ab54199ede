//! Request header builder.

use super::config::Credentials;
use crate::error::{NodeError, Result};
use crate::protocol::constants::{content_types, headers};
use crate::protocol::format_basic_auth;
use http::header::{HeaderMap, HeaderName, HeaderValue};

/// Headers of one node request.
///
/// ```
/// use estraier_http::client::NodeHeaders;
///
/// let map = NodeHeaders::new()
///     .with_form_content()
///     .with_basic_auth("admin", "admin")
///     .into_header_map()
///     .unwrap();
/// assert_eq!(map["content-type"], "application/x-www-form-urlencoded");
/// assert_eq!(map["authorization"], "Basic YWRtaW46YWRtaW4=");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeHeaders {
    entries: Vec<(HeaderName, String)>,
}

impl NodeHeaders {
    /// Empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// `application/x-www-form-urlencoded`
    pub fn with_form_content(self) -> Self {
        self.with_header(headers::CONTENT_TYPE, content_types::FORM)
    }

    /// `text/x-estraier-draft`
    pub fn with_draft_content(self) -> Self {
        self.with_header(headers::CONTENT_TYPE, content_types::DRAFT)
    }

    /// `Authorization: Basic ...`
    pub fn with_basic_auth(self, user: &str, password: &str) -> Self {
        self.with_header(headers::AUTHORIZATION, &format_basic_auth(user, password))
    }

    /// Add Basic auth when credentials are configured.
    pub fn with_credentials(self, credentials: Option<&Credentials>) -> Self {
        match credentials {
            Some(c) => self.with_basic_auth(&c.user, &c.password),
            None => self,
        }
    }

    /// `User-Agent`
    pub fn with_user_agent(self, agent: &str) -> Self {
        self.with_header(headers::USER_AGENT, agent)
    }

    /// Set a header, replacing an earlier value of the same name.
    pub fn with_header(mut self, name: HeaderName, value: &str) -> Self {
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, value.to_string()));
        self
    }

    /// Convert into an [`HeaderMap`].
    ///
    /// # Errors
    ///
    /// Fails when a value contains characters not allowed in a header.
    pub fn into_header_map(self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in self.entries {
            let value = HeaderValue::from_str(&value).map_err(|_| {
                NodeError::InvalidArgument(format!("Invalid value for header {}", name))
            })?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_replaced() {
        let map = NodeHeaders::new()
            .with_form_content()
            .with_draft_content()
            .into_header_map()
            .unwrap();
        assert_eq!(map[headers::CONTENT_TYPE], "text/x-estraier-draft");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_no_credentials() {
        let map = NodeHeaders::new()
            .with_credentials(None)
            .into_header_map()
            .unwrap();
        assert!(!map.contains_key(headers::AUTHORIZATION));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let result = NodeHeaders::new()
            .with_user_agent("bad\nagent")
            .into_header_map();
        assert!(matches!(result, Err(NodeError::InvalidArgument(_))));
    }
}
