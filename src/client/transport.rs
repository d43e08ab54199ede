//! HTTP transport seam.
//!
//! [`Transport`] performs exactly one request/response exchange. The node
//! client never retries, so an implementation must not retry either.
//! [`ReqwestTransport`] is the default; tests and embedders can plug in
//! their own.

use super::config::ClientConfig;
use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::collections::BTreeMap;
use std::time::Duration;

/// One outgoing request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Full request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body, if any
    pub body: Option<Bytes>,
    /// Timeout for the whole exchange
    pub timeout: Option<Duration>,
}

/// The raw outcome of an exchange, whatever the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Header names lowercased
    pub headers: BTreeMap<String, String>,
    /// Raw body
    pub body: Bytes,
}

impl TransportResponse {
    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// Performs a single HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the response, whatever its status.
    async fn perform(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
///
/// The proxy is fixed when the client is built; the timeout travels with
/// each request. Only the configured proxy is used: `HTTP_PROXY` and
/// friends in the environment are ignored.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport honoring the proxy and user agent of `config`.
    ///
    /// # Errors
    ///
    /// Fails when the proxy URL is unusable or the TLS backend cannot start.
    pub fn new(config: &ClientConfig) -> std::result::Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_idle_timeout(Duration::from_secs(90));

        builder = match &config.proxy {
            Some(proxy) => {
                let proxy = reqwest::Proxy::all(proxy.url())
                    .map_err(|e| TransportError::Other(format!("Invalid proxy: {}", e)))?;
                builder.proxy(proxy)
            }
            None => builder.no_proxy(),
        };

        Ok(Self::from_client(builder.build()?))
    }

    /// Wrap an existing `reqwest` client, for callers that need TLS or
    /// connection settings `ClientConfig` does not cover.
    ///
    /// The client's own proxy settings apply instead of the config's.
    pub fn from_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let mut req_builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await?;
        let status = response.status().as_u16();

        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let mut config = ClientConfig::new("http://localhost:1978/node/test");
        config.set_proxy("127.0.0.1", 8080);
        assert!(ReqwestTransport::new(&config).is_ok());
    }

    #[test]
    fn test_response_helpers() {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "text/plain".to_string());
        let response = TransportResponse {
            status: 200,
            headers,
            body: Bytes::from_static(b"caf\xc3\xa9"),
        };
        assert_eq!(response.text(), "café");
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_connect_error() {
        let transport = ReqwestTransport::new(&ClientConfig::default()).unwrap();
        let request = TransportRequest {
            method: Method::GET,
            url: "http://127.0.0.1:1/inform".to_string(),
            headers: HeaderMap::new(),
            body: None,
            timeout: Some(Duration::from_secs(5)),
        };
        let err = transport.perform(request).await.unwrap_err();
        assert!(matches!(err, TransportError::ConnectionFailed(_)));
    }
}
