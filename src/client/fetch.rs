//! Node client implementation.
//!
//! Provides [`NodeClient`], one method per node operation. Every call is a
//! single request/response exchange: no retries, no background work.
//!
//! # Examples
//!
//! ## Searching
//!
//! ```ignore
//! use estraier_http::{Condition, NodeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NodeClient::new("http://localhost:1978/node/test")?;
//!     let cond = Condition::new().with_phrase("water AND mind").with_max(10);
//!
//!     let result = client.search(&cond, 0).await?;
//!     for doc in &result {
//!         println!("{} {:?}", doc.uri(), doc.attribute("@title"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Registering a document
//!
//! ```ignore
//! use estraier_http::{client::ClientConfig, Document, NodeClient};
//!
//! let mut config = ClientConfig::new("http://localhost:1978/node/test");
//! config.set_auth("admin", "admin");
//! let client = NodeClient::with_config(config)?;
//!
//! let mut doc = Document::new();
//! doc.add_attribute("@uri", Some("http://example.com/a"));
//! doc.add_text("Hello world.");
//! client.put_document(&doc).await?;
//! ```
//!
//! # Failures
//!
//! Operations return [`NodeError`]. After each call, [`NodeClient::status`]
//! holds the HTTP status of that call, or `None` if no status line was
//! received.

use super::config::ClientConfig;
use super::headers::NodeHeaders;
use super::parser::parse_search_response;
use super::transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
use super::utils::{is_access_denied_status, is_success_status, validate_node_url};
use crate::error::{NodeError, Result};
use crate::protocol::constants::paths;
use crate::protocol::{encode_condition, parse_keyword_lines, parse_node_info};
use crate::types::{
    Condition, DocRef, Document, KeywordMap, NodeInfo, NodeLink, ResultSet, UserMode,
};
use bytes::Bytes;
use http::Method;
use parking_lot::Mutex;
use std::sync::Arc;
use url::form_urlencoded;

/// Client for one search node.
///
/// The client owns a cache of node information, filled by the first call to
/// one of the info getters ([`name`](Self::name), [`doc_num`](Self::doc_num),
/// ...) and refreshed only for fields that are still unset.
pub struct NodeClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
    /// Validated node URL, without trailing slash
    url: String,
    status: Mutex<Option<u16>>,
    info: Mutex<Option<NodeInfo>>,
}

impl NodeClient {
    /// Create a client for the node at `url` with default configuration.
    pub fn new(url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(url))
    }

    /// Create a client with custom configuration, backed by `reqwest`.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let url = validate_node_url(&config.url)?;
        Ok(NodeClient {
            transport,
            config: Arc::new(config),
            url,
            status: Mutex::new(None),
            info: Mutex::new(None),
        })
    }

    /// Node URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// HTTP status code of the last call, `None` if it got no response.
    pub fn status(&self) -> Option<u16> {
        *self.status.lock()
    }

    // ========== Documents ==========

    /// Register a document (`/put_doc`).
    pub async fn put_document(&self, doc: &Document) -> Result<()> {
        self.post_draft(paths::PUT_DOC, doc).await.map(|_| ())
    }

    /// Replace the attributes of a registered document (`/edit_doc`).
    pub async fn edit_document(&self, doc: &Document) -> Result<()> {
        self.post_draft(paths::EDIT_DOC, doc).await.map(|_| ())
    }

    /// Remove a document (`/out_doc`).
    pub async fn out_document(&self, doc: impl Into<DocRef>) -> Result<()> {
        self.post_form(paths::OUT_DOC, doc.into().to_form())
            .await
            .map(|_| ())
    }

    /// Fetch a document (`/get_doc`).
    pub async fn get_document(&self, doc: impl Into<DocRef>) -> Result<Document> {
        let response = self.post_form(paths::GET_DOC, doc.into().to_form()).await?;
        Ok(Document::from_draft(&response.text()))
    }

    /// Fetch one attribute of a document (`/get_doc_attr`).
    pub async fn get_document_attribute(
        &self,
        doc: impl Into<DocRef>,
        name: &str,
    ) -> Result<String> {
        let mut body = doc.into().to_form();
        body.push('&');
        body.push_str(&form_pairs(&[("attr", name)]));

        let response = self.post_form(paths::GET_DOC_ATTR, body).await?;
        Ok(response.text().trim_end_matches('\n').to_string())
    }

    /// Fetch the keyword vector of a document (`/etch_doc`).
    pub async fn etch_document(&self, doc: impl Into<DocRef>) -> Result<KeywordMap> {
        let response = self.post_form(paths::ETCH_DOC, doc.into().to_form()).await?;
        Ok(parse_keyword_lines(&response.text()))
    }

    /// Look up the ID of the document registered under `uri` (`/uri_to_id`).
    pub async fn uri_to_id(&self, uri: &str) -> Result<i64> {
        let response = self
            .post_form(paths::URI_TO_ID, form_pairs(&[("uri", uri)]))
            .await?;
        let text = response.text();
        text.trim().parse().map_err(|_| {
            NodeError::MalformedResponse(format!("expected a document ID, got {:?}", text.trim()))
        })
    }

    // ========== Search ==========

    /// Search with `cond`; `depth` > 0 fans the search out to linked nodes.
    pub async fn search(&self, cond: &Condition, depth: i32) -> Result<ResultSet> {
        let body = encode_condition(cond, depth, self.config.snippet_width());
        let response = self.post_form(paths::SEARCH, body).await?;

        parse_search_response(&response.text()).map_err(|e| {
            if self.config.enable_logging {
                tracing::warn!(url = %self.url, error = %e, "unusable search response");
            }
            e
        })
    }

    // ========== Administration ==========

    /// Add, change or remove a user account (`/_set_user`).
    pub async fn set_user(&self, name: &str, mode: UserMode) -> Result<()> {
        let mode = mode.as_code().to_string();
        let body = form_pairs(&[("name", name), ("mode", mode.as_str())]);
        self.post_form(paths::SET_USER, body).await.map(|_| ())
    }

    /// Add or change a link to another node (`/_set_link`).
    ///
    /// A negative `credit` removes the link.
    pub async fn set_link(&self, url: &str, label: &str, credit: i64) -> Result<()> {
        let credit_text = credit.to_string();
        let mut pairs = vec![("url", url), ("label", label)];
        if credit >= 0 {
            pairs.push(("credit", credit_text.as_str()));
        }
        self.post_form(paths::SET_LINK, form_pairs(&pairs))
            .await
            .map(|_| ())
    }

    /// Flush the node database to disk (`/sync`).
    pub async fn sync(&self) -> Result<()> {
        self.post_form(paths::SYNC, String::new()).await.map(|_| ())
    }

    /// Optimize the node database (`/optimize`).
    pub async fn optimize(&self) -> Result<()> {
        self.post_form(paths::OPTIMIZE, String::new())
            .await
            .map(|_| ())
    }

    /// Usage ratio of the node's cache (`/cacheusage`).
    pub async fn cache_usage(&self) -> Result<f64> {
        let response = self.get(paths::CACHE_USAGE).await?;
        let text = response.text();
        text.trim().parse().map_err(|_| {
            NodeError::MalformedResponse(format!("expected a ratio, got {:?}", text.trim()))
        })
    }

    // ========== Node information ==========

    /// Fetch `/inform` and replace the cached node information.
    pub async fn refresh_info(&self) -> Result<NodeInfo> {
        let response = self.get(paths::INFORM).await?;
        let info = parse_node_info(&response.text())?;
        *self.info.lock() = Some(info.clone());
        Ok(info)
    }

    /// Name of the node.
    pub async fn name(&self) -> Result<String> {
        self.cached_info(|info| Some(info.name.clone())).await
    }

    /// Label of the node.
    pub async fn label(&self) -> Result<String> {
        self.cached_info(|info| Some(info.label.clone())).await
    }

    /// Number of documents in the node.
    pub async fn doc_num(&self) -> Result<i64> {
        self.cached_info(|info| Some(info.doc_num)).await
    }

    /// Number of unique words in the node.
    pub async fn word_num(&self) -> Result<i64> {
        self.cached_info(|info| Some(info.word_num)).await
    }

    /// Size of the node database in bytes.
    pub async fn size(&self) -> Result<f64> {
        self.cached_info(|info| Some(info.size)).await
    }

    /// Names of the administrators.
    pub async fn admins(&self) -> Result<Vec<String>> {
        self.cached_info(|info| info.admins.clone()).await
    }

    /// Names of the guest users.
    pub async fn users(&self) -> Result<Vec<String>> {
        self.cached_info(|info| info.users.clone()).await
    }

    /// Links to other nodes.
    pub async fn links(&self) -> Result<Vec<NodeLink>> {
        self.cached_info(|info| info.links.clone()).await
    }

    /// Read a field from the cache, fetching `/inform` if it is unset.
    async fn cached_info<T>(&self, pick: impl Fn(&NodeInfo) -> Option<T>) -> Result<T> {
        let cached = {
            let guard = self.info.lock();
            guard.as_ref().and_then(&pick)
        };
        if let Some(value) = cached {
            return Ok(value);
        }

        let info = self.refresh_info().await?;
        pick(&info).ok_or_else(|| {
            NodeError::MalformedResponse("node information lacks the requested section".into())
        })
    }

    // ========== Transport plumbing ==========

    async fn post_form(&self, path: &str, body: String) -> Result<TransportResponse> {
        let headers = NodeHeaders::new().with_form_content();
        self.send(Method::POST, path, headers, Some(body)).await
    }

    async fn post_draft(&self, path: &str, doc: &Document) -> Result<TransportResponse> {
        let headers = NodeHeaders::new().with_draft_content();
        self.send(Method::POST, path, headers, Some(doc.dump_draft()))
            .await
    }

    async fn get(&self, path: &str) -> Result<TransportResponse> {
        self.send(Method::GET, path, NodeHeaders::new(), None).await
    }

    /// Perform one exchange; non-2xx statuses become errors.
    async fn send(
        &self,
        method: Method,
        path: &str,
        headers: NodeHeaders,
        body: Option<String>,
    ) -> Result<TransportResponse> {
        *self.status.lock() = None;

        let headers = headers
            .with_credentials(self.config.auth.as_ref())
            .with_user_agent(&self.config.user_agent)
            .into_header_map()?;

        let request = TransportRequest {
            method,
            url: format!("{}{}", self.url, path),
            headers,
            body: body.map(Bytes::from),
            timeout: self.config.timeout(),
        };
        tracing::debug!(method = %request.method, url = %request.url, "node request");

        let response = match self.transport.perform(request).await {
            Ok(response) => response,
            Err(e) => {
                if self.config.enable_logging {
                    tracing::warn!(url = %self.url, path, error = %e, "node request failed");
                }
                return Err(e.into());
            }
        };

        *self.status.lock() = Some(response.status);

        if !is_success_status(response.status) {
            if self.config.enable_logging {
                if is_access_denied_status(response.status) {
                    tracing::warn!(
                        url = %self.url,
                        path,
                        status = response.status,
                        with_credentials = self.config.auth.is_some(),
                        "node denied access"
                    );
                } else {
                    tracing::warn!(url = %self.url, path, status = response.status, "node returned error status");
                }
            }
            return Err(NodeError::HttpStatus(response.status));
        }

        Ok(response)
    }
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient")
            .field("url", &self.url)
            .field("config", &self.config)
            .field("status", &self.status())
            .finish()
    }
}

/// Form-encode `pairs` in order.
fn form_pairs(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::collections::BTreeMap;

    /// Records requests and answers with a canned response.
    struct FakeTransport {
        requests: Mutex<Vec<TransportRequest>>,
        reply: std::result::Result<(u16, &'static str), TransportError>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(FakeTransport {
                requests: Mutex::new(Vec::new()),
                reply: Ok((status, body)),
            })
        }

        fn failing(err: TransportError) -> Arc<Self> {
            Arc::new(FakeTransport {
                requests: Mutex::new(Vec::new()),
                reply: Err(err),
            })
        }

        fn last(&self) -> TransportRequest {
            self.requests.lock().last().cloned().expect("no request recorded")
        }

        fn count(&self) -> usize {
            self.requests.lock().len()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn perform(
            &self,
            request: TransportRequest,
        ) -> std::result::Result<TransportResponse, TransportError> {
            self.requests.lock().push(request);
            let (status, body) = self.reply.clone()?;
            Ok(TransportResponse {
                status,
                headers: BTreeMap::new(),
                body: Bytes::from_static(body.as_bytes()),
            })
        }
    }

    fn client(transport: Arc<FakeTransport>) -> NodeClient {
        let mut config = ClientConfig::new("http://localhost:1978/node/test/");
        config.set_auth("admin", "admin");
        config.set_timeout(7);
        NodeClient::with_transport(config, transport).unwrap()
    }

    fn body_of(request: &TransportRequest) -> String {
        String::from_utf8(request.body.clone().unwrap_or_default().to_vec()).unwrap()
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = ClientConfig::new("localhost:1978");
        let result = NodeClient::with_transport(config, FakeTransport::replying(200, ""));
        assert!(matches!(result, Err(NodeError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_put_document_request_shape() {
        let transport = FakeTransport::replying(200, "");
        let client = client(transport.clone());

        let mut doc = Document::new();
        doc.add_attribute("@uri", Some("http://a"));
        doc.add_text("hello");
        client.put_document(&doc).await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "http://localhost:1978/node/test/put_doc");
        assert_eq!(request.headers["content-type"], "text/x-estraier-draft");
        assert_eq!(request.headers["authorization"], "Basic YWRtaW46YWRtaW4=");
        assert_eq!(request.timeout, Some(std::time::Duration::from_secs(7)));
        assert_eq!(body_of(&request), "@uri=http://a\n\nhello\n");
        assert_eq!(client.status(), Some(200));
    }

    #[tokio::test]
    async fn test_non_2xx_is_error_with_status() {
        let client = client(FakeTransport::replying(403, "forbidden"));
        let err = client.out_document(5).await.unwrap_err();
        assert_eq!(err, NodeError::HttpStatus(403));
        assert!(err.is_access_denied());
        assert!(!err.is_retryable());
        assert_eq!(client.status(), Some(403));
    }

    #[tokio::test]
    async fn test_transport_error_clears_status() {
        let client = client(FakeTransport::failing(TransportError::TimedOut("slow".into())));
        let err = client.sync().await.unwrap_err();
        assert!(matches!(err, NodeError::Transport(TransportError::TimedOut(_))));
        assert_eq!(client.status(), None);
    }

    #[tokio::test]
    async fn test_out_document_by_uri_encodes() {
        let transport = FakeTransport::replying(200, "");
        let client = client(transport.clone());
        client.out_document("http://a/b c").await.unwrap();
        assert_eq!(body_of(&transport.last()), "uri=http%3A%2F%2Fa%2Fb+c");
    }

    #[tokio::test]
    async fn test_get_document_attribute_trims_newline() {
        let transport = FakeTransport::replying(200, "Hello Title\n");
        let client = client(transport.clone());
        let value = client.get_document_attribute(3, "@title").await.unwrap();
        assert_eq!(value, "Hello Title");
        assert_eq!(body_of(&transport.last()), "id=3&attr=%40title");
    }

    #[tokio::test]
    async fn test_uri_to_id() {
        let transport = FakeTransport::replying(200, "42\n");
        let client = client(transport.clone());
        assert_eq!(client.uri_to_id("http://a").await.unwrap(), 42);
        assert_eq!(body_of(&transport.last()), "uri=http%3A%2F%2Fa");
    }

    #[tokio::test]
    async fn test_uri_to_id_garbage() {
        let client = client(FakeTransport::replying(200, "nope"));
        let err = client.uri_to_id("http://a").await.unwrap_err();
        assert!(matches!(err, NodeError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_search_sends_condition_and_parses() {
        let transport = FakeTransport::replying(200, "B\nHIT\t1\nB\n@uri=http://a\n\nsnip\nB:END\n");
        let client = client(transport.clone());
        let cond = Condition::new().with_phrase("rust").with_max(5);

        let result = client.search(&cond, 0).await.unwrap();
        assert_eq!(result.doc_num(), 1);

        let request = transport.last();
        assert_eq!(request.url, "http://localhost:1978/node/test/search");
        assert_eq!(request.headers["content-type"], "application/x-www-form-urlencoded");
        assert!(body_of(&request).starts_with("phrase=rust&max=5&auxiliary=32"));
    }

    #[tokio::test]
    async fn test_search_truncated_is_malformed() {
        let client = client(FakeTransport::replying(200, "B\nHIT\t1\nB\n@uri=http://a\n"));
        let err = client.search(&Condition::new(), 0).await.unwrap_err();
        assert!(matches!(err, NodeError::MalformedResponse(_)));
        assert_eq!(client.status(), Some(200));
    }

    #[tokio::test]
    async fn test_set_link_credit_omitted_when_negative() {
        let transport = FakeTransport::replying(200, "");
        let client = client(transport.clone());

        client.set_link("http://peer/node/b", "Peer B", 10).await.unwrap();
        assert_eq!(
            body_of(&transport.last()),
            "url=http%3A%2F%2Fpeer%2Fnode%2Fb&label=Peer+B&credit=10"
        );

        client.set_link("http://peer/node/b", "Peer B", -1).await.unwrap();
        assert_eq!(
            body_of(&transport.last()),
            "url=http%3A%2F%2Fpeer%2Fnode%2Fb&label=Peer+B"
        );
    }

    #[tokio::test]
    async fn test_set_user() {
        let transport = FakeTransport::replying(200, "");
        let client = client(transport.clone());
        client.set_user("bob", UserMode::Guest).await.unwrap();
        assert_eq!(body_of(&transport.last()), "name=bob&mode=2");
    }

    #[tokio::test]
    async fn test_cache_usage_is_get() {
        let transport = FakeTransport::replying(200, "0.25\n");
        let client = client(transport.clone());
        assert_eq!(client.cache_usage().await.unwrap(), 0.25);
        let request = transport.last();
        assert_eq!(request.method, Method::GET);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_info_cached() {
        let transport = FakeTransport::replying(
            200,
            "test\tTest\t10\t200\t4096.0\n\nadmin\n\nguest\n\n",
        );
        let client = client(transport.clone());

        assert_eq!(client.name().await.unwrap(), "test");
        assert_eq!(client.doc_num().await.unwrap(), 10);
        assert_eq!(client.admins().await.unwrap(), vec!["admin"]);
        assert!(client.links().await.unwrap().is_empty());
        assert_eq!(transport.count(), 1);
    }

    #[tokio::test]
    async fn test_info_unset_section_refetched() {
        let transport = FakeTransport::replying(200, "test\tTest\t10\t200\t4096.0");
        let client = client(transport.clone());

        assert_eq!(client.label().await.unwrap(), "Test");
        assert!(client.users().await.is_err());
        assert_eq!(transport.count(), 2);
    }
}
