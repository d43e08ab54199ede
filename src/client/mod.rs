//! Node HTTP client.
//!
//! This module provides the client side of the node protocol:
//!
//! - **Document operations**: register, edit, remove, fetch, keyword vectors
//! - **Search**: condition encoding and response parsing
//! - **Administration**: users, links, sync, optimize, node information
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch     - NodeClient and node operations
//! ├── simple    - one-call register/update/purge/search helpers
//! ├── headers   - request header builder
//! ├── parser    - search response parser
//! ├── transport - Transport trait and reqwest implementation
//! ├── config    - client configuration
//! └── utils     - utility functions
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`NodeClient`] | Client for one node |
//! | [`SearchResponseParser`] | Search response state machine |
//! | [`Transport`] | One HTTP exchange |
//! | [`ClientConfig`] | Client configuration options |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use estraier_http::client::{ClientConfig, NodeClient};
//!
//! let client = NodeClient::new("http://localhost:1978/node/test").unwrap();
//!
//! let mut config = ClientConfig::new("http://localhost:1978/node/test");
//! config.set_timeout(10);
//! config.set_proxy("proxy.local", 3128);
//! let client = NodeClient::with_config(config).unwrap();
//! ```
//!
//! ## Parsing a Search Response
//!
//! ```
//! use estraier_http::client::{ParseState, SearchResponseParser};
//!
//! let mut parser = SearchResponseParser::new();
//! parser.feed("--B--\nHIT\t1\n--B--\n@uri=http://a\n\ntext\n--B--:END\n").unwrap();
//! assert_eq!(parser.state(), ParseState::Complete);
//! assert_eq!(parser.finish().unwrap().doc_num(), 1);
//! ```

mod config;
mod fetch;
mod headers;
mod parser;
mod simple;
mod transport;
mod utils;

pub use config::{ClientConfig, Credentials, ProxyConfig};
pub use fetch::NodeClient;
pub use headers::NodeHeaders;
pub use parser::{parse_search_response, ParseState, SearchResponseParser};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
pub use utils::*;
