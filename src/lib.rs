#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Hyper Estraier node client
//!
//! A node is a full-text search server reachable over HTTP, owning one index.
//! This crate registers, edits, removes and fetches documents on a node,
//! searches it, and drives its administrative endpoints.
//!
//! ## Overview
//!
//! - **Documents** travel in the draft text format ([`Document`])
//! - **Searches** send a [`Condition`] and get back a [`ResultSet`]
//! - **Search responses** are framed by a boundary token chosen per response;
//!   [`client::SearchResponseParser`] turns them into hits and hints
//! - **Failures** are typed ([`NodeError`]) and never retried by the client
//!
//! ## Client Usage
//!
//! ```ignore
//! use estraier_http::{Condition, NodeClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NodeClient::new("http://localhost:1978/node/test")?;
//!
//!     let cond = Condition::new()
//!         .with_phrase("rust AND parser")
//!         .with_attribute("@title STRINC guide")
//!         .with_order("@mdate NUMD")
//!         .with_options(SearchOptions::SIMPLE)
//!         .with_max(10);
//!
//!     let result = client.search(&cond, 0).await?;
//!     println!("{} hits", result.hint("HIT").unwrap_or("0"));
//!     for doc in &result {
//!         println!("{}", doc.uri());
//!         print!("{}", doc.snippet());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[types]** - Conditions, documents, results, node information
//! - **[error]** - Error types and result handling
//! - **[client]** - Node client, transport and search response parser
//! - **[protocol]** - Wire constants, query encoding, draft and info formats

pub mod client;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::NodeClient;
pub use error::{NodeError, Result, TransportError};
pub use types::{
    Condition, DocRef, Document, KeywordMap, NodeInfo, NodeLink, ResultDocument, ResultSet,
    SearchOptions, UserMode,
};
