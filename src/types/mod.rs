//! Core data types: conditions, documents, results and node information.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Condition`] | Search parameters |
//! | [`Document`] | Draft document for registration and retrieval |
//! | [`ResultSet`] | Hits and hints of one search |
//! | [`ResultDocument`] | One hit |
//! | [`NodeInfo`] | Node identity and accounts |
//! | [`DocRef`] | A document addressed by ID or URI |

mod condition;
mod document;
mod node_info;
mod result;

pub use condition::{Condition, SearchOptions};
pub use document::{Document, KeywordMap};
pub use node_info::{NodeInfo, NodeLink};
pub use result::{ResultDocument, ResultSet};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document key: the numeric ID assigned by the node, or the document URI.
///
/// ```
/// use estraier_http::DocRef;
///
/// assert_eq!(DocRef::from(3), DocRef::Id(3));
/// assert_eq!(DocRef::from("http://a/"), DocRef::Uri("http://a/".to_string()));
/// assert_eq!(DocRef::Uri("a b".into()).to_form(), "uri=a+b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocRef {
    /// Numeric ID assigned by the node
    Id(i64),
    /// Document URI
    Uri(String),
}

impl DocRef {
    /// Form-encoded `id=...` or `uri=...` pair.
    pub fn to_form(&self) -> String {
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        match self {
            DocRef::Id(id) => form.append_pair("id", &id.to_string()),
            DocRef::Uri(uri) => form.append_pair("uri", uri),
        };
        form.finish()
    }
}

impl From<i64> for DocRef {
    fn from(id: i64) -> Self {
        DocRef::Id(id)
    }
}

impl From<i32> for DocRef {
    fn from(id: i32) -> Self {
        DocRef::Id(i64::from(id))
    }
}

impl From<&str> for DocRef {
    fn from(uri: &str) -> Self {
        DocRef::Uri(uri.to_string())
    }
}

impl From<String> for DocRef {
    fn from(uri: String) -> Self {
        DocRef::Uri(uri)
    }
}

impl fmt::Display for DocRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocRef::Id(id) => write!(f, "#{}", id),
            DocRef::Uri(uri) => write!(f, "{}", uri),
        }
    }
}

/// Account mode for `/_set_user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserMode {
    /// Remove the user
    Delete,
    /// Grant administrator rights
    Admin,
    /// Grant guest rights
    Guest,
}

impl UserMode {
    /// Wire value of the mode.
    pub fn as_code(self) -> u8 {
        match self {
            UserMode::Delete => 0,
            UserMode::Admin => 1,
            UserMode::Guest => 2,
        }
    }
}
