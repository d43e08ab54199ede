//! Node information reported by `/inform`.

use serde::{Deserialize, Serialize};

/// A link from this node to another node, used by meta search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLink {
    /// URL of the linked node
    pub url: String,
    /// Label of the linked node
    pub label: String,
    /// Credit given to the link
    pub credit: i64,
}

/// Snapshot of a node's identity, size and accounts.
///
/// The list fields stay `None` when the node omitted their section; the
/// client treats those as still unset and asks again on the next lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Node name
    pub name: String,
    /// Node label
    pub label: String,
    /// Number of documents
    pub doc_num: i64,
    /// Number of unique words
    pub word_num: i64,
    /// Database size in bytes
    pub size: f64,
    /// Administrator names
    pub admins: Option<Vec<String>>,
    /// Guest user names
    pub users: Option<Vec<String>>,
    /// Links to other nodes
    pub links: Option<Vec<NodeLink>>,
}
