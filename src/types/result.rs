//! Search results: [`ResultDocument`] and [`ResultSet`].

use crate::protocol::constants::markers;
use crate::types::KeywordMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// One hit of a search.
///
/// Built once by the search response parser and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDocument {
    uri: String,
    attrs: HashMap<String, String>,
    snippet: String,
    keywords: String,
}

impl ResultDocument {
    pub(crate) fn new(
        uri: String,
        attrs: HashMap<String, String>,
        snippet: String,
        keywords: String,
    ) -> Self {
        ResultDocument {
            uri,
            attrs,
            snippet,
            keywords,
        }
    }

    /// URI of the document.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Attribute names, sorted.
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attrs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// All attributes.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attrs
    }

    /// Raw snippet text, one line per fragment, each line newline-terminated.
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Snippet fragments as `(text, normalized)` pairs.
    ///
    /// Highlighted terms carry their normalized form after a tab; plain
    /// fragments have none. Empty lines mark gaps between fragments and are
    /// returned as `("", None)`.
    pub fn snippet_lines(&self) -> Vec<(&str, Option<&str>)> {
        self.snippet
            .lines()
            .map(|line| match line.split_once('\t') {
                Some((text, normalized)) => (text, Some(normalized)),
                None => (line, None),
            })
            .collect()
    }

    /// Raw keyword vector as sent by the node: `key\tscore` pairs, tab-separated.
    pub fn raw_keywords(&self) -> &str {
        &self.keywords
    }

    /// Keyword vector parsed into a map.
    ///
    /// A trailing key without a score and pairs with unparsable scores are
    /// skipped.
    pub fn keywords(&self) -> KeywordMap {
        let mut map = KeywordMap::new();
        if self.keywords.is_empty() {
            return map;
        }
        let fields: Vec<&str> = self.keywords.split('\t').collect();
        for pair in fields.chunks_exact(2) {
            if let Ok(score) = pair[1].parse::<f64>() {
                map.insert(pair[0].to_string(), score);
            }
        }
        map
    }
}

/// The outcome of one search: hit documents in server order plus hints.
///
/// Hints are an open map. Keys commonly seen include `VERSION`, `NODE`,
/// `HIT`, `HINT#n`, `DOCNUM`, `WORDNUM`, `TIME`, `TIME#n`, `LINK#n` and `VIEW`.
///
/// # Examples
///
/// ```
/// use estraier_http::client::parse_search_response;
///
/// let body = "--b\nHIT\t1\n--b\n@uri=http://a\n\nsnip\n--b:END\n";
/// let result = parse_search_response(body).unwrap();
/// assert_eq!(result.doc_num(), 1);
/// assert_eq!(result.hint("HIT"), Some("1"));
/// for doc in &result {
///     assert_eq!(doc.uri(), "http://a");
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    docs: Vec<ResultDocument>,
    hints: HashMap<String, String>,
}

impl ResultSet {
    pub(crate) fn new(docs: Vec<ResultDocument>, hints: HashMap<String, String>) -> Self {
        ResultSet { docs, hints }
    }

    /// Number of documents in this result.
    pub fn doc_num(&self) -> usize {
        self.docs.len()
    }

    /// True when no document matched.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Document at `index`, in server order.
    pub fn get_document(&self, index: usize) -> Option<&ResultDocument> {
        self.docs.get(index)
    }

    /// All documents, in server order.
    pub fn documents(&self) -> &[ResultDocument] {
        &self.docs
    }

    /// Iterate documents in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultDocument> {
        self.docs.iter()
    }

    /// Hint value by key.
    pub fn hint(&self, key: &str) -> Option<&str> {
        self.hints.get(key).map(String::as_str)
    }

    /// Hint value parsed as `T`; `None` when missing or unparsable.
    ///
    /// ```
    /// use estraier_http::client::parse_search_response;
    ///
    /// let result = parse_search_response("b\nHIT\t12\nTIME\t0.004\nb:END").unwrap();
    /// assert_eq!(result.hint_as::<u64>("HIT"), Some(12));
    /// assert_eq!(result.hint_as::<f64>("TIME"), Some(0.004));
    /// assert_eq!(result.hint_as::<u64>("TIME"), None);
    /// ```
    pub fn hint_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.hint(key).and_then(|value| value.trim().parse().ok())
    }

    /// All hints.
    pub fn hints(&self) -> &HashMap<String, String> {
        &self.hints
    }

    /// Total number of matching documents reported by the node (`HIT`).
    pub fn hit_count(&self) -> Option<u64> {
        self.hint_as("HIT")
    }

    /// Look a document up by its URI.
    pub fn find_by_uri(&self, uri: &str) -> Option<&ResultDocument> {
        self.docs
            .iter()
            .find(|doc| doc.attribute(markers::URI_ATTR) == Some(uri))
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultDocument;
    type IntoIter = std::slice::Iter<'a, ResultDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultDocument;
    type IntoIter = std::vec::IntoIter<ResultDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}
