//! Draft documents, the unit of registration and retrieval.

use crate::client::sanitize;
use crate::protocol::constants::markers;
use crate::protocol::{dump_draft, parse_draft};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyword vector: keyword to score.
pub type KeywordMap = BTreeMap<String, f64>;

/// A document as registered on (or fetched from) a node.
///
/// Attributes are kept sorted by name, which is also the order they are
/// written in the draft text.
///
/// # Examples
///
/// ```
/// use estraier_http::Document;
///
/// let mut doc = Document::new();
/// doc.add_attribute("@uri", Some("http://example.com/a"));
/// doc.add_attribute("@title", Some("A  page"));
/// doc.add_text("Hello world.");
/// doc.add_hidden_text("secret words");
///
/// assert_eq!(
///     doc.dump_draft(),
///     "@title=A page\n@uri=http://example.com/a\n\nHello world.\n\tsecret words\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) texts: Vec<String>,
    pub(crate) hidden_texts: Vec<String>,
    pub(crate) keywords: Option<KeywordMap>,
    pub(crate) score: Option<i64>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from draft text.
    pub fn from_draft(draft: &str) -> Self {
        parse_draft(draft)
    }

    /// Set an attribute, or remove it when `value` is `None`.
    ///
    /// Name and value are sanitized.
    pub fn add_attribute(&mut self, name: &str, value: Option<&str>) {
        let name = sanitize(name);
        match value {
            Some(value) => {
                self.attrs.insert(name, sanitize(value));
            }
            None => {
                self.attrs.remove(&name);
            }
        }
    }

    /// Append a sentence of body text. Empty text is ignored.
    pub fn add_text(&mut self, text: &str) {
        let text = sanitize(text);
        if !text.is_empty() {
            self.texts.push(text);
        }
    }

    /// Append a sentence of hidden text. Empty text is ignored.
    ///
    /// Hidden text is searchable but never shown in snippets.
    pub fn add_hidden_text(&mut self, text: &str) {
        let text = sanitize(text);
        if !text.is_empty() {
            self.hidden_texts.push(text);
        }
    }

    /// Attach a keyword vector.
    pub fn set_keywords(&mut self, keywords: KeywordMap) {
        self.keywords = Some(keywords);
    }

    /// Substitute the document score.
    pub fn set_score(&mut self, score: i64) {
        self.score = Some(score);
    }

    /// Document ID from the `@id` attribute, if the node assigned one.
    pub fn id(&self) -> Option<i64> {
        self.attrs
            .get(markers::ID_ATTR)
            .and_then(|id| id.parse().ok())
    }

    /// Document URI from the `@uri` attribute.
    pub fn uri(&self) -> Option<&str> {
        self.attribute(markers::URI_ATTR)
    }

    /// Attribute names, sorted.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attrs.keys().map(String::as_str).collect()
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// All attributes, sorted by name.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    /// Body text sentences.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Hidden text sentences.
    pub fn hidden_texts(&self) -> &[String] {
        &self.hidden_texts
    }

    /// Body text sentences joined by single spaces.
    pub fn cat_texts(&self) -> String {
        self.texts.join(" ")
    }

    /// Keyword vector, if attached.
    pub fn keywords(&self) -> Option<&KeywordMap> {
        self.keywords.as_ref()
    }

    /// Substitute score, if set.
    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// Serialize to draft text.
    pub fn dump_draft(&self) -> String {
        dump_draft(self)
    }
}
