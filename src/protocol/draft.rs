//! Draft document text format.
//!
//! ```text
//! @uri=http://example.com/a      <- attribute lines, name=value
//! @title=Example
//! %VECTOR\tfoo\t12\tbar\t7       <- optional keyword vector
//! %SCORE\t40                     <- optional score
//!                                <- blank line ends the header
//! Body text line.                <- body text
//! \tHidden text line.            <- tab prefix marks hidden text
//! ```
//!
//! The same format travels in both directions: `/put_doc` and `/edit_doc`
//! bodies, and `/get_doc` responses.

use super::constants::markers;
use crate::client::sanitize;
use crate::types::{Document, KeywordMap};
use std::fmt::Write;

/// Parse draft text into a [`Document`].
///
/// Never fails: unknown `%` lines, attribute lines without a name and
/// unparsable scores are skipped.
///
/// # Examples
///
/// ```
/// use estraier_http::protocol::parse_draft;
///
/// let doc = parse_draft("@uri=http://a\n%VECTOR\tfoo\t3\n\nHello.\n\tsecret\n");
/// assert_eq!(doc.uri(), Some("http://a"));
/// assert_eq!(doc.texts(), &["Hello.".to_string()]);
/// assert_eq!(doc.hidden_texts(), &["secret".to_string()]);
/// assert_eq!(doc.keywords().unwrap()["foo"], 3.0);
/// ```
pub fn parse_draft(draft: &str) -> Document {
    let mut doc = Document::new();
    if draft.is_empty() {
        return doc;
    }

    let mut lines = draft.split('\n');

    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }
        if line.starts_with('%') {
            if line.starts_with(&format!("{}\t", markers::VECTOR)) {
                doc.keywords = Some(parse_vector_fields(line));
            } else if let Some(score) = line.strip_prefix(&format!("{}\t", markers::SCORE)) {
                if let Ok(score) = score.split('\t').next().unwrap_or_default().trim().parse() {
                    doc.score = Some(score);
                }
            }
            continue;
        }
        let line = sanitize(line);
        if let Some((key, value)) = split_attribute(&line) {
            doc.attrs.insert(key.to_string(), value.to_string());
        }
    }

    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some(hidden) = line.strip_prefix('\t') {
            if !hidden.is_empty() {
                doc.hidden_texts.push(hidden.to_string());
            }
        } else {
            doc.texts.push(line.to_string());
        }
    }

    doc
}

/// Serialize a [`Document`] to draft text.
///
/// Attributes come out sorted by name.
pub fn dump_draft(doc: &Document) -> String {
    let mut buf = String::new();

    for (name, value) in &doc.attrs {
        let _ = writeln!(buf, "{}={}", name, value);
    }
    if let Some(keywords) = doc.keywords.as_ref().filter(|k| !k.is_empty()) {
        buf.push_str(markers::VECTOR);
        for (key, score) in keywords {
            let _ = write!(buf, "\t{}\t{}", key, score);
        }
        buf.push('\n');
    }
    if let Some(score) = doc.score {
        let _ = writeln!(buf, "{}\t{}", markers::SCORE, score);
    }
    buf.push('\n');
    for text in &doc.texts {
        buf.push_str(text);
        buf.push('\n');
    }
    for text in &doc.hidden_texts {
        buf.push('\t');
        buf.push_str(text);
        buf.push('\n');
    }

    buf
}

/// Parse `keyword\tscore` lines, as returned by `/etch_doc`.
///
/// Lines without a tab, lines starting with a tab and unparsable scores are
/// skipped.
///
/// ```
/// use estraier_http::protocol::parse_keyword_lines;
///
/// let kw = parse_keyword_lines("rust\t120\nlang\t80\n\tstray\nnoise\n");
/// assert_eq!(kw.len(), 2);
/// assert_eq!(kw["rust"], 120.0);
/// ```
pub fn parse_keyword_lines(body: &str) -> KeywordMap {
    let mut keywords = KeywordMap::new();
    for line in body.split('\n') {
        let mut fields = line.split('\t');
        let (Some(key), Some(score)) = (fields.next(), fields.next()) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        if let Ok(score) = score.trim().parse::<f64>() {
            keywords.insert(key.to_string(), score);
        }
    }
    keywords
}

/// Split `name=value` on the first `=`; a leading `=` means no name.
pub(crate) fn split_attribute(line: &str) -> Option<(&str, &str)> {
    match line.find('=') {
        Some(pos) if pos > 0 => Some((&line[..pos], &line[pos + 1..])),
        _ => None,
    }
}

/// Keyword map from a `%VECTOR\tkey\tscore...` line.
fn parse_vector_fields(line: &str) -> KeywordMap {
    let fields: Vec<&str> = line.split('\t').skip(1).collect();
    let mut keywords = KeywordMap::new();
    for pair in fields.chunks_exact(2) {
        if let Ok(score) = pair[1].trim().parse::<f64>() {
            keywords.insert(pair[0].to_string(), score);
        }
    }
    keywords
}
