//! Search condition to form-encoded query string.
//!
//! Field order is fixed:
//!
//! | Field | Presence |
//! |-------|----------|
//! | `phrase` | when set and non-empty |
//! | `attrs1..N` | one per attribute expression |
//! | `order` | when set and non-empty |
//! | `max` | always; unlimited is sent as `2^30` |
//! | `options` | when non-zero |
//! | `auxiliary` | always |
//! | `distinct` | when set and non-empty |
//! | `depth` | when positive |
//! | `wwidth`, `hwidth`, `awidth` | always |
//! | `skip` | always |
//! | `mask` | always |

use super::constants::UNLIMITED_MAX;
use crate::types::Condition;
use url::form_urlencoded;

/// Snippet widths sent with every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetWidth {
    /// Whole snippet width; zero or less omits snippets
    pub whole: i32,
    /// Width of the document head shown
    pub head: i32,
    /// Width around each highlighted word
    pub around: i32,
}

/// Encode a condition into the body of a `/search` request.
///
/// # Examples
///
/// ```
/// use estraier_http::Condition;
/// use estraier_http::protocol::{encode_condition, SnippetWidth};
///
/// let cond = Condition::new().with_phrase("rust lang").with_max(10);
/// let width = SnippetWidth { whole: 480, head: 96, around: 96 };
/// assert_eq!(
///     encode_condition(&cond, 0, width),
///     "phrase=rust+lang&max=10&auxiliary=32&wwidth=480&hwidth=96&awidth=96&skip=0&mask=0"
/// );
/// ```
pub fn encode_condition(cond: &Condition, depth: i32, width: SnippetWidth) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let Some(phrase) = cond.phrase().filter(|p| !p.is_empty()) {
        query.append_pair("phrase", phrase);
    }
    for (i, attr) in cond.attributes().iter().enumerate() {
        query.append_pair(&format!("attrs{}", i + 1), attr);
    }
    if let Some(order) = cond.order().filter(|o| !o.is_empty()) {
        query.append_pair("order", order);
    }

    let max = if cond.max() >= 0 { cond.max() } else { UNLIMITED_MAX };
    query.append_pair("max", &max.to_string());

    if !cond.options().is_empty() {
        query.append_pair("options", &cond.options().to_string());
    }
    query.append_pair("auxiliary", &cond.auxiliary().to_string());
    if let Some(distinct) = cond.distinct().filter(|d| !d.is_empty()) {
        query.append_pair("distinct", distinct);
    }
    if depth > 0 {
        query.append_pair("depth", &depth.to_string());
    }

    query.append_pair("wwidth", &width.whole.to_string());
    query.append_pair("hwidth", &width.head.to_string());
    query.append_pair("awidth", &width.around.to_string());
    query.append_pair("skip", &cond.skip().to_string());
    query.append_pair("mask", &cond.mask().to_string());

    query.finish()
}
