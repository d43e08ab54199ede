//! Wire formats of the node protocol.
//!
//! | Module | Format |
//! |--------|--------|
//! | [`constants`] | Endpoint paths, content types, markers |
//! | `query` | Search condition to form-encoded body |
//! | `draft` | Draft document text, `/etch_doc` keyword lines |
//! | `inform` | `/inform` node information body |
//! | `headers` | `Authorization` and `User-Agent` values |
//!
//! The search response format is handled by the client's
//! [`SearchResponseParser`](crate::client::SearchResponseParser).

pub mod constants;
mod draft;
mod headers;
mod inform;
mod query;

pub use draft::{dump_draft, parse_draft, parse_keyword_lines};
pub(crate) use draft::split_attribute;
pub use headers::{format_basic_auth, user_agent};
pub use inform::parse_node_info;
pub use query::{encode_condition, SnippetWidth};
