//! Wire constants shared by the client and the format helpers.

/// Endpoint paths, appended to the node URL.
pub mod paths {
    /// Register a document
    pub const PUT_DOC: &str = "/put_doc";
    /// Change attributes of a document
    pub const EDIT_DOC: &str = "/edit_doc";
    /// Remove a document
    pub const OUT_DOC: &str = "/out_doc";
    /// Fetch a document
    pub const GET_DOC: &str = "/get_doc";
    /// Fetch one attribute
    pub const GET_DOC_ATTR: &str = "/get_doc_attr";
    /// Fetch a keyword vector
    pub const ETCH_DOC: &str = "/etch_doc";
    /// Look up a document ID
    pub const URI_TO_ID: &str = "/uri_to_id";
    /// Search
    pub const SEARCH: &str = "/search";
    /// Manage user accounts
    pub const SET_USER: &str = "/_set_user";
    /// Manage node links
    pub const SET_LINK: &str = "/_set_link";
    /// Flush to disk
    pub const SYNC: &str = "/sync";
    /// Optimize the database
    pub const OPTIMIZE: &str = "/optimize";
    /// Cache usage ratio
    pub const CACHE_USAGE: &str = "/cacheusage";
    /// Node information
    pub const INFORM: &str = "/inform";
}

/// Request content types.
pub mod content_types {
    /// Form-encoded request body
    pub const FORM: &str = "application/x-www-form-urlencoded";
    /// Draft document body
    pub const DRAFT: &str = "text/x-estraier-draft";
}

/// Request header names (lowercase).
pub mod headers {
    use http::header::HeaderName;

    /// `content-type`
    pub const CONTENT_TYPE: HeaderName = http::header::CONTENT_TYPE;
    /// `authorization`
    pub const AUTHORIZATION: HeaderName = http::header::AUTHORIZATION;
    /// `user-agent`
    pub const USER_AGENT: HeaderName = http::header::USER_AGENT;
}

/// Markers of the search response and draft formats.
pub mod markers {
    /// Suffix of the boundary line that closes a complete search response.
    pub const END_SUFFIX: &str = ":END";
    /// Prefix of the keyword vector line.
    pub const VECTOR: &str = "%VECTOR";
    /// Prefix of the score line in drafts.
    pub const SCORE: &str = "%SCORE";
    /// Attribute holding the document URI.
    pub const URI_ATTR: &str = "@uri";
    /// Attribute holding the document ID.
    pub const ID_ATTR: &str = "@id";
}

/// `max` sent when a condition asks for unlimited results.
pub const UNLIMITED_MAX: i64 = 1 << 30;

/// Default auxiliary index threshold of a new condition.
pub const DEFAULT_AUXILIARY: i32 = 32;

/// Default whole snippet width.
pub const DEFAULT_WWIDTH: i32 = 480;
/// Default head width of snippets.
pub const DEFAULT_HWIDTH: i32 = 96;
/// Default width around highlighted words.
pub const DEFAULT_AWIDTH: i32 = 96;
