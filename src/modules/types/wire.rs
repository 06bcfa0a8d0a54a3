//! Wire type definitions for search requests and responses

use serde::{Deserialize, Serialize};

/// Untrusted query-string parameters of `GET /search`
///
/// Every field is kept as raw text so the service can report its own
/// validation codes instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl SearchParams {
    /// Build from decoded query-string pairs
    ///
    /// The first occurrence of a repeated parameter wins; unknown names are
    /// ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                "query" => &mut params.query,
                "order_field" => &mut params.order_field,
                "order_by" => &mut params.order_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Look up a parameter, treating an empty value as absent
    pub fn get(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|s| !s.is_empty())
    }
}

/// Caller-side search request issued through the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Number of records wanted on the page
    pub limit: i64,
    /// Zero-based offset into the filtered set
    pub offset: i64,
    /// Substring filter; empty means no filtering
    #[serde(default)]
    pub query: String,
    /// Order field name, sent verbatim when present
    #[serde(default)]
    pub order_field: Option<String>,
    /// Order direction, sent verbatim when present
    #[serde(default)]
    pub order_by: Option<i64>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            limit: 1,
            offset: 0,
            query: String::new(),
            order_field: None,
            order_by: None,
        }
    }
}

impl SearchRequest {
    /// Create a request for the first `limit` records
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_order_field(mut self, field: impl Into<String>) -> Self {
        self.order_field = Some(field.into());
        self
    }

    pub fn with_order_by(mut self, direction: i64) -> Self {
        self.order_by = Some(direction);
        self
    }

    /// Encode as query-string pairs, skipping empty and absent values
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if !self.query.is_empty() {
            pairs.push(("query", self.query.clone()));
        }
        if let Some(field) = self.order_field.as_ref().filter(|f| !f.is_empty()) {
            pairs.push(("order_field", field.clone()));
        }
        if let Some(direction) = self.order_by {
            pairs.push(("order_by", direction.to_string()));
        }
        pairs
    }
}

/// Public projection of a record
///
/// First and last name are internal and never leave the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub bio: String,
}

/// Successful search response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Records on this page
    pub users: Vec<User>,
    /// Whether more records exist beyond this page
    pub next_page: bool,
}

/// Structured error body for rejected requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Fixed error code
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self { error: code.into() }
    }
}

/// Fixed error codes carried in [`ErrorResponse`]
pub mod error_codes {
    pub const BAD_LIMIT: &str = "BadLimit";
    pub const BAD_OFFSET: &str = "BadOffset";
    pub const BAD_ORDER_FIELD: &str = "BadOrderField";
    pub const BAD_ORDER_BY: &str = "BadOrderBy";
    pub const UNAUTHORIZED: &str = "Unauthorized";
}

/// `AccessToken` header carrying the service access token
pub const ACCESS_TOKEN_HEADER: &str = "accesstoken";
