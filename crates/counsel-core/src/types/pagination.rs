//! Search and pagination parameters for the admin list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size used by the admin listings.
const DEFAULT_LIMIT: u64 = 10;
/// Maximum page size the client will request.
const MAX_LIMIT: u64 = 100;

/// Query parameters for searchable, paginated list endpoints
/// (`?search=...&page=...&limit=...`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Optional case-insensitive search term.
    #[serde(default)]
    pub search: Option<String>,
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl SearchQuery {
    /// Create a new query, clamping the page and limit into valid ranges.
    pub fn new(search: Option<String>, page: u64, limit: u64) -> Self {
        Self {
            search,
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Render the query as URL key/value pairs.
    ///
    /// A missing search term is sent as an empty string, which is what
    /// the backend expects for "no filter".
    pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search", self.search.clone().unwrap_or_default()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        let q = SearchQuery::new(None, 0, 1000);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, MAX_LIMIT);
    }

    #[test]
    fn test_as_pairs() {
        let q = SearchQuery::new(Some("kim".into()), 2, 25);
        let pairs = q.as_pairs();
        assert_eq!(pairs[0], ("search", "kim".to_string()));
        assert_eq!(pairs[1], ("page", "2".to_string()));
        assert_eq!(pairs[2], ("limit", "25".to_string()));
    }
}
