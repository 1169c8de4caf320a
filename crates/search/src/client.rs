//! Search client abstraction and result types.

use concierge_core::AppResult;
use serde::{Deserialize, Serialize};

/// A single web-search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Result URL
    pub url: String,

    /// Result page title
    #[serde(default)]
    pub title: String,

    /// Content snippet extracted by the provider
    pub content: String,
}

impl SearchResult {
    /// Create a new search result.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Trait for web-search providers.
#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Get the provider name (e.g., "tavily").
    fn provider_name(&self) -> &str;

    /// Run a web search and return ranked results.
    ///
    /// # Arguments
    /// * `query` - The search query
    /// * `max_results` - Maximum number of results to return
    async fn search(&self, query: &str, max_results: usize) -> AppResult<Vec<SearchResult>>;
}
