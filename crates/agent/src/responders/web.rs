//! Web-search responder.
//!
//! Answers a query by synthesizing web-search result snippets. Failures in
//! this path are converted into a normal answer describing the error — the
//! responder itself never fails.

use crate::prompts;
use concierge_core::AppResult;
use concierge_llm::{LlmClient, LlmRequest};
use concierge_search::SearchClient;

/// Maximum number of web results per query.
const MAX_RESULTS: usize = 3;

/// Generate an answer from live web search.
///
/// On success the sources are the result URLs in provider order. On any
/// failure — provider transport, quota, malformed response, or the
/// synthesis call itself — the answer text documents the error and the
/// source list is empty; the error is not re-raised.
pub async fn answer(
    llm: &dyn LlmClient,
    model: &str,
    search: &dyn SearchClient,
    query: &str,
) -> (String, Vec<String>) {
    match synthesize(llm, model, search, query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("Web search path failed, answering with error text: {}", e);
            (format!("Error during web search: {}", e), vec![])
        }
    }
}

/// The fallible part of the web-search path.
async fn synthesize(
    llm: &dyn LlmClient,
    model: &str,
    search: &dyn SearchClient,
    query: &str,
) -> AppResult<(String, Vec<String>)> {
    let results = search.search(query, MAX_RESULTS).await?;

    tracing::debug!("Synthesizing answer from {} web results", results.len());

    let context = results
        .iter()
        .map(|result| format!("Source: {}\n{}", result.url, result.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    let request = LlmRequest::new(prompts::web_prompt(&context, query), model)
        .with_system(prompts::WEB_SYSTEM_PROMPT);

    let response = llm.complete(&request).await?;

    let sources = results.into_iter().map(|result| result.url).collect();

    Ok((response.content, sources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::{AppError, AppResult};
    use concierge_llm::{LlmResponse, LlmUsage};
    use concierge_search::SearchResult;

    struct FixedLlm(&'static str);

    #[async_trait::async_trait]
    impl LlmClient for FixedLlm {
        fn provider_name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _request: &LlmRequest) -> AppResult<LlmResponse> {
            Ok(LlmResponse {
                content: self.0.to_string(),
                model: "fixed".to_string(),
                usage: LlmUsage::default(),
            })
        }
    }

    struct FailingLlm;

    #[async_trait::async_trait]
    impl LlmClient for FailingLlm {
        fn provider_name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: &LlmRequest) -> AppResult<LlmResponse> {
            Err(AppError::Llm("connection refused".to_string()))
        }
    }

    struct StaticSearch(Vec<SearchResult>);

    #[async_trait::async_trait]
    impl SearchClient for StaticSearch {
        fn provider_name(&self) -> &str {
            "static"
        }

        async fn search(&self, _query: &str, max_results: usize) -> AppResult<Vec<SearchResult>> {
            Ok(self.0.iter().take(max_results).cloned().collect())
        }
    }

    struct FailingSearch;

    #[async_trait::async_trait]
    impl SearchClient for FailingSearch {
        fn provider_name(&self) -> &str {
            "failing"
        }

        async fn search(&self, _query: &str, _max_results: usize) -> AppResult<Vec<SearchResult>> {
            Err(AppError::Search("quota exceeded".to_string()))
        }
    }

    fn two_results() -> Vec<SearchResult> {
        vec![
            SearchResult::new("https://news.example/ai", "AI News", "First snippet"),
            SearchResult::new("https://blog.example/llm", "LLM Blog", "Second snippet"),
        ]
    }

    #[tokio::test]
    async fn test_sources_are_urls_in_order() {
        let llm = FixedLlm("Here is a synthesis of the news.");
        let search = StaticSearch(two_results());

        let (result, sources) = answer(&llm, "test", &search, "latest AI news").await;

        assert_eq!(result, "Here is a synthesis of the news.");
        assert_eq!(
            sources,
            vec![
                "https://news.example/ai".to_string(),
                "https://blog.example/llm".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_answer() {
        let llm = FixedLlm("unused");
        let (result, sources) = answer(&llm, "test", &FailingSearch, "latest AI news").await;

        assert!(!result.is_empty());
        assert!(result.contains("quota exceeded"));
        assert!(sources.is_empty());
    }

    #[tokio::test]
    async fn test_llm_failure_becomes_answer() {
        let search = StaticSearch(two_results());
        let (result, sources) = answer(&FailingLlm, "test", &search, "latest AI news").await;

        assert!(result.contains("connection refused"));
        assert!(sources.is_empty());
    }

    #[tokio::test]
    async fn test_no_results_still_answers() {
        let llm = FixedLlm("I could not find anything relevant.");
        let search = StaticSearch(vec![]);

        let (result, sources) = answer(&llm, "test", &search, "obscure query").await;
        assert!(!result.is_empty());
        assert!(sources.is_empty());
    }
}
