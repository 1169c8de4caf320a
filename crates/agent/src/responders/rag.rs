//! Retrieval responder.
//!
//! Answers a query from the top-k most similar stored passages.

use crate::prompts;
use concierge_core::AppResult;
use concierge_knowledge::DocumentStore;
use concierge_llm::{LlmClient, LlmRequest};

/// Number of passages retrieved per query.
const TOP_K: usize = 3;

/// Generate an answer from the document store.
///
/// Retrieves the top-3 passages, concatenates their bodies into a context
/// block, and asks the model to answer strictly from that context. Sources
/// are the provenance labels of the retrieved passages, in retrieval order;
/// duplicates are kept. Retrieval and LLM failures propagate uncaught.
pub async fn answer(
    llm: &dyn LlmClient,
    model: &str,
    store: &DocumentStore,
    query: &str,
) -> AppResult<(String, Vec<String>)> {
    let passages = store.search(query, TOP_K).await?;

    tracing::debug!("Retrieved {} passages for RAG answer", passages.len());

    let context = passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let request = LlmRequest::new(prompts::rag_prompt(&context, query), model)
        .with_system(prompts::RAG_SYSTEM_PROMPT);

    let response = llm.complete(&request).await?;

    let sources = passages.into_iter().map(|p| p.source).collect();

    Ok((response.content, sources))
}
