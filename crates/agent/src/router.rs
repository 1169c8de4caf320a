//! LLM-based query routing.
//!
//! Classifies a query into one of two categories with a single
//! temperature-0 completion against a closed label set.

use crate::prompts;
use crate::state::Decision;
use concierge_core::AppResult;
use concierge_llm::{LlmClient, LlmRequest};

/// Classify a query as a document question or a web question.
///
/// The model's output is normalized (trim, lowercase) and validated
/// against the label set. Any other output — partial matches, extra words,
/// empty output — silently maps to `Decision::RagSearch`. A transport
/// failure propagates to the caller.
pub async fn classify(llm: &dyn LlmClient, model: &str, query: &str) -> AppResult<Decision> {
    let request = LlmRequest::new(prompts::router_prompt(query), model)
        .with_system(prompts::ROUTER_SYSTEM_PROMPT)
        .with_temperature(0.0);

    let response = llm.complete(&request).await?;
    let normalized = response.content.trim().to_lowercase();

    let decision = match Decision::parse(&normalized) {
        Some(decision) => decision,
        None => {
            tracing::debug!(
                output = %normalized,
                "Classifier output outside label set, defaulting to rag_search"
            );
            Decision::RagSearch
        }
    };

    tracing::info!(decision = %decision, "Routed query");

    Ok(decision)
}
