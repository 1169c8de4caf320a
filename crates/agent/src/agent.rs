//! Query orchestration.
//!
//! Owns the injected clients and runs the single-pass flow:
//! classify, dispatch to one responder, collect the outcome.

use crate::responders::{rag, web};
use crate::router;
use crate::state::{AgentOutcome, Decision};
use concierge_core::AppResult;
use concierge_knowledge::DocumentStore;
use concierge_llm::LlmClient;
use concierge_search::SearchClient;
use std::sync::Arc;

/// The query-routing agent.
///
/// Constructed once at process start with its collaborators injected;
/// shared across requests behind an `Arc`. Holds no per-request state.
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    store: Arc<DocumentStore>,
    search: Arc<dyn SearchClient>,
    model: String,
}

impl Agent {
    /// Create a new agent with its collaborators.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        store: Arc<DocumentStore>,
        search: Arc<dyn SearchClient>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            llm,
            store,
            search,
            model: model.into(),
        }
    }

    /// Process one query end to end.
    ///
    /// Routes the query, invokes exactly one responder, and returns the
    /// composed record. Single pass: no step re-enters the router, no
    /// responder runs twice, and the decision is never altered after the
    /// router sets it.
    pub async fn run(&self, query: &str) -> AppResult<AgentOutcome> {
        tracing::info!("Processing query");

        let decision = router::classify(self.llm.as_ref(), &self.model, query).await?;

        let (result, sources) = match decision {
            Decision::RagSearch => {
                rag::answer(self.llm.as_ref(), &self.model, &self.store, query).await?
            }
            Decision::WebSearch => {
                web::answer(self.llm.as_ref(), &self.model, self.search.as_ref(), query).await
            }
        };

        tracing::info!(
            decision = %decision,
            sources = sources.len(),
            "Query processed"
        );

        Ok(AgentOutcome {
            query: query.to_string(),
            decision,
            result,
            sources,
        })
    }
}
