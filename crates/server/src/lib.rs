//! Concierge HTTP server.
//!
//! Wires the agent and its collaborators together at startup and exposes
//! them over the HTTP API defined in `handlers`.

pub mod handlers;

use concierge_agent::Agent;
use concierge_core::{AppConfig, AppError, AppResult};
use concierge_knowledge::{corpus, create_provider, DocumentStore, EmbeddingConfig};
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Build the agent and its injected collaborators from configuration.
///
/// Constructs the LLM client, the embedding provider, the document store
/// (ingesting the fixed corpus), and the web-search client. A failure to
/// embed the corpus — for example an unreachable embedding provider — is
/// returned as an error and treated as fatal by the caller; there is no
/// retry.
pub async fn build_agent(config: &AppConfig) -> AppResult<Agent> {
    let llm = concierge_llm::create_client(
        &config.provider,
        config.endpoint.as_deref(),
        config.openai_api_key.as_deref(),
    )?;

    let embedding_config = EmbeddingConfig {
        provider: config.embedding_provider.clone(),
        model: config.embedding_model.clone(),
        dimensions: config.embedding_dimensions,
    };
    let embedder = create_provider(&embedding_config, config.openai_api_key.as_deref())?;

    info!("Building document store from the sample corpus");
    let store = DocumentStore::build(&corpus::sample_documents(), embedder).await?;
    info!("Document store ready with {} chunks", store.len());

    let tavily_key = config
        .tavily_api_key
        .as_deref()
        .ok_or_else(|| AppError::Config("TAVILY_API_KEY not set in environment".to_string()))?;
    let search = Arc::new(concierge_search::TavilyClient::new(tavily_key));

    Ok(Agent::new(llm, Arc::new(store), search, &config.model))
}

/// Start the HTTP server.
///
/// Binds the configured address and serves until the process exits.
pub async fn start_server(config: &AppConfig, agent: Arc<Agent>) -> AppResult<()> {
    let state = AppState { agent };
    let app = create_router(state);

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Concierge API listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Other(format!("Server error: {}", e)))?;

    Ok(())
}
