//! HTTP request handlers for the Concierge API.
//!
//! Implements the chat and health check endpoints using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use concierge_agent::{Agent, Decision};
use concierge_core::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum accepted query length in characters.
const MAX_QUERY_CHARS: usize = 1000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The query-routing agent
    pub agent: Arc<Agent>,
}

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's question (1-1000 characters)
    pub query: String,
}

/// Chat response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The original query
    pub query: String,

    /// The tool the agent chose (rag_search or web_search)
    pub decision: Decision,

    /// The generated answer
    pub result: String,

    /// The sources used to generate the answer
    pub sources: Vec<String>,

    /// Request status
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Descriptive message
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// API-level error type
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation
    Validation(String),
    /// Unhandled processing failure
    Internal(AppError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", e),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError::Internal(e)
    }
}

/// GET / - Root endpoint, confirms the API is up
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        message: "Concierge API is running.".to_string(),
    })
}

/// GET /health - Health check endpoint for monitoring
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "All systems operational".to_string(),
    })
}

/// POST /chat - Process a user query through the agent
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let query_chars = request.query.chars().count();
    if query_chars == 0 || query_chars > MAX_QUERY_CHARS {
        return Err(ApiError::Validation(format!(
            "query must be between 1 and {} characters (got {})",
            MAX_QUERY_CHARS, query_chars
        )));
    }

    tracing::info!("Received chat query");

    let outcome = state.agent.run(&request.query).await?;

    tracing::info!(decision = %outcome.decision, "Agent completed");

    Ok(Json(ChatResponse {
        query: outcome.query,
        decision: outcome.decision,
        result: outcome.result,
        sources: outcome.sources,
        status: "success".to_string(),
    }))
}

/// Create the axum router with all routes and middleware layers
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use concierge_core::{AppError, AppResult};
    use concierge_knowledge::embeddings::providers::HashingProvider;
    use concierge_knowledge::{corpus, DocumentStore};
    use concierge_llm::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
    use concierge_search::{SearchClient, SearchResult};
    use std::sync::Mutex;
    use tower::ServiceExt; // for oneshot

    struct ScriptedLlm {
        responses: Mutex<Vec<String>>,
    }

    impl ScriptedLlm {
        fn new(responses: &[&str]) -> Arc<Self> {
            let mut responses: Vec<String> = responses.iter().map(|s| s.to_string()).collect();
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
            })
        }
    }

    #[async_trait::async_trait]
    impl LlmClient for ScriptedLlm {
        fn provider_name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, _request: &LlmRequest) -> AppResult<LlmResponse> {
            let content = self
                .responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| AppError::Llm("Script exhausted".to_string()))?;

            Ok(LlmResponse {
                content,
                model: "scripted".to_string(),
                usage: LlmUsage::default(),
            })
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

    async fn test_state(llm_responses: &[&str]) -> AppState {
        let embedder = Arc::new(HashingProvider::new(384));
        let store = Arc::new(
            DocumentStore::build(&corpus::sample_documents(), embedder)
                .await
                .unwrap(),
        );
        let llm = ScriptedLlm::new(llm_responses);
        let search = Arc::new(StaticSearch(vec![SearchResult::new(
            "https://news.example/ai",
            "AI News",
            "snippet",
        )]));

        AppState {
            agent: Arc::new(Agent::new(llm, store, search, "scripted-model")),
        }
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root() {
        let app = create_router(test_state(&[]).await);

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: HealthResponse = response_json(response).await;
        assert_eq!(body.status, "online");
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(test_state(&[]).await);

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: HealthResponse = response_json(response).await;
        assert_eq!(body.status, "healthy");
    }

    #[tokio::test]
    async fn test_chat_rag_path() {
        let state = test_state(&["rag_search", "FastAPI is a web framework."]).await;
        let app = create_router(state);

        let response = app
            .oneshot(chat_request(r#"{"query": "What is FastAPI?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ChatResponse = response_json(response).await;
        assert_eq!(body.status, "success");
        assert_eq!(body.decision, Decision::RagSearch);
        assert_eq!(body.query, "What is FastAPI?");
        assert!(body.sources.contains(&"fastapi_docs.txt".to_string()));
    }

    #[tokio::test]
    async fn test_chat_web_path() {
        let state = test_state(&["web_search", "Latest news synthesis."]).await;
        let app = create_router(state);

        let response = app
            .oneshot(chat_request(r#"{"query": "latest AI news"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ChatResponse = response_json(response).await;
        assert_eq!(body.decision, Decision::WebSearch);
        assert_eq!(body.sources, vec!["https://news.example/ai".to_string()]);
    }

    #[tokio::test]
    async fn test_chat_empty_query_rejected() {
        let app = create_router(test_state(&[]).await);

        let response = app.oneshot(chat_request(r#"{"query": ""}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response_json(response).await;
        assert!(body.error.contains("between 1 and 1000"));
    }

    #[tokio::test]
    async fn test_chat_oversized_query_rejected() {
        let app = create_router(test_state(&[]).await);

        let long_query = "x".repeat(1001);
        let body = serde_json::json!({ "query": long_query }).to_string();
        let response = app.oneshot(chat_request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_chat_internal_failure_maps_to_500() {
        // Empty script: the classifier call fails and propagates
        let app = create_router(test_state(&[]).await);

        let response = app
            .oneshot(chat_request(r#"{"query": "any question"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_json(response).await;
        assert!(body.error.contains("Internal server error"));
    }
}
