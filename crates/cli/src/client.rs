//! HTTP client for the Concierge backend.

use concierge_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout for health probes.
const HEALTH_TIMEOUT_SECS: u64 = 3;

/// Timeout for chat requests; generous because a request spans several
/// upstream LLM calls.
const CHAT_TIMEOUT_SECS: u64 = 30;

/// Chat request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// Chat response body from the backend.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub query: String,
    pub decision: String,
    pub result: String,
    pub sources: Vec<String>,
    pub status: String,
}

/// Health check response from the backend.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Client for the Concierge HTTP API.
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a new client for the given backend URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check whether the backend is reachable and healthy.
    pub async fn health(&self) -> AppResult<HealthResponse> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| AppError::Other(format!("Backend unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Other(format!(
                "Backend health check failed with status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Other(format!("Invalid health response: {}", e)))
    }

    /// Send a query to the backend and return the agent's answer.
    pub async fn chat(&self, query: &str) -> AppResult<ChatResponse> {
        let url = format!("{}/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(CHAT_TIMEOUT_SECS))
            .json(&ChatRequest { query })
            .send()
            .await
            .map_err(|e| AppError::Other(format!("Failed to reach backend: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "no detail".to_string());
            return Err(AppError::Other(format!(
                "Backend returned {}: {}",
                status, detail
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Other(format!("Invalid chat response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");

        let client = BackendClient::new("http://localhost:8000");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_chat_response_parsing() {
        let json = r#"{
            "query": "What is FastAPI?",
            "decision": "rag_search",
            "result": "FastAPI is a web framework.",
            "sources": ["fastapi_docs.txt"],
            "status": "success"
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.decision, "rag_search");
        assert_eq!(parsed.sources.len(), 1);
        assert_eq!(parsed.status, "success");
    }
}
