//! Per-query state types.

use serde::{Deserialize, Serialize};

/// The routing decision for a query.
///
/// Serializes as the literal labels `"rag_search"` / `"web_search"` used
/// in the router prompt and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Answer from the local document store
    RagSearch,

    /// Answer from live web search
    WebSearch,
}

impl Decision {
    /// The literal label for this decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RagSearch => "rag_search",
            Self::WebSearch => "web_search",
        }
    }

    /// Parse a normalized (trimmed, lowercased) label.
    ///
    /// Anything outside the closed label set returns `None`; callers decide
    /// the fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rag_search" => Some(Self::RagSearch),
            "web_search" => Some(Self::WebSearch),
            _ => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flat result record for one agent run.
///
/// The decision is set once by the router and never altered downstream;
/// the answer and sources are populated exactly once by the chosen
/// responder. The record is owned by a single request and discarded after
/// the response is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentOutcome {
    /// The original query text
    pub query: String,

    /// Which responder handled the query
    pub decision: Decision,

    /// The generated answer
    pub result: String,

    /// Provenance labels (document ids or URLs), in retrieval order
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_labels() {
        assert_eq!(Decision::RagSearch.as_str(), "rag_search");
        assert_eq!(Decision::WebSearch.as_str(), "web_search");
    }

    #[test]
    fn test_decision_parse() {
        assert_eq!(Decision::parse("rag_search"), Some(Decision::RagSearch));
        assert_eq!(Decision::parse("web_search"), Some(Decision::WebSearch));
        assert_eq!(Decision::parse("maybe"), None);
        assert_eq!(Decision::parse(""), None);
        // parse expects pre-normalized input
        assert_eq!(Decision::parse("RAG_SEARCH "), None);
    }

    #[test]
    fn test_decision_serializes_as_label() {
        let json = serde_json::to_string(&Decision::WebSearch).unwrap();
        assert_eq!(json, "\"web_search\"");
    }

    #[test]
    fn test_outcome_round_trip() {
        let outcome = AgentOutcome {
            query: "What is FastAPI?".to_string(),
            decision: Decision::RagSearch,
            result: "FastAPI is a web framework.".to_string(),
            sources: vec!["fastapi_docs.txt".to_string()],
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let parsed: AgentOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.decision, Decision::RagSearch);
        assert_eq!(parsed.sources, outcome.sources);
    }
}
