//! Fixed prompts for the router and responders.

/// System instruction for the routing classifier.
///
/// The model must answer with exactly one label from the closed set;
/// anything else is treated as ambiguous and falls back to `rag_search`.
pub const ROUTER_SYSTEM_PROMPT: &str = "\
You are an intelligent router. Analyze the user's question and decide which tool to use:

- 'rag_search': if the question is about Python, FastAPI, LangGraph, ChromaDB, machine learning, or programming concepts
- 'web_search': if the question is about current news, recent events, or general non-technical information

Respond ONLY with 'rag_search' or 'web_search', with no other words.";

/// System instruction for the retrieval responder.
pub const RAG_SYSTEM_PROMPT: &str =
    "You are an AI assistant that answers based only on the provided documents.";

/// System instruction for the web-search responder.
pub const WEB_SYSTEM_PROMPT: &str =
    "You are an AI assistant that synthesizes information from web searches.";

/// Build the router user prompt for a query.
pub fn router_prompt(query: &str) -> String {
    format!("Question: {}", query)
}

/// Build the retrieval user prompt from the context block and query.
pub fn rag_prompt(context: &str, query: &str) -> String {
    format!(
        "Use the following documents to answer the question.\n\
         If the answer is not in the documents, say so clearly.\n\n\
         DOCUMENTS:\n{}\n\nQUESTION: {}\n\nANSWER:",
        context, query
    )
}

/// Build the web-search user prompt from the context block and query.
pub fn web_prompt(context: &str, query: &str) -> String {
    format!(
        "Use the following web search results to answer the question.\n\n\
         WEB RESULTS:\n{}\n\nQUESTION: {}\n\n\
         ANSWER (synthesize the information clearly):",
        context, query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_prompt_includes_query() {
        let prompt = router_prompt("What is FastAPI?");
        assert!(prompt.contains("What is FastAPI?"));
    }

    #[test]
    fn test_rag_prompt_structure() {
        let prompt = rag_prompt("doc one\n\ndoc two", "What is FastAPI?");
        assert!(prompt.contains("DOCUMENTS:\ndoc one\n\ndoc two"));
        assert!(prompt.contains("QUESTION: What is FastAPI?"));
    }

    #[test]
    fn test_web_prompt_structure() {
        let prompt = web_prompt("Source: https://a.example\nsnippet", "latest AI news");
        assert!(prompt.contains("WEB RESULTS:"));
        assert!(prompt.contains("QUESTION: latest AI news"));
    }
}
