//! Fixed sample corpus for the document store.
//!
//! The store has no persistence layer; these documents are re-ingested on
//! every process start.

use crate::store::SourceDocument;

/// The fixed document set the retrieval path answers from.
pub fn sample_documents() -> Vec<SourceDocument> {
    vec![
        SourceDocument::new(
            "Python is a high-level, interpreted, general-purpose programming language. \
             It is known for its clear and readable syntax, which emphasizes code readability.",
            "python_intro.txt",
        ),
        SourceDocument::new(
            "FastAPI is a modern, fast web framework for building APIs with Python 3.7+. \
             It is based on standards like OpenAPI and JSON Schema, and offers automatic \
             data validation.",
            "fastapi_docs.txt",
        ),
        SourceDocument::new(
            "LangGraph is a framework for building agents and multi-agent applications \
             with LLMs. It allows creating stateful graphs with cycles, conditions, and \
             state persistence.",
            "langgraph_guide.txt",
        ),
        SourceDocument::new(
            "Machine learning is a field of artificial intelligence that focuses on \
             building systems that learn from data and improve their performance over time.",
            "ml_basics.txt",
        ),
        SourceDocument::new(
            "ChromaDB is an open-source vector database designed for AI applications. \
             It supports embeddings and similarity search, making it ideal for RAG systems.",
            "chroma_overview.txt",
        ),
    ]
}
