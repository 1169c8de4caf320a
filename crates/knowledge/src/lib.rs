//! Document store and embedding support for the Concierge service.
//!
//! Provides an in-memory, embedding-backed passage store built once at
//! startup from a fixed corpus. The store is read-only after construction
//! and safe to share across requests behind an `Arc`.

pub mod chunker;
pub mod corpus;
pub mod embeddings;
pub mod store;

// Re-export commonly used types
pub use embeddings::{create_provider, EmbeddingConfig, EmbeddingProvider};
pub use store::{DocumentStore, Passage, SourceDocument};
