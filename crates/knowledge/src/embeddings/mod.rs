//! Embedding providers for the document store.

pub mod provider;
pub mod providers;

pub use provider::{create_provider, EmbeddingConfig, EmbeddingProvider};
