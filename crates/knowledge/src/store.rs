//! In-memory document store with embedding-similarity search.
//!
//! The store is populated once at startup: each source document is split
//! into overlapping chunks, every chunk is embedded, and the chunk vectors
//! are held in memory for cosine-similarity ranking. There is no update or
//! delete operation; the store is read-only for its entire lifetime.

use crate::chunker;
use crate::embeddings::EmbeddingProvider;
use concierge_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A source document to ingest: raw text plus a provenance label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Full document text
    pub text: String,

    /// Provenance label (e.g., "fastapi_docs.txt")
    pub source: String,
}

impl SourceDocument {
    /// Create a new source document.
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// A stored text passage with provenance metadata.
///
/// Passages are created once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passage {
    /// Chunk text body
    pub text: String,

    /// Provenance label inherited from the source document
    pub source: String,
}

/// A passage paired with its embedding vector.
#[derive(Debug, Clone)]
struct StoredChunk {
    passage: Passage,
    embedding: Vec<f32>,
}

/// In-memory document store with similarity search.
///
/// Safe for concurrent reads; never mutated after construction.
pub struct DocumentStore {
    chunks: Vec<StoredChunk>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl DocumentStore {
    /// Build the store from a set of source documents.
    ///
    /// Each document is chunked (500 chars, 50 overlap) and every chunk is
    /// embedded in a single batch. If the embedding provider is unreachable,
    /// the build fails — callers treat this as fatal at startup, no retry.
    pub async fn build(
        documents: &[SourceDocument],
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> AppResult<Self> {
        let mut passages = Vec::new();

        for document in documents {
            let chunks = chunker::split_default(&document.text)?;
            for chunk in chunks {
                passages.push(Passage {
                    text: chunk,
                    source: document.source.clone(),
                });
            }
        }

        tracing::info!(
            "Embedding {} chunks from {} documents via {} ({})",
            passages.len(),
            documents.len(),
            embedder.provider_name(),
            embedder.model_name()
        );

        let texts: Vec<String> = passages.iter().map(|p| p.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        if embeddings.len() != passages.len() {
            return Err(AppError::Knowledge(format!(
                "Embedding count mismatch: {} passages, {} vectors",
                passages.len(),
                embeddings.len()
            )));
        }

        let chunks = passages
            .into_iter()
            .zip(embeddings)
            .map(|(passage, embedding)| StoredChunk { passage, embedding })
            .collect();

        Ok(Self { chunks, embedder })
    }

    /// Search for the top-k passages most similar to the query.
    ///
    /// Returns up to `k` passages ranked by cosine similarity descending;
    /// ties broken arbitrarily.
    pub async fn search(&self, query: &str, k: usize) -> AppResult<Vec<Passage>> {
        if self.chunks.is_empty() || k == 0 {
            return Ok(vec![]);
        }

        let query_embedding = self.embedder.embed(query).await?;

        let mut scored: Vec<(f32, &Passage)> = self
            .chunks
            .iter()
            .map(|chunk| {
                let score = cosine_similarity(&query_embedding, &chunk.embedding);
                (score, &chunk.passage)
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        tracing::debug!(
            "Retrieved {} passages (top score: {:.3})",
            scored.len(),
            scored.first().map(|(score, _)| *score).unwrap_or(0.0)
        );

        Ok(scored.into_iter().map(|(_, p)| p.clone()).collect())
    }

    /// Number of stored chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the store holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for zero-length or mismatched vectors.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
