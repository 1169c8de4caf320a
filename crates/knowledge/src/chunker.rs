//! Text chunking for document ingestion.
//!
//! Splits source documents into overlapping chunks before embedding,
//! using the text-splitter crate for boundary-aware splitting.

use concierge_core::{AppError, AppResult};
use text_splitter::{ChunkConfig, TextSplitter};

/// Maximum chunk length in characters.
pub const MAX_CHUNK_CHARS: usize = 500;

/// Overlap between consecutive chunks in characters.
pub const CHUNK_OVERLAP_CHARS: usize = 50;

/// Split text into overlapping chunks.
///
/// Empty or whitespace-only chunks are dropped. Documents shorter than
/// `max_chars` come back as a single chunk.
pub fn split(text: &str, max_chars: usize, overlap: usize) -> AppResult<Vec<String>> {
    let config = ChunkConfig::new(max_chars)
        .with_overlap(overlap)
        .map_err(|e| AppError::Knowledge(format!("Invalid chunk configuration: {}", e)))?;

    let splitter = TextSplitter::new(config);

    let chunks: Vec<String> = splitter
        .chunks(text)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| chunk.to_string())
        .collect();

    tracing::debug!(
        "Split {} bytes of text into {} chunks",
        text.len(),
        chunks.len()
    );

    Ok(chunks)
}

/// Split text using the default chunk size and overlap.
pub fn split_default(text: &str) -> AppResult<Vec<String>> {
    split(text, MAX_CHUNK_CHARS, CHUNK_OVERLAP_CHARS)
}
