//! Hashing embedding provider for tests and offline runs.

use crate::embeddings::provider::EmbeddingProvider;
use concierge_core::AppResult;
use std::collections::HashMap;

/// Deterministic embedding provider with no network dependency.
///
/// Generates embeddings from word and character-trigram hashes. The vectors
/// are not semantically meaningful the way a real embedding model's are, but
/// they are consistent and content-dependent: identical texts embed
/// identically and texts sharing vocabulary land closer together. That is
/// enough for similarity-ranking tests.
#[derive(Debug)]
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    /// Create a new hashing provider with specified dimensions.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Generate an embedding from word and trigram hashes.
    fn generate_embedding(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0; self.dimensions];
        let lower = text.to_lowercase();

        let words: Vec<&str> = lower
            .split_whitespace()
            .filter(|w| w.len() > 2)
            .collect();

        let mut word_freq: HashMap<&str, u32> = HashMap::new();
        for word in &words {
            *word_freq.entry(word).or_insert(0) += 1;
        }

        for (word, freq) in &word_freq {
            // Character trigrams spread each word over several dimensions
            let chars: Vec<char> = word.chars().collect();
            for window in chars.windows(3) {
                let mut hash = 0u64;
                for c in window {
                    hash = hash.wrapping_mul(37).wrapping_add(*c as u64);
                }
                let dim = (hash as usize) % self.dimensions;
                embedding[dim] += (*freq as f32).sqrt();
            }

            // Whole-word hash
            let hash = word
                .bytes()
                .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
            let dim = (hash as usize) % self.dimensions;
            embedding[dim] += *freq as f32;
        }

        // Normalize to unit length
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut embedding {
                *v /= norm;
            }
        }

        embedding
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashingProvider {
    fn provider_name(&self) -> &str {
        "hashing"
    }

    fn model_name(&self) -> &str {
        "hashing-v1"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed_batch(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| self.generate_embedding(text))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::EmbeddingProvider;

    #[tokio::test]
    async fn test_dimensions() {
        let provider = HashingProvider::new(384);
        assert_eq!(provider.dimensions(), 384);
        assert_eq!(provider.provider_name(), "hashing");

        let embedding = provider.embed("hello world").await.unwrap();
        assert_eq!(embedding.len(), 384);
    }

    #[tokio::test]
    async fn test_deterministic() {
        let provider = HashingProvider::new(384);

        let first = provider.embed("deterministic test").await.unwrap();
        let second = provider.embed("deterministic test").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_different_texts_differ() {
        let provider = HashingProvider::new(384);

        let first = provider.embed("retrieval augmented generation").await.unwrap();
        let second = provider.embed("unrelated cooking recipe").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_unit_norm() {
        let provider = HashingProvider::new(384);
        let embedding = provider.embed("some text to embed").await.unwrap();

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_empty_text_zero_vector() {
        let provider = HashingProvider::new(384);
        let embedding = provider.embed("").await.unwrap();

        assert_eq!(embedding.len(), 384);
        assert!(embedding.iter().all(|&x| x == 0.0));
    }

    #[tokio::test]
    async fn test_shared_vocabulary_is_closer() {
        let provider = HashingProvider::new(384);

        let query = provider.embed("FastAPI web framework").await.unwrap();
        let related = provider
            .embed("FastAPI is a modern web framework for building APIs")
            .await
            .unwrap();
        let unrelated = provider
            .embed("The weather tomorrow looks rainy with strong winds")
            .await
            .unwrap();

        let dot = |a: &[f32], b: &[f32]| -> f32 { a.iter().zip(b).map(|(x, y)| x * y).sum() };
        assert!(dot(&query, &related) > dot(&query, &unrelated));
    }
}
