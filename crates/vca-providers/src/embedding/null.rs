//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use vca_domain::error::Result;
use vca_domain::ports::providers::EmbeddingProvider;
use vca_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;
use crate::embedding::helpers::truncate_for_embedding;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors derived deterministically from the input
/// bytes: identical text always yields an identical vector, which is the
/// same determinism property the real encoders guarantee. Useful for unit
/// tests and development without an embedding service.
///
/// # Example
///
/// ```rust
/// use vca_providers::embedding::NullEmbeddingProvider;
/// use vca_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let embeddings = texts
            .iter()
            .map(|text| {
                // Same truncation rule as the real encoders, so determinism
                // holds for inputs up to the bound.
                let text = truncate_for_embedding(text);
                let seed = text
                    .bytes()
                    .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));
                let base = (seed % 1000) as f32 / 1000.0;

                let vector = (0..EMBEDDING_DIMENSION_NULL)
                    .map(|j| {
                        let variation = ((seed as f32).sin() + (j as f32) * 0.01).sin();
                        (base + variation * 0.1).clamp(0.0, 1.0)
                    })
                    .collect();

                Embedding {
                    vector,
                    model: "null-test".to_string(),
                    dimensions: EMBEDDING_DIMENSION_NULL,
                }
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vca_application::ports::registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, EMBEDDING_PROVIDERS,
};
use vca_domain::ports::providers::EmbeddingProvider as EmbeddingProviderPort;

/// Factory function for creating null embedding provider instances.
fn null_factory(
    _config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProviderPort>, String> {
    Ok(Arc::new(NullEmbeddingProvider::new()))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
