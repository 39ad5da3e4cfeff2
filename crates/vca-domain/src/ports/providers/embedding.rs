use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Generation Interface
///
/// Contract for encoders that turn raw text into fixed-dimension vectors.
/// Input longer than the encoder's token bound is silently truncated, never
/// rejected. Encoding is deterministic for identical input given fixed model
/// weights. Encoder failure surfaces as `Error::ModelInference` and is never
/// retried by this component; the retry policy lives with the generation
/// client alone.
///
/// # Example
///
/// ```ignore
/// use vca_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("What should I do if my dog has a fever?").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embeddings for a batch of texts, one per input, in order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let mut embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .pop()
            .ok_or_else(|| Error::model_inference("encoder returned no embedding"))
    }

    /// Dimensionality of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this embedding provider
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
