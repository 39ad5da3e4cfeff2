//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings for similarity search
//! over the veterinary guidance corpus.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic
/// meaning. Embeddings are produced per request and discarded after the
/// nearest-neighbor lookup; only the startup corpus embeddings live longer,
/// inside the vector index.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - Dimensions must equal the vector length
/// - Model name identifies the encoder that produced the vector
///
/// ## Example
///
/// ```rust
/// use vca_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3],
///     model: "nomic-embed-text".to_string(),
///     dimensions: 3,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}
