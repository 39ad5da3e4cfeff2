//! Embedding providers
//!
//! Adapters for the `EmbeddingProvider` port. The Ollama provider talks to a
//! local embedding server over HTTP; the FastEmbed provider (feature
//! `embedding-fastembed`) runs ONNX inference in-process; the null provider
//! produces deterministic vectors for tests and offline development.
//!
//! All providers truncate input to the embedder token bound before encoding;
//! longer input is never rejected.

/// Input truncation helpers
pub mod helpers;
/// Deterministic provider for tests
pub mod null;
/// Ollama HTTP embedding provider
#[cfg(feature = "embedding-ollama")]
pub mod ollama;

/// FastEmbed local embedding provider
#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;

pub use helpers::truncate_to_tokens;
pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;

#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
