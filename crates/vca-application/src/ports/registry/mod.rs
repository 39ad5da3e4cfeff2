//! Provider registries
//!
//! Auto-registration for provider implementations using linkme distributed
//! slices. Providers submit an entry with `#[linkme::distributed_slice]` at
//! compile time; the bootstrap resolves entries by configured name at
//! startup. The application layer never names a concrete provider.

/// Chat completion provider registry
pub mod chat;
/// Embedding provider registry
pub mod embedding;

pub use chat::{
    list_chat_providers, resolve_chat_provider, ChatProviderConfig, ChatProviderEntry,
    CHAT_PROVIDERS,
};
pub use embedding::{
    list_embedding_providers, resolve_embedding_provider, EmbeddingProviderConfig,
    EmbeddingProviderEntry, EMBEDDING_PROVIDERS,
};
