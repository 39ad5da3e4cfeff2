//! Port traits for external collaborators

/// Provider ports
pub mod providers;

pub use providers::{
    ChatCompletionProvider, ChatStream, Clock, ConversationMemory, EmbeddingProvider, VectorIndex,
};
