//! Value objects
//!
//! Immutable domain values exchanged between the pipeline components:
//! embeddings, retrieval matches, conversation turns, and generation
//! requests/outcomes.

/// Conversation turns and history rendering
pub mod conversation;
/// Semantic embedding value objects
pub mod embedding;
/// Chat completion requests and outcomes
pub mod generation;
/// Nearest-neighbor retrieval results
pub mod retrieval;

pub use conversation::{render_history, ConversationTurn, SessionId};
pub use embedding::Embedding;
pub use generation::{
    ChatMessage, ChatRequest, GenerationOutcome, MessageRole, Prompt, SamplingParams,
};
pub use retrieval::{CorpusDocument, RetrievalMatch};
