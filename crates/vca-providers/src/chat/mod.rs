//! Chat completion providers
//!
//! Adapters for the `ChatCompletionProvider` port. The Groq provider talks
//! to an OpenAI-compatible chat API (streamed or batch); the null provider
//! replays scripted outcomes for deterministic retry tests.

/// Groq / OpenAI-compatible chat provider
pub mod groq;
/// Scripted provider for tests
pub mod null;

pub use groq::GroqChatProvider;
pub use null::{NullChatProvider, ScriptedResponse};
