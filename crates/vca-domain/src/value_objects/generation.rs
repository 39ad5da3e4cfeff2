//! Chat completion requests and outcomes
//!
//! The request shape mirrors the OpenAI-compatible chat API the service
//! talks to: a model id, ordered role-tagged messages, and sampling
//! parameters. The outcome distinguishes a real answer from the fixed
//! fallback produced after retry exhaustion.

use serde::{Deserialize, Serialize};

use crate::constants::{
    GENERATION_MAX_TOKENS_DEFAULT, GENERATION_TEMPERATURE_DEFAULT, GENERATION_TOP_P_DEFAULT,
};

/// Role tag on a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instruction context for the model
    System,
    /// End-user content
    User,
    /// Prior model output
    Assistant,
}

impl MessageRole {
    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One role-tagged message in a chat request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Message role
    pub role: MessageRole,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Sampling parameters for a chat completion call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SamplingParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token budget
    pub max_tokens: u32,
    /// Nucleus sampling parameter
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: GENERATION_TEMPERATURE_DEFAULT,
            max_tokens: GENERATION_MAX_TOKENS_DEFAULT,
            top_p: GENERATION_TOP_P_DEFAULT,
        }
    }
}

/// A chat completion request
///
/// Valid for exactly one call; the provider decides how `stream` is carried
/// on the wire, but the result always arrives as a chunk stream (a batch
/// response is a stream of length one).
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Ordered messages; the first is conventionally the system prompt
    pub messages: Vec<ChatMessage>,
    /// Sampling parameters
    pub sampling: SamplingParams,
    /// Whether the provider should request incremental delivery
    pub stream: bool,
}

/// A composed prompt, valid for exactly one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt(String);

impl Prompt {
    /// Wrap composed prompt text
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// The prompt text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the prompt, yielding its text
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Result of a generation run, after retries
///
/// `Unavailable` carries displayable fallback prose rather than an error so
/// the serving layer always has something to show. It must never be recorded
/// in conversation history.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The model produced a non-empty answer (already trimmed)
    Answered(String),
    /// Every attempt failed; fixed fallback text for the user
    Unavailable(String),
}

impl GenerationOutcome {
    /// The user-facing text, whichever variant this is
    pub fn text(&self) -> &str {
        match self {
            Self::Answered(text) | Self::Unavailable(text) => text,
        }
    }

    /// Whether the model actually answered
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }
}
