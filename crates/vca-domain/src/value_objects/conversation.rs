//! Conversation turns and history rendering
//!
//! The conversation history is an append-only ordered log of
//! (user message, generated response) pairs, replayed as context text for
//! subsequent prompts.

use serde::{Deserialize, Serialize};

use crate::constants::SESSION_DEFAULT;

/// Identifier scoping a conversation history
///
/// Requests that do not carry a session id share the default session, which
/// reproduces a single process-wide history. Supplying distinct ids isolates
/// conversations per user/session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session id
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(SESSION_DEFAULT.to_string())
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One completed exchange in a conversation
///
/// Invariant: a turn is only appended to history after a non-empty response
/// was produced. A failed or empty generation must never appear here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationTurn {
    /// The user's message, verbatim
    pub user_message: String,
    /// The generated response, trimmed
    pub response: String,
}

impl ConversationTurn {
    /// Create a conversation turn
    pub fn new<U: Into<String>, R: Into<String>>(user_message: U, response: R) -> Self {
        Self {
            user_message: user_message.into(),
            response: response.into(),
        }
    }

    /// Whether the response is non-empty after trimming
    pub fn has_response(&self) -> bool {
        !self.response.trim().is_empty()
    }
}

/// Render turns as history text for prompt assembly
///
/// Uses the conversation-buffer format the original service fed its prompt
/// template: alternating `Human:`/`AI:` lines, newline-joined. An empty
/// history renders as an empty string.
pub fn render_history(turns: &[ConversationTurn]) -> String {
    let mut lines = Vec::with_capacity(turns.len() * 2);
    for turn in turns {
        lines.push(format!("Human: {}", turn.user_message));
        lines.push(format!("AI: {}", turn.response));
    }
    lines.join("\n")
}
