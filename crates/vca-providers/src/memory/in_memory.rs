//! In-memory conversation memory implementation
//!
//! Per-session append-only logs held in a concurrent map. Data is not
//! persisted and is lost on restart, which matches the memory component's
//! contract: in scope only as an in-memory structure.

use async_trait::async_trait;
use dashmap::DashMap;

use vca_domain::error::{Error, Result};
use vca_domain::ports::providers::ConversationMemory;
use vca_domain::value_objects::{ConversationTurn, SessionId};

/// In-memory conversation memory
///
/// Histories are keyed by session id; every request appends to its own
/// session's log, and requests without a session id share the default one.
/// `record` enforces the non-empty-response invariant so a failed
/// generation can never corrupt history.
pub struct InMemoryConversationMemory {
    sessions: DashMap<SessionId, Vec<ConversationTurn>>,
}

impl InMemoryConversationMemory {
    /// Create a new in-memory conversation memory
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Number of sessions with recorded history
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for InMemoryConversationMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationMemory for InMemoryConversationMemory {
    async fn history(&self, session: &SessionId) -> Result<Vec<ConversationTurn>> {
        Ok(self
            .sessions
            .get(session)
            .map(|turns| turns.clone())
            .unwrap_or_default())
    }

    async fn record(&self, session: &SessionId, turn: ConversationTurn) -> Result<()> {
        if !turn.has_response() {
            return Err(Error::validation(
                "a turn with an empty response cannot be recorded",
            ));
        }

        self.sessions.entry(session.clone()).or_default().push(turn);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
