use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ConversationTurn, SessionId};

/// Conversation Memory Interface
///
/// Append-only log of completed exchanges, keyed by session. Reads never
/// block on IO. `record` enforces the correctness rule from the pipeline
/// design: a turn with an empty (trimmed) response is rejected, so a failed
/// generation can never corrupt history.
///
/// No eviction, no size bound, no persistence across restarts; history
/// accumulates for the lifetime of the process.
#[async_trait]
pub trait ConversationMemory: Send + Sync {
    /// Load the ordered history for a session; empty for an unknown session
    async fn history(&self, session: &SessionId) -> Result<Vec<ConversationTurn>>;

    /// Append a completed turn to a session's history
    ///
    /// # Returns
    /// `Error::Validation` if the turn's trimmed response is empty
    async fn record(&self, session: &SessionId, turn: ConversationTurn) -> Result<()>;

    /// Get the name/identifier of this memory implementation
    fn provider_name(&self) -> &str;
}
