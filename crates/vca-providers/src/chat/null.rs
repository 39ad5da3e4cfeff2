//! Null chat provider for testing and development
//!
//! Replays scripted outcomes in order, counting attempts, so retry behavior
//! can be tested deterministically: transient failures before the call,
//! transient failures mid-stream, non-transient failures, and canned chunk
//! sequences. With an exhausted (or absent) script, every call yields the
//! default reply.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use vca_domain::error::{Error, Result};
use vca_domain::ports::providers::{ChatCompletionProvider, ChatStream};
use vca_domain::value_objects::ChatRequest;

/// One scripted call outcome
pub enum ScriptedResponse {
    /// Deliver these chunks in order, then end the stream
    Chunks(Vec<String>),
    /// Fail before any chunk with a transient transport error
    TransportFailure(String),
    /// Deliver some chunks, then fail mid-stream with a transport error
    ChunksThenTransportFailure(Vec<String>, String),
    /// Fail with a non-transient completion error
    Failure(String),
}

/// Null chat provider for testing
///
/// # Example
///
/// ```rust
/// use vca_providers::chat::{NullChatProvider, ScriptedResponse};
///
/// let provider = NullChatProvider::with_script(vec![
///     ScriptedResponse::TransportFailure("connection reset".into()),
///     ScriptedResponse::Chunks(vec!["Keep the dog ".into(), "hydrated.".into()]),
/// ]);
/// assert_eq!(provider.attempts(), 0);
/// ```
pub struct NullChatProvider {
    script: Mutex<VecDeque<ScriptedResponse>>,
    attempts: AtomicU32,
    default_reply: String,
}

impl NullChatProvider {
    /// Create a provider that always yields the default reply
    pub fn new() -> Self {
        Self::with_reply("This is a canned veterinary answer.")
    }

    /// Create a provider that always yields `reply`
    pub fn with_reply<S: Into<String>>(reply: S) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            attempts: AtomicU32::new(0),
            default_reply: reply.into(),
        }
    }

    /// Create a provider that replays `script` in order, then the default reply
    pub fn with_script(script: Vec<ScriptedResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            attempts: AtomicU32::new(0),
            default_reply: "This is a canned veterinary answer.".to_string(),
        }
    }

    /// Number of `complete` calls observed so far
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for NullChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatCompletionProvider for NullChatProvider {
    async fn complete(&self, _request: &ChatRequest) -> Result<ChatStream> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().expect("script poisoned").pop_front();
        match next {
            None => Ok(chunk_stream(vec![Ok(self.default_reply.clone())])),
            Some(ScriptedResponse::Chunks(chunks)) => {
                Ok(chunk_stream(chunks.into_iter().map(Ok).collect()))
            }
            Some(ScriptedResponse::TransportFailure(message)) => Err(Error::network(message)),
            Some(ScriptedResponse::ChunksThenTransportFailure(chunks, message)) => {
                let mut items: Vec<Result<String>> = chunks.into_iter().map(Ok).collect();
                items.push(Err(Error::network(message)));
                Ok(chunk_stream(items))
            }
            Some(ScriptedResponse::Failure(message)) => Err(Error::completion(message)),
        }
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Box a ready item sequence as a chat stream
fn chunk_stream(items: Vec<Result<String>>) -> ChatStream {
    Box::pin(futures::stream::iter(items))
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vca_application::ports::registry::{ChatProviderConfig, ChatProviderEntry, CHAT_PROVIDERS};
use vca_domain::ports::providers::ChatCompletionProvider as ChatCompletionProviderPort;

/// Factory function for creating null chat provider instances.
fn null_factory(
    _config: &ChatProviderConfig,
) -> std::result::Result<Arc<dyn ChatCompletionProviderPort>, String> {
    Ok(Arc::new(NullChatProvider::new()))
}

#[linkme::distributed_slice(CHAT_PROVIDERS)]
static NULL_PROVIDER: ChatProviderEntry = ChatProviderEntry {
    name: "null",
    description: "Null provider for testing (scripted outcomes, canned replies)",
    factory: null_factory,
};
