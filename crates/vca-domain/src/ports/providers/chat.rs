use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::Result;
use crate::value_objects::ChatRequest;

/// Lazily-produced sequence of completion text chunks
///
/// Streamed and batch responses share this shape: a batch response is a
/// stream of length one. Chunks must be concatenated in arrival order to
/// form the final text. A `Error::Network` item mid-stream signals a
/// transient transport failure; the whole attempt is discarded and retried
/// by the generation engine.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Chat Completion Interface
///
/// Contract for remote text-generation backends. The provider issues one
/// request per call and classifies failures: transient transport problems
/// (connection reset, timeout) map to `Error::Network` and are eligible for
/// retry by the caller; anything else (auth, malformed payload) maps to
/// `Error::Completion` and fails fast. The provider itself never retries.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Issue a chat completion request, yielding a chunk stream
    async fn complete(&self, request: &ChatRequest) -> Result<ChatStream>;

    /// Get the name/identifier of this chat provider
    fn provider_name(&self) -> &str;
}
