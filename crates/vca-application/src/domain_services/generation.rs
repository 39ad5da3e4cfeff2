//! Retrying generation engine
//!
//! Drives a chat completion call through an explicit retry state machine:
//!
//! ```text
//! Pending → Succeeded
//! Pending → Retrying → Pending   (after the backoff delay, bounded)
//! Pending → Exhausted            (attempt bound reached)
//! ```
//!
//! Only transient transport failures (`Error::Network`) trigger a retry;
//! everything else fails fast. Exhaustion yields the fixed fallback text as
//! a value, never an error, so the serving layer always has displayable
//! prose. This engine owns the only retry policy in the system.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tracing::{debug, warn};

use vca_domain::constants::{
    GENERATION_BACKOFF_UNIT_SECS, GENERATION_FALLBACK_TEXT, GENERATION_MAX_ATTEMPTS,
    GENERATION_MODEL_DEFAULT,
};
use vca_domain::error::Result;
use vca_domain::ports::providers::{ChatCompletionProvider, Clock};
use vca_domain::value_objects::{
    ChatMessage, ChatRequest, GenerationOutcome, Prompt, SamplingParams,
};

/// Bounded exponential backoff schedule
///
/// Attempt `n` (zero-based) waits `backoff_unit * 2^n` before the next
/// attempt. With the default bound of 3 attempts, the waits that actually
/// elapse are 1 and 2 units.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts: the initial call plus the retries
    pub max_attempts: u32,
    /// Backoff time unit
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: GENERATION_MAX_ATTEMPTS,
            backoff_unit: Duration::from_secs(GENERATION_BACKOFF_UNIT_SECS),
        }
    }
}

impl RetryPolicy {
    /// Delay before the attempt following failed attempt `attempt`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_unit * 2u32.saturating_pow(attempt)
    }
}

/// Settings for the generation engine
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Model identifier sent to the provider
    pub model: String,
    /// Sampling parameters
    pub sampling: SamplingParams,
    /// Whether to request incremental delivery from the provider
    pub stream: bool,
    /// Retry policy
    pub policy: RetryPolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: GENERATION_MODEL_DEFAULT.to_string(),
            sampling: SamplingParams::default(),
            stream: true,
            policy: RetryPolicy::default(),
        }
    }
}

/// States of a single generation run
enum AttemptState {
    /// An attempt is about to be issued
    Pending { attempt: u32 },
    /// A transient failure occurred; waiting out the backoff delay
    Retrying { attempt: u32 },
    /// A complete response text was collected
    Succeeded { text: String },
    /// The attempt bound was reached without success
    Exhausted,
}

/// Retrying generation engine
///
/// Wraps a [`ChatCompletionProvider`] with the retry/backoff policy. The
/// clock is injected so tests can run all attempts without wall-clock delay.
pub struct GenerationEngine {
    chat: Arc<dyn ChatCompletionProvider>,
    clock: Arc<dyn Clock>,
    settings: GenerationSettings,
}

impl GenerationEngine {
    /// Create a generation engine
    pub fn new(
        chat: Arc<dyn ChatCompletionProvider>,
        clock: Arc<dyn Clock>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            chat,
            clock,
            settings,
        }
    }

    /// Generate an answer for the prompt/message pair
    ///
    /// The prompt travels as the system message and the raw user message as
    /// the user message, matching the upstream chat API convention. Chunks
    /// are concatenated in arrival order; the final text is trimmed.
    pub async fn generate(&self, prompt: &Prompt, user_message: &str) -> Result<GenerationOutcome> {
        let request = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(prompt.as_str()),
                ChatMessage::user(user_message),
            ],
            sampling: self.settings.sampling,
            stream: self.settings.stream,
        };

        let mut state = AttemptState::Pending { attempt: 0 };
        loop {
            state = match state {
                AttemptState::Pending { attempt } => {
                    debug!(attempt, model = %request.model, "issuing chat completion");
                    match self.run_attempt(&request).await {
                        Ok(text) => AttemptState::Succeeded { text },
                        Err(err) if err.is_transient() => {
                            warn!(attempt, error = %err, "transient transport failure");
                            if attempt + 1 >= self.settings.policy.max_attempts {
                                AttemptState::Exhausted
                            } else {
                                AttemptState::Retrying { attempt }
                            }
                        }
                        Err(err) => return Err(err),
                    }
                }
                AttemptState::Retrying { attempt } => {
                    self.clock
                        .sleep(self.settings.policy.backoff_delay(attempt))
                        .await;
                    AttemptState::Pending {
                        attempt: attempt + 1,
                    }
                }
                AttemptState::Succeeded { text } => {
                    return Ok(GenerationOutcome::Answered(text.trim().to_string()));
                }
                AttemptState::Exhausted => {
                    return Ok(GenerationOutcome::Unavailable(
                        GENERATION_FALLBACK_TEXT.to_string(),
                    ));
                }
            };
        }
    }

    /// Issue one request and collect its chunk stream
    ///
    /// A transport failure mid-stream discards the partial text; the whole
    /// attempt is retried, never resumed.
    async fn run_attempt(&self, request: &ChatRequest) -> Result<String> {
        let mut stream = self.chat.complete(request).await?;
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            text.push_str(&chunk?);
        }
        Ok(text)
    }
}
