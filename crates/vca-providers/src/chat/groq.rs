//! Groq Chat Completion Provider
//!
//! Implements the ChatCompletionProvider port against Groq's
//! OpenAI-compatible chat API. Supports both delivery modes behind the one
//! chunk-stream interface: with `stream: true` the SSE `data:` lines are
//! parsed incrementally; without it, the single response body becomes a
//! one-chunk stream.
//!
//! Failure classification: transport-level problems (connect, timeout, a
//! reset mid-stream) map to `Error::Network` and are retried by the
//! generation engine; HTTP status and payload problems map to
//! `Error::Completion` and fail fast. This provider never retries.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;

use vca_domain::error::{Error, Result};
use vca_domain::ports::providers::{ChatCompletionProvider, ChatStream};
use vca_domain::value_objects::ChatRequest;

use crate::constants::{CHAT_REQUEST_TIMEOUT_SECS, CONTENT_TYPE_JSON, GROQ_DEFAULT_BASE_URL};

/// Groq chat completion provider
///
/// Receives the HTTP client via constructor injection, like every HTTP
/// provider in this crate.
pub struct GroqChatProvider {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl GroqChatProvider {
    /// Create a new Groq chat provider
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.groq.com/openai/v1")
    /// * `api_key` - Bearer token; `None` for unauthenticated gateways
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            timeout,
            http_client,
        }
    }

    /// Serialize a chat request to the OpenAI-compatible wire format
    fn build_payload(request: &ChatRequest) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|m| serde_json::json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        serde_json::json!({
            "model": request.model,
            "messages": messages,
            "temperature": request.sampling.temperature,
            "max_tokens": request.sampling.max_tokens,
            "top_p": request.sampling.top_p,
            "stream": request.stream,
            "stop": serde_json::Value::Null,
        })
    }
}

#[async_trait]
impl ChatCompletionProvider for GroqChatProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatStream> {
        let mut builder = self
            .http_client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&Self::build_payload(request));

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(classify_transport_error)?;
        let response = ensure_success(response).await?;

        if request.stream {
            Ok(sse_chunk_stream(response))
        } else {
            let body: serde_json::Value = response
                .json()
                .await
                .map_err(|e| Error::completion(format!("response parse failed: {e}")))?;
            let content = body["choices"][0]["message"]["content"]
                .as_str()
                .ok_or_else(|| Error::completion("response is missing message content"))?
                .to_string();

            // A batch response is a chunk stream of length one.
            Ok(Box::pin(futures::stream::once(async move {
                Ok::<_, Error>(content)
            })))
        }
    }

    fn provider_name(&self) -> &str {
        "groq"
    }
}

/// Map a reqwest error to the domain taxonomy
///
/// Connection, timeout, and body-transfer failures are transient transport
/// errors; anything else is a non-retried completion failure.
fn classify_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() || err.is_connect() || err.is_body() || err.is_request() {
        Error::network_with_source("chat completion transport failure", err)
    } else {
        Error::completion(format!("chat completion request failed: {err}"))
    }
}

/// Reject non-2xx responses with a completion error
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let code = status.as_u16();

    Err(match code {
        401 => Error::completion(format!("Groq authentication failed: {error_text}")),
        429 => Error::completion(format!("Groq rate limit exceeded: {error_text}")),
        500..=599 => Error::completion(format!("Groq server error ({code}): {error_text}")),
        _ => Error::completion(format!("Groq request failed ({code}): {error_text}")),
    })
}

/// Parse an SSE body into a chunk stream
///
/// Lines arrive as `data: {json}` with a final `data: [DONE]`. Content
/// deltas are yielded in arrival order; a transport failure mid-body
/// surfaces as `Error::Network` so the engine retries the whole attempt.
fn sse_chunk_stream(response: reqwest::Response) -> ChatStream {
    let stream = async_stream::try_stream! {
        let mut bytes = response.bytes_stream();
        let mut buffer = String::new();

        'receive: while let Some(chunk) = bytes.next().await {
            let chunk = chunk
                .map_err(|e| Error::network_with_source("chat completion stream interrupted", e))?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(newline) = buffer.find('\n') {
                let line = buffer[..newline].trim().to_string();
                buffer.drain(..=newline);

                let Some(data) = line.strip_prefix("data:") else {
                    continue;
                };
                let data = data.trim();
                if data == "[DONE]" {
                    break 'receive;
                }
                if data.is_empty() {
                    continue;
                }

                let event: serde_json::Value = serde_json::from_str(data)
                    .map_err(|e| Error::completion(format!("malformed stream event: {e}")))?;
                if let Some(content) = event["choices"][0]["delta"]["content"].as_str() {
                    if !content.is_empty() {
                        yield content.to_string();
                    }
                }
            }
        }
    };

    Box::pin(stream)
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vca_application::ports::registry::{ChatProviderConfig, ChatProviderEntry, CHAT_PROVIDERS};
use vca_domain::ports::providers::ChatCompletionProvider as ChatCompletionProviderPort;

/// Factory function for creating Groq chat provider instances.
fn groq_factory(
    config: &ChatProviderConfig,
) -> std::result::Result<Arc<dyn ChatCompletionProviderPort>, String> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| GROQ_DEFAULT_BASE_URL.to_string());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(CHAT_REQUEST_TIMEOUT_SECS));
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(GroqChatProvider::new(
        base_url,
        config.api_key.clone(),
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(CHAT_PROVIDERS)]
static GROQ_PROVIDER: ChatProviderEntry = ChatProviderEntry {
    name: "groq",
    description: "Groq OpenAI-compatible chat completion provider (streamed or batch)",
    factory: groq_factory,
};
