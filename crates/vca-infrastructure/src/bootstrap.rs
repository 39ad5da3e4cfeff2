//! Bootstrap: providers -> services -> application context
//!
//! Resolves configured providers through the linkme registries, builds the
//! corpus index, and wires everything into the assist service. Every
//! component is constructed exactly once here and handed to request
//! handlers by reference; there is no hidden global state.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use vca_application::domain_services::{GenerationEngine, GenerationSettings, RetryPolicy};
use vca_application::ports::registry::{
    resolve_chat_provider, resolve_embedding_provider, ChatProviderConfig, EmbeddingProviderConfig,
};
use vca_application::use_cases::AssistService;
use vca_domain::constants::GENERATION_BACKOFF_UNIT_SECS;
use vca_domain::error::{Error, Result};
use vca_domain::value_objects::SamplingParams;
use vca_providers::clock::TokioClock;
use vca_providers::memory::InMemoryConversationMemory;

use crate::config::AppConfig;
use crate::corpus;

/// Everything a running server needs, built once at startup
pub struct AppContext {
    /// The effective configuration
    pub config: AppConfig,
    /// The assist pipeline service
    pub assist: Arc<AssistService>,
}

/// Wire the configured providers into an application context
pub async fn bootstrap(config: AppConfig) -> Result<AppContext> {
    let embedder = resolve_embedding_provider(&embedding_registry_config(&config))
        .map_err(Error::configuration)?;
    info!(provider = embedder.provider_name(), "embedding provider ready");

    let (index, documents) = corpus::build_index(&config.retrieval, embedder.as_ref()).await?;
    info!(entries = documents.len(), "vector index ready");

    let chat =
        resolve_chat_provider(&chat_registry_config(&config)).map_err(Error::configuration)?;
    info!(provider = chat.provider_name(), "chat provider ready");

    let engine = GenerationEngine::new(
        chat,
        Arc::new(TokioClock),
        GenerationSettings {
            model: config.chat.model.clone(),
            sampling: SamplingParams {
                temperature: config.chat.temperature,
                max_tokens: config.chat.max_tokens,
                top_p: config.chat.top_p,
            },
            stream: config.chat.stream,
            policy: RetryPolicy {
                max_attempts: config.chat.max_attempts,
                backoff_unit: Duration::from_secs(GENERATION_BACKOFF_UNIT_SECS),
            },
        },
    );

    let assist = AssistService::new(
        embedder,
        Arc::new(index),
        Arc::new(documents),
        Arc::new(InMemoryConversationMemory::new()),
        engine,
    )
    .with_top_k(config.retrieval.top_k);

    Ok(AppContext {
        config,
        assist: Arc::new(assist),
    })
}

/// Translate the embedding config section to a registry config
fn embedding_registry_config(config: &AppConfig) -> EmbeddingProviderConfig {
    let mut registry_config = EmbeddingProviderConfig::new(config.embedding.provider.clone());
    registry_config.model = config.embedding.model.clone();
    registry_config.base_url = config.embedding.base_url.clone();
    registry_config.api_key = config.embedding.api_key.clone();
    registry_config
}

/// Translate the chat config section to a registry config
fn chat_registry_config(config: &AppConfig) -> ChatProviderConfig {
    let mut registry_config = ChatProviderConfig::new(config.chat.provider.clone());
    registry_config.model = Some(config.chat.model.clone());
    registry_config.base_url = config.chat.base_url.clone();
    registry_config.api_key = config.chat.api_key.clone();
    registry_config.timeout_secs = config.chat.timeout_secs;
    registry_config
}
