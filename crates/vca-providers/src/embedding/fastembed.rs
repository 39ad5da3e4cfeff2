//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for
//! local embedding generation. Uses ONNX models for inference without
//! external API calls.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};

use vca_domain::error::{Error, Result};
use vca_domain::ports::providers::EmbeddingProvider;
use vca_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_FASTEMBED_DEFAULT;
use crate::embedding::helpers::truncate_for_embedding;

/// Messages for the FastEmbed actor
enum FastEmbedMessage {
    EmbedBatch {
        texts: Vec<String>,
        tx: oneshot::Sender<Result<Vec<Embedding>>>,
    },
}

/// FastEmbed local embedding provider using the Actor pattern
///
/// The ONNX model is not `Sync`; an actor task owns it and serves embedding
/// requests through a channel, so the provider handle itself stays cheaply
/// cloneable and lock-free.
pub struct FastEmbedProvider {
    sender: mpsc::Sender<FastEmbedMessage>,
    model_name: String,
}

impl FastEmbedProvider {
    /// Create a new FastEmbed provider with the default model (AllMiniLML6V2)
    pub fn new() -> Result<Self> {
        Self::with_model(EmbeddingModel::AllMiniLML6V2)
    }

    /// Create a new FastEmbed provider with a specific model
    pub fn with_model(model: EmbeddingModel) -> Result<Self> {
        let init_options = InitOptions::new(model).with_show_download_progress(true);
        Self::with_options(init_options)
    }

    /// Create a new FastEmbed provider with custom initialization options
    pub fn with_options(init_options: InitOptions) -> Result<Self> {
        let model_name = format!("{:?}", init_options.model_name);
        let text_embedding = TextEmbedding::try_new(init_options).map_err(|e| {
            Error::model_inference(format!("Failed to initialize FastEmbed model: {e}"))
        })?;

        let (tx, rx) = mpsc::channel(100);
        let mut actor = FastEmbedActor {
            receiver: rx,
            model: text_embedding,
            model_name: model_name.clone(),
        };
        tokio::spawn(async move {
            actor.run().await;
        });

        Ok(Self {
            sender: tx,
            model_name,
        })
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let texts: Vec<String> = texts.iter().map(|t| truncate_for_embedding(t)).collect();

        let (tx, rx) = oneshot::channel();
        self.sender
            .send(FastEmbedMessage::EmbedBatch { texts, tx })
            .await
            .map_err(|_| Error::model_inference("FastEmbed actor channel closed"))?;

        rx.await
            .unwrap_or_else(|_| Err(Error::model_inference("FastEmbed actor closed")))
    }

    fn dimensions(&self) -> usize {
        // AllMiniLML6V2 has 384 dimensions
        EMBEDDING_DIMENSION_FASTEMBED_DEFAULT
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

impl Clone for FastEmbedProvider {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            model_name: self.model_name.clone(),
        }
    }
}

/// Internal actor that processes embedding requests
struct FastEmbedActor {
    receiver: mpsc::Receiver<FastEmbedMessage>,
    model: TextEmbedding,
    model_name: String,
}

impl FastEmbedActor {
    async fn run(&mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FastEmbedMessage::EmbedBatch { texts, tx } => {
                    let text_refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
                    let result = match self.model.embed(text_refs, None) {
                        Ok(vectors) => {
                            let model_name = self.model_name.clone();
                            Ok(vectors
                                .into_iter()
                                .map(|v| {
                                    let dimensions = v.len();
                                    Embedding {
                                        vector: v,
                                        model: model_name.clone(),
                                        dimensions,
                                    }
                                })
                                .collect())
                        }
                        Err(e) => Err(Error::model_inference(format!(
                            "FastEmbed embedding failed: {e}"
                        ))),
                    };
                    let _ = tx.send(result);
                }
            }
        }
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use vca_application::ports::registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, EMBEDDING_PROVIDERS,
};
use vca_domain::ports::providers::EmbeddingProvider as EmbeddingProviderPort;

/// Parse model name string to EmbeddingModel enum
fn parse_embedding_model(model_name: &str) -> EmbeddingModel {
    match model_name.to_lowercase().as_str() {
        "bgesmallen" | "bge-small-en" => EmbeddingModel::BGESmallENV15,
        "bgebaseen" | "bge-base-en" => EmbeddingModel::BGEBaseENV15,
        "multilingual-e5-small" => EmbeddingModel::MultilingualE5Small,
        "multilingual-e5-large" => EmbeddingModel::MultilingualE5Large,
        _ => EmbeddingModel::AllMiniLML6V2, // default
    }
}

/// Factory function for creating FastEmbed provider instances.
fn fastembed_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProviderPort>, String> {
    let model_name = config
        .model
        .clone()
        .unwrap_or_else(|| "AllMiniLML6V2".to_string());

    let model = parse_embedding_model(&model_name);
    let provider = FastEmbedProvider::with_model(model)
        .map_err(|e| format!("Failed to create FastEmbed provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static FASTEMBED_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "fastembed",
    description: "FastEmbed local provider (AllMiniLML6V2, BGESmallEN, etc.)",
    factory: fastembed_factory,
};
