//! Assist Pipeline Use Case
//!
//! Application service for the retrieval-augmented answer pipeline:
//! validate the request, embed the query, look up corpus context, replay
//! session history, assemble the prompt, and drive the retrying generation
//! engine. A completed turn is recorded only when the model actually
//! answered with non-empty text; the fallback produced after retry
//! exhaustion is returned to the caller but never enters history.

use std::sync::Arc;

use tracing::{debug, instrument};

use vca_domain::constants::{RETRIEVAL_TOP_K_DEFAULT, SPECIES_DEFAULT};
use vca_domain::error::{Error, Result};
use vca_domain::ports::providers::{ConversationMemory, EmbeddingProvider, VectorIndex};
use vca_domain::value_objects::{
    render_history, ConversationTurn, CorpusDocument, GenerationOutcome, RetrievalMatch, SessionId,
};

use crate::domain_services::{GenerationEngine, PromptAssembler, PromptInput};

/// One assist request, already parsed from the transport layer
#[derive(Debug, Clone, Default)]
pub struct AssistRequest {
    /// The user's message
    pub message: String,
    /// Target species; `None` falls back to "general"
    pub species: Option<String>,
    /// Image-analysis summary produced by the upload path, if any
    pub image_analysis: Option<String>,
    /// Session id scoping the conversation history; `None` shares the default session
    pub session: Option<String>,
}

/// Assist pipeline service
///
/// Holds every collaborator behind its port, constructed once at bootstrap
/// and shared by reference across concurrent requests. The vector index is
/// immutable after build; conversation memory handles concurrent appends.
pub struct AssistService {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    documents: Arc<Vec<CorpusDocument>>,
    memory: Arc<dyn ConversationMemory>,
    engine: GenerationEngine,
    assembler: PromptAssembler,
    top_k: usize,
}

impl AssistService {
    /// Create the assist service
    ///
    /// `documents` must be slot-aligned with `index`: document `i` is the
    /// source text of index slot `i`.
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        documents: Arc<Vec<CorpusDocument>>,
        memory: Arc<dyn ConversationMemory>,
        engine: GenerationEngine,
    ) -> Self {
        Self {
            embedder,
            index,
            documents,
            memory,
            engine,
            assembler: PromptAssembler::new(),
            top_k: RETRIEVAL_TOP_K_DEFAULT,
        }
    }

    /// Override the number of corpus neighbors fetched per query
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Run the full pipeline for one request
    ///
    /// # Returns
    /// The answer text (or the fixed fallback after retry exhaustion), or
    /// `Error::Validation` when the message is empty.
    #[instrument(skip_all, fields(species = request.species.as_deref().unwrap_or(SPECIES_DEFAULT)))]
    pub async fn respond(&self, request: AssistRequest) -> Result<String> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(Error::validation("no message provided"));
        }

        let session = request
            .session
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(SessionId::new)
            .unwrap_or_default();

        // Retrieval is optional: an empty index skips the lookup entirely.
        let retrieved_context = if self.index.is_empty() {
            None
        } else {
            let embedding = self.embedder.embed(message).await?;
            let matches = self.index.search(&embedding.vector, self.top_k)?;
            debug!(matches = matches.len(), "corpus lookup complete");
            self.render_context(&matches)
        };

        let turns = self.memory.history(&session).await?;
        let history = render_history(&turns);

        let prompt = self.assembler.assemble(&PromptInput {
            species: request.species.as_deref(),
            retrieved_context: retrieved_context.as_deref(),
            history: &history,
            user_query: message,
            image_analysis: request.image_analysis.as_deref(),
        });

        let outcome = self.engine.generate(&prompt, message).await?;

        if let GenerationOutcome::Answered(answer) = &outcome {
            // Only a complete, non-empty response may enter history.
            if !answer.trim().is_empty() {
                self.memory
                    .record(&session, ConversationTurn::new(message, answer.clone()))
                    .await?;
            }
        }

        Ok(outcome.text().to_string())
    }

    /// Render retrieval matches as context text for the prompt
    fn render_context(&self, matches: &[RetrievalMatch]) -> Option<String> {
        let lines: Vec<String> = matches
            .iter()
            .filter_map(|m| {
                self.documents
                    .get(m.slot)
                    .map(|doc| format!("[{}] {}", m.label, doc.text.trim()))
            })
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}
