//! Tests for the assist pipeline
//!
//! These tests use real providers (NullEmbeddingProvider, FlatVectorIndex,
//! InMemoryConversationMemory, NullChatProvider) to validate actual pipeline
//! behavior, not mocked responses.

use std::sync::Arc;

use vca_application::domain_services::{GenerationEngine, GenerationSettings};
use vca_application::use_cases::{AssistRequest, AssistService};
use vca_domain::ports::providers::{ConversationMemory, EmbeddingProvider, VectorIndex};
use vca_domain::value_objects::{CorpusDocument, SessionId};
use vca_providers::chat::{NullChatProvider, ScriptedResponse};
use vca_providers::clock::ManualClock;
use vca_providers::embedding::NullEmbeddingProvider;
use vca_providers::index::FlatVectorIndex;
use vca_providers::memory::InMemoryConversationMemory;

struct Fixture {
    service: AssistService,
    chat: Arc<NullChatProvider>,
    memory: Arc<InMemoryConversationMemory>,
}

/// Build a service over a small embedded corpus
async fn fixture(script: Vec<ScriptedResponse>) -> Fixture {
    let embedder = Arc::new(NullEmbeddingProvider::new());

    let documents = vec![
        CorpusDocument::new("dog", "Dog fever above 39.4C warrants a vet visit."),
        CorpusDocument::new("cat", "Cats hide pain; appetite loss is a warning sign."),
    ];
    let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
    let embeddings = embedder.embed_batch(&texts).await.unwrap();
    let index = FlatVectorIndex::build(
        embedder.dimensions(),
        documents
            .iter()
            .map(|d| d.species.clone())
            .zip(embeddings)
            .collect::<Vec<_>>(),
    )
    .unwrap();

    let chat = Arc::new(NullChatProvider::with_script(script));
    let memory = Arc::new(InMemoryConversationMemory::new());
    let engine = GenerationEngine::new(
        chat.clone(),
        Arc::new(ManualClock::new()),
        GenerationSettings::default(),
    );

    let service = AssistService::new(
        embedder,
        Arc::new(index) as Arc<dyn VectorIndex>,
        Arc::new(documents),
        memory.clone(),
        engine,
    );

    Fixture {
        service,
        chat,
        memory,
    }
}

fn request(message: &str) -> AssistRequest {
    AssistRequest {
        message: message.to_string(),
        species: Some("dog".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn canned_answer_flows_through_verbatim() {
    let fx = fixture(vec![ScriptedResponse::Chunks(vec![
        "  Monitor the fever and offer water.  ".to_string(),
    ])])
    .await;

    let answer = fx
        .service
        .respond(request("What should I do if my dog has a fever?"))
        .await
        .unwrap();
    assert_eq!(answer, "Monitor the fever and offer water.");
    assert_eq!(fx.chat.attempts(), 1);
}

#[tokio::test]
async fn answered_turn_is_recorded_in_history() {
    let fx = fixture(vec![ScriptedResponse::Chunks(vec![
        "Offer water.".to_string(),
    ])])
    .await;

    fx.service
        .respond(request("What should I do if my dog has a fever?"))
        .await
        .unwrap();

    let turns = fx.memory.history(&SessionId::default()).await.unwrap();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].user_message, "What should I do if my dog has a fever?");
    assert_eq!(turns[0].response, "Offer water.");
}

#[tokio::test]
async fn fallback_is_returned_but_never_recorded() {
    let fx = fixture(vec![
        ScriptedResponse::TransportFailure("reset".to_string()),
        ScriptedResponse::TransportFailure("reset".to_string()),
        ScriptedResponse::TransportFailure("reset".to_string()),
    ])
    .await;

    let answer = fx
        .service
        .respond(request("What should I do if my dog has a fever?"))
        .await
        .unwrap();
    assert_eq!(
        answer,
        "Unable to process the request at this time. Please try again later."
    );

    let turns = fx.memory.history(&SessionId::default()).await.unwrap();
    assert!(turns.is_empty());
}

#[tokio::test]
async fn empty_message_is_a_validation_error() {
    let fx = fixture(vec![]).await;
    let err = fx.service.respond(request("   ")).await.unwrap_err();
    assert!(matches!(err, vca_domain::Error::Validation { .. }));
    assert_eq!(fx.chat.attempts(), 0, "validation fails before generation");
}

#[tokio::test]
async fn sessions_keep_separate_histories() {
    let fx = fixture(vec![
        ScriptedResponse::Chunks(vec!["Answer for alice.".to_string()]),
        ScriptedResponse::Chunks(vec!["Answer for bob.".to_string()]),
    ])
    .await;

    let mut alice = request("Is my dog okay?");
    alice.session = Some("alice".to_string());
    fx.service.respond(alice).await.unwrap();

    let mut bob = request("Is my cat okay?");
    bob.session = Some("bob".to_string());
    fx.service.respond(bob).await.unwrap();

    let alice_turns = fx.memory.history(&SessionId::new("alice")).await.unwrap();
    let bob_turns = fx.memory.history(&SessionId::new("bob")).await.unwrap();
    assert_eq!(alice_turns.len(), 1);
    assert_eq!(bob_turns.len(), 1);
    assert_eq!(alice_turns[0].response, "Answer for alice.");
}

#[tokio::test]
async fn empty_index_skips_retrieval() {
    // A service over an empty corpus still answers; the lookup is optional.
    let embedder = Arc::new(NullEmbeddingProvider::new());
    let index = FlatVectorIndex::empty(embedder.dimensions());
    let chat = Arc::new(NullChatProvider::with_reply("No corpus needed."));
    let engine = GenerationEngine::new(
        chat.clone(),
        Arc::new(ManualClock::new()),
        GenerationSettings::default(),
    );
    let service = AssistService::new(
        embedder,
        Arc::new(index) as Arc<dyn VectorIndex>,
        Arc::new(Vec::new()),
        Arc::new(InMemoryConversationMemory::new()),
        engine,
    );

    let answer = service.respond(request("Anything wrong?")).await.unwrap();
    assert_eq!(answer, "No corpus needed.");
}
