//! Tests for the retrying generation engine
//!
//! These tests use the real scripted provider and recording clock rather
//! than mocks, so the retry state machine is exercised end to end without
//! wall-clock delay.

use std::sync::Arc;
use std::time::Duration;

use vca_application::domain_services::{GenerationEngine, GenerationSettings};
use vca_domain::constants::GENERATION_FALLBACK_TEXT;
use vca_domain::value_objects::{GenerationOutcome, Prompt};
use vca_providers::chat::{NullChatProvider, ScriptedResponse};
use vca_providers::clock::ManualClock;

fn engine_with(
    script: Vec<ScriptedResponse>,
) -> (GenerationEngine, Arc<NullChatProvider>, Arc<ManualClock>) {
    let chat = Arc::new(NullChatProvider::with_script(script));
    let clock = Arc::new(ManualClock::new());
    let engine = GenerationEngine::new(
        chat.clone(),
        clock.clone(),
        GenerationSettings::default(),
    );
    (engine, chat, clock)
}

fn prompt() -> Prompt {
    Prompt::new("You are a veterinary AI assistant.\nSpecies: dog")
}

#[tokio::test]
async fn success_on_first_attempt_concatenates_chunks() {
    let (engine, chat, clock) = engine_with(vec![ScriptedResponse::Chunks(vec![
        "Keep the dog ".to_string(),
        "hydrated.".to_string(),
    ])]);

    let outcome = engine.generate(&prompt(), "my dog has a fever").await.unwrap();
    assert_eq!(
        outcome,
        GenerationOutcome::Answered("Keep the dog hydrated.".to_string())
    );
    assert_eq!(chat.attempts(), 1);
    assert!(clock.recorded().is_empty());
}

#[tokio::test]
async fn three_transport_failures_exhaust_to_fallback() {
    let (engine, chat, clock) = engine_with(vec![
        ScriptedResponse::TransportFailure("reset 1".to_string()),
        ScriptedResponse::TransportFailure("reset 2".to_string()),
        ScriptedResponse::TransportFailure("reset 3".to_string()),
    ]);

    let outcome = engine.generate(&prompt(), "my dog has a fever").await.unwrap();
    assert_eq!(
        outcome,
        GenerationOutcome::Unavailable(GENERATION_FALLBACK_TEXT.to_string())
    );

    // Exactly 3 attempts; the 2^attempt schedule yields waits of 1 and 2
    // units between them.
    assert_eq!(chat.attempts(), 3);
    assert_eq!(
        clock.recorded(),
        vec![Duration::from_secs(1), Duration::from_secs(2)]
    );
}

#[tokio::test]
async fn success_on_second_attempt_stops_retrying() {
    let (engine, chat, clock) = engine_with(vec![
        ScriptedResponse::TransportFailure("reset".to_string()),
        ScriptedResponse::Chunks(vec!["  Give fresh water.  ".to_string()]),
    ]);

    let outcome = engine.generate(&prompt(), "my dog has a fever").await.unwrap();
    assert_eq!(
        outcome,
        GenerationOutcome::Answered("Give fresh water.".to_string())
    );
    assert_eq!(chat.attempts(), 2);
    assert_eq!(clock.recorded(), vec![Duration::from_secs(1)]);
}

#[tokio::test]
async fn mid_stream_failure_discards_partial_text_and_retries() {
    let (engine, chat, _clock) = engine_with(vec![
        ScriptedResponse::ChunksThenTransportFailure(
            vec!["partial garbage ".to_string()],
            "reset mid-stream".to_string(),
        ),
        ScriptedResponse::Chunks(vec!["Clean answer.".to_string()]),
    ]);

    let outcome = engine.generate(&prompt(), "my dog has a fever").await.unwrap();
    assert_eq!(outcome, GenerationOutcome::Answered("Clean answer.".to_string()));
    assert_eq!(chat.attempts(), 2);
}

#[tokio::test]
async fn non_transient_failure_propagates_without_retry() {
    let (engine, chat, clock) = engine_with(vec![ScriptedResponse::Failure(
        "401 unauthorized".to_string(),
    )]);

    let err = engine
        .generate(&prompt(), "my dog has a fever")
        .await
        .unwrap_err();
    assert!(!err.is_transient());
    assert_eq!(chat.attempts(), 1);
    assert!(clock.recorded().is_empty());
}

#[tokio::test]
async fn answer_is_trimmed() {
    let (engine, _chat, _clock) = engine_with(vec![ScriptedResponse::Chunks(vec![
        "\n  trimmed answer \n".to_string(),
    ])]);

    let outcome = engine.generate(&prompt(), "hello").await.unwrap();
    assert_eq!(outcome.text(), "trimmed answer");
}
