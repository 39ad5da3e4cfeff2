//! Tests for chat providers and clocks

use std::time::Duration;

use futures::StreamExt;

use vca_domain::ports::providers::{ChatCompletionProvider, Clock};
use vca_domain::value_objects::{ChatMessage, ChatRequest, SamplingParams};
use vca_providers::chat::{NullChatProvider, ScriptedResponse};
use vca_providers::clock::ManualClock;

fn request() -> ChatRequest {
    ChatRequest {
        model: "llama3-70b-8192".to_string(),
        messages: vec![
            ChatMessage::system("You are a veterinary AI assistant."),
            ChatMessage::user("My dog has a fever."),
        ],
        sampling: SamplingParams::default(),
        stream: true,
    }
}

async fn collect(provider: &NullChatProvider) -> vca_domain::Result<String> {
    let mut stream = provider.complete(&request()).await?;
    let mut text = String::new();
    while let Some(chunk) = stream.next().await {
        text.push_str(&chunk?);
    }
    Ok(text)
}

#[tokio::test]
async fn default_reply_streams_as_one_chunk() {
    let provider = NullChatProvider::with_reply("Keep the dog hydrated.");
    let text = collect(&provider).await.unwrap();
    assert_eq!(text, "Keep the dog hydrated.");
    assert_eq!(provider.attempts(), 1);
}

#[tokio::test]
async fn chunks_concatenate_in_arrival_order() {
    let provider = NullChatProvider::with_script(vec![ScriptedResponse::Chunks(vec![
        "Keep ".to_string(),
        "the dog ".to_string(),
        "hydrated.".to_string(),
    ])]);
    let text = collect(&provider).await.unwrap();
    assert_eq!(text, "Keep the dog hydrated.");
}

#[tokio::test]
async fn scripted_transport_failure_is_transient() {
    let provider = NullChatProvider::with_script(vec![ScriptedResponse::TransportFailure(
        "connection reset".to_string(),
    )]);
    let err = collect(&provider).await.unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn mid_stream_failure_surfaces_after_partial_chunks() {
    let provider = NullChatProvider::with_script(vec![
        ScriptedResponse::ChunksThenTransportFailure(
            vec!["partial ".to_string()],
            "reset mid-stream".to_string(),
        ),
    ]);
    let err = collect(&provider).await.unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn scripted_failure_is_not_transient() {
    let provider = NullChatProvider::with_script(vec![ScriptedResponse::Failure(
        "401 unauthorized".to_string(),
    )]);
    let err = collect(&provider).await.unwrap_err();
    assert!(!err.is_transient());
}

#[tokio::test]
async fn manual_clock_records_without_sleeping() {
    let clock = ManualClock::new();
    clock.sleep(Duration::from_secs(1)).await;
    clock.sleep(Duration::from_secs(2)).await;
    assert_eq!(
        clock.recorded(),
        vec![Duration::from_secs(1), Duration::from_secs(2)]
    );
}

#[tokio::test]
async fn registry_resolves_groq_and_null_providers() {
    use vca_application::ports::registry::{list_chat_providers, resolve_chat_provider, ChatProviderConfig};

    let names: Vec<&str> = list_chat_providers().iter().map(|(n, _)| *n).collect();
    assert!(names.contains(&"groq"));
    assert!(names.contains(&"null"));

    let provider = resolve_chat_provider(&ChatProviderConfig::new("null")).unwrap();
    assert_eq!(provider.provider_name(), "null");
}
