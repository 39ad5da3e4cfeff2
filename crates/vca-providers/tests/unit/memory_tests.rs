//! Tests for in-memory conversation memory

use vca_domain::ports::providers::ConversationMemory;
use vca_domain::value_objects::{ConversationTurn, SessionId};
use vca_providers::memory::InMemoryConversationMemory;

#[tokio::test]
async fn history_starts_empty() {
    let memory = InMemoryConversationMemory::new();
    let turns = memory.history(&SessionId::default()).await.unwrap();
    assert!(turns.is_empty());
}

#[tokio::test]
async fn recorded_turns_replay_in_order() {
    let memory = InMemoryConversationMemory::new();
    let session = SessionId::default();

    memory
        .record(&session, ConversationTurn::new("first", "answer one"))
        .await
        .unwrap();
    memory
        .record(&session, ConversationTurn::new("second", "answer two"))
        .await
        .unwrap();

    let turns = memory.history(&session).await.unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].user_message, "first");
    assert_eq!(turns[1].user_message, "second");
}

#[tokio::test]
async fn empty_response_is_rejected_and_never_stored() {
    let memory = InMemoryConversationMemory::new();
    let session = SessionId::default();

    let err = memory
        .record(&session, ConversationTurn::new("question", "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, vca_domain::Error::Validation { .. }));

    let turns = memory.history(&session).await.unwrap();
    assert!(turns.iter().all(|t| t.has_response()));
    assert!(turns.is_empty());
}

#[tokio::test]
async fn sessions_are_isolated() {
    let memory = InMemoryConversationMemory::new();
    let alice = SessionId::new("alice");
    let bob = SessionId::new("bob");

    memory
        .record(&alice, ConversationTurn::new("alice asks", "alice answer"))
        .await
        .unwrap();

    assert_eq!(memory.history(&alice).await.unwrap().len(), 1);
    assert!(memory.history(&bob).await.unwrap().is_empty());
    assert_eq!(memory.session_count(), 1);
}

#[tokio::test]
async fn default_session_is_shared_across_requests() {
    let memory = InMemoryConversationMemory::new();

    // Two requests without a session id land in the same history.
    memory
        .record(&SessionId::default(), ConversationTurn::new("one", "a"))
        .await
        .unwrap();
    memory
        .record(&SessionId::default(), ConversationTurn::new("two", "b"))
        .await
        .unwrap();

    assert_eq!(memory.history(&SessionId::default()).await.unwrap().len(), 2);
}
