//! Tests for domain value objects

use vca_domain::value_objects::{
    render_history, ChatMessage, ConversationTurn, GenerationOutcome, Prompt, SessionId,
};

#[test]
fn turn_with_blank_response_is_detected() {
    let turn = ConversationTurn::new("Is grain-free food safe?", "   ");
    assert!(!turn.has_response());

    let turn = ConversationTurn::new("Is grain-free food safe?", "Usually, yes.");
    assert!(turn.has_response());
}

#[test]
fn session_ids_compare_by_value() {
    assert_eq!(SessionId::new("alice"), SessionId::from("alice"));
    assert_ne!(SessionId::new("alice"), SessionId::default());
}

#[test]
fn prompt_round_trips_text() {
    let prompt = Prompt::new("Species: dog");
    assert_eq!(prompt.as_str(), "Species: dog");
    assert_eq!(prompt.into_inner(), "Species: dog");
}

#[test]
fn outcome_text_is_always_displayable() {
    let answered = GenerationOutcome::Answered("Keep the dog hydrated.".to_string());
    assert!(answered.is_answered());
    assert_eq!(answered.text(), "Keep the dog hydrated.");

    let fallback = GenerationOutcome::Unavailable("Please try again later.".to_string());
    assert!(!fallback.is_answered());
    assert_eq!(fallback.text(), "Please try again later.");
}

#[test]
fn history_rendering_preserves_order() {
    let turns = vec![
        ConversationTurn::new("first", "one"),
        ConversationTurn::new("second", "two"),
    ];
    let rendered = render_history(&turns);
    let first = rendered.find("first").unwrap();
    let second = rendered.find("second").unwrap();
    assert!(first < second);
}

#[test]
fn system_and_user_messages_tag_roles() {
    let system = ChatMessage::system("You are a veterinary AI assistant.");
    let user = ChatMessage::user("My dog has a fever.");
    assert_eq!(system.role.as_str(), "system");
    assert_eq!(user.role.as_str(), "user");
}
