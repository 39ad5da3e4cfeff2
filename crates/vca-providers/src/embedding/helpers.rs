//! Input truncation helpers
//!
//! The embedder contract caps input at a fixed token bound; longer input is
//! silently truncated, not rejected. Token counting here is
//! whitespace-delimited - an approximation of the encoder's own tokenizer,
//! which applies its exact bound downstream.

use vca_domain::constants::EMBEDDING_MAX_INPUT_TOKENS;

/// Truncate text to at most `max_tokens` whitespace-delimited tokens
///
/// Input at or under the bound is returned unchanged (whitespace intact);
/// over the bound, the first `max_tokens` tokens are rejoined with single
/// spaces.
pub fn truncate_to_tokens(text: &str, max_tokens: usize) -> String {
    let token_count = text.split_whitespace().count();
    if token_count <= max_tokens {
        return text.to_string();
    }
    text.split_whitespace()
        .take(max_tokens)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate text to the domain-wide embedder input bound
pub fn truncate_for_embedding(text: &str) -> String {
    truncate_to_tokens(text, EMBEDDING_MAX_INPUT_TOKENS)
}
