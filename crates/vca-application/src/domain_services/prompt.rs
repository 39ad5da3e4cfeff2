//! Prompt assembly
//!
//! Pure string composition: species, retrieved corpus context, rendered
//! conversation history, the user query, a detected language tag, and an
//! optional image-analysis annotation become one instruction string for the
//! chat model. Deterministic given its inputs; no side effects.

use vca_domain::constants::{
    PROMPT_MAX_ANALYSIS_CHARS, PROMPT_MAX_QUERY_CHARS, SPECIES_DEFAULT,
};
use vca_domain::value_objects::Prompt;

use crate::domain_services::language::detect_language;

/// Slots recognized by the assembler
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptInput<'a> {
    /// Species the advice should target; `None` falls back to "general"
    pub species: Option<&'a str>,
    /// Retrieved corpus context, already rendered to text
    pub retrieved_context: Option<&'a str>,
    /// Rendered conversation history, possibly empty
    pub history: &'a str,
    /// The user's query, verbatim
    pub user_query: &'a str,
    /// Free-text image analysis summary, appended as a trailing annotation
    pub image_analysis: Option<&'a str>,
}

/// Prompt assembler
///
/// User-supplied text is length-capped and stripped of ASCII control
/// characters before interpolation (the upstream prototypes interpolated
/// unsanitized input; the policy here is deliberate and documented in
/// DESIGN.md). No HTML/XML escaping is applied: the consumer is a language
/// model, not a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAssembler;

impl PromptAssembler {
    /// Create a prompt assembler
    pub fn new() -> Self {
        Self
    }

    /// Compose the instruction prompt for one generation call
    pub fn assemble(&self, input: &PromptInput<'_>) -> Prompt {
        let species = match input.species {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => SPECIES_DEFAULT,
        };
        let query = sanitize(input.user_query, PROMPT_MAX_QUERY_CHARS);
        let language = detect_language(&query);

        let mut text = String::with_capacity(256 + query.len() + input.history.len());
        text.push_str(
            "You are a veterinary AI assistant designed to provide species-specific advice \
             based on previous conversations.\n",
        );
        text.push_str(&format!("Species: {species}\n"));
        if let Some(context) = input.retrieved_context {
            if !context.trim().is_empty() {
                text.push_str(&format!("Context: {context}\n"));
            }
        }
        text.push_str(&format!("History: {}\n", input.history));
        text.push_str(&format!("User Query: {query}\n"));
        text.push_str(&format!("Language: {language}\n"));
        text.push_str("Provide the response in the same language as the user query.");

        if let Some(analysis) = input.image_analysis {
            let analysis = sanitize(analysis, PROMPT_MAX_ANALYSIS_CHARS);
            if !analysis.is_empty() {
                text.push_str(&format!("\nImage Analysis: {analysis}"));
            }
        }

        Prompt::new(text)
    }
}

/// Strip ASCII control characters (keeping newlines and tabs) and cap length
fn sanitize(text: &str, max_chars: usize) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .take(max_chars)
        .collect()
}
