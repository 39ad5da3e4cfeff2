//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants (config paths,
//! env prefixes) live in `vca-infrastructure`.

// ============================================================================
// EMBEDDING DOMAIN CONSTANTS
// ============================================================================

/// Maximum input length for the embedder, in whitespace-delimited tokens.
/// Longer input is silently truncated before encoding, never rejected.
pub const EMBEDDING_MAX_INPUT_TOKENS: usize = 512;

/// Default embedding dimension (E5-class encoders)
pub const EMBEDDING_DIMENSION_DEFAULT: usize = 768;

// ============================================================================
// RETRIEVAL DOMAIN CONSTANTS
// ============================================================================

/// Default number of nearest neighbors fetched per query
pub const RETRIEVAL_TOP_K_DEFAULT: usize = 3;

// ============================================================================
// CONVERSATION DOMAIN CONSTANTS
// ============================================================================

/// Session id used when a request does not carry one
pub const SESSION_DEFAULT: &str = "default";

/// Species slot value used when a request does not carry one
pub const SPECIES_DEFAULT: &str = "general";

/// Language tag used when detection over the query is not applicable
pub const LANGUAGE_DEFAULT: &str = "en";

// ============================================================================
// PROMPT DOMAIN CONSTANTS
// ============================================================================

/// Maximum user query length interpolated into a prompt, in characters
pub const PROMPT_MAX_QUERY_CHARS: usize = 4000;

/// Maximum image-analysis summary length interpolated into a prompt, in characters
pub const PROMPT_MAX_ANALYSIS_CHARS: usize = 512;

// ============================================================================
// GENERATION DOMAIN CONSTANTS
// ============================================================================

/// Default chat completion model
pub const GENERATION_MODEL_DEFAULT: &str = "llama3-70b-8192";

/// Sampling temperature for chat completion
pub const GENERATION_TEMPERATURE_DEFAULT: f32 = 0.7;

/// Default completion token budget
pub const GENERATION_MAX_TOKENS_DEFAULT: u32 = 512;

/// Upper bound for the configurable completion token budget
pub const GENERATION_MAX_TOKENS_CEILING: u32 = 1024;

/// Nucleus sampling parameter for chat completion
pub const GENERATION_TOP_P_DEFAULT: f32 = 1.0;

/// Total generation attempts: the initial call plus two retries
pub const GENERATION_MAX_ATTEMPTS: u32 = 3;

/// Backoff unit; attempt n waits `2^n` of these before the next attempt
pub const GENERATION_BACKOFF_UNIT_SECS: u64 = 1;

/// Fixed user-facing text returned when every generation attempt failed
pub const GENERATION_FALLBACK_TEXT: &str =
    "Unable to process the request at this time. Please try again later.";

/// Message substituted when a request carries an image but no text
pub const IMAGE_ONLY_DEFAULT_MESSAGE: &str =
    "Please provide more information on the analysis result.";
