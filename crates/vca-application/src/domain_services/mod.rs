//! Domain services
//!
//! Pure and near-pure services used by the assist pipeline: prompt
//! assembly, query language detection, and the retrying generation engine.

/// Retrying generation engine
pub mod generation;
/// Query language detection
pub mod language;
/// Prompt assembly
pub mod prompt;

pub use generation::{GenerationEngine, GenerationSettings, RetryPolicy};
pub use language::detect_language;
pub use prompt::{PromptAssembler, PromptInput};
