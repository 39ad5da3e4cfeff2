//! Infrastructure layer for the veterinary chat assistant
//!
//! Cross-cutting technical concerns: configuration loading and validation,
//! structured logging, corpus/index loading, and the bootstrap that wires
//! providers into the assist pipeline.

/// Bootstrap: providers -> services -> application context
pub mod bootstrap;
/// Configuration types and loader
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Corpus loading and index snapshots
pub mod corpus;
/// Structured logging with tracing
pub mod logging;

pub use bootstrap::{bootstrap, AppContext};
pub use config::{AppConfig, ConfigLoader};
