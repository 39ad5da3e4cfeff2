//! Configuration
//!
//! Typed configuration sections with serde defaults, loaded through figment
//! (defaults -> TOML file -> environment) and validated after extraction.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, ChatConfig, EmbeddingConfig, LoggingConfig, RetrievalConfig, ServerConfig,
};
