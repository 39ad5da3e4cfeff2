//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vca_domain::constants::{
    GENERATION_MAX_ATTEMPTS, GENERATION_MAX_TOKENS_DEFAULT, GENERATION_MODEL_DEFAULT,
    GENERATION_TEMPERATURE_DEFAULT, GENERATION_TOP_P_DEFAULT, RETRIEVAL_TOP_K_DEFAULT,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    /// Chat completion provider configuration
    #[serde(default)]
    pub chat: ChatConfig,
    /// Corpus retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
    /// Optional log file path (daily rotation)
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Provider name from the embedding registry (e.g., "ollama", "null")
    pub provider: String,
    /// Model name, provider-specific
    pub model: Option<String>,
    /// Base URL for HTTP providers
    pub base_url: Option<String>,
    /// API key for authenticated providers
    pub api_key: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            model: None,
            base_url: None,
            api_key: None,
        }
    }
}

/// Chat completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Provider name from the chat registry (e.g., "groq", "null")
    pub provider: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Base URL override for HTTP providers
    pub base_url: Option<String>,
    /// API key; falls back to the GROQ_API_KEY environment variable
    pub api_key: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token budget
    pub max_tokens: u32,
    /// Nucleus sampling parameter
    pub top_p: f32,
    /// Request incremental (streamed) delivery
    pub stream: bool,
    /// Total generation attempts (initial + retries)
    pub max_attempts: u32,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: GENERATION_MODEL_DEFAULT.to_string(),
            base_url: None,
            api_key: None,
            temperature: GENERATION_TEMPERATURE_DEFAULT,
            max_tokens: GENERATION_MAX_TOKENS_DEFAULT,
            top_p: GENERATION_TOP_P_DEFAULT,
            stream: true,
            max_attempts: GENERATION_MAX_ATTEMPTS,
            timeout_secs: None,
        }
    }
}

/// Corpus retrieval configuration
///
/// At startup the index is loaded from `snapshot_path` when that file
/// exists; otherwise `corpus_dir` (per-species subdirectories of text
/// files) is embedded on the fly; with neither, retrieval is disabled and
/// the pipeline skips the lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Serialized index snapshot, loaded once at startup
    pub snapshot_path: Option<PathBuf>,
    /// Corpus directory to embed when no snapshot is available
    pub corpus_dir: Option<PathBuf>,
    /// Nearest neighbors fetched per query
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            corpus_dir: None,
            top_k: RETRIEVAL_TOP_K_DEFAULT,
        }
    }
}
