//! Provider-level constants

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Default Ollama server URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default Ollama embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Embedding request timeout in seconds
pub const EMBEDDING_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Dimension of nomic-embed-text vectors
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Dimension of all-minilm vectors
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Dimension of mxbai-embed-large vectors
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Dimension assumed for unknown Ollama models
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Dimension of the deterministic null embeddings
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Dimension of the default FastEmbed model (AllMiniLML6V2)
pub const EMBEDDING_DIMENSION_FASTEMBED_DEFAULT: usize = 384;

// ============================================================================
// CHAT PROVIDER CONSTANTS
// ============================================================================

/// Default Groq OpenAI-compatible API base URL
pub const GROQ_DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Chat completion request timeout in seconds
pub const CHAT_REQUEST_TIMEOUT_SECS: u64 = 60;
