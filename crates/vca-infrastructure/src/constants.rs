//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "VCA";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vca.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vca";

/// Environment variable consulted for the chat API key when the
/// configuration does not carry one
pub const CHAT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable controlling the tracing filter
pub const LOG_FILTER_ENV: &str = "VCA_LOG";
