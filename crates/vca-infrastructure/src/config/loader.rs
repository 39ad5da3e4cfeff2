//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.
//!
//! Uses Figment for configuration management.

use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use vca_domain::constants::GENERATION_MAX_TOKENS_CEILING;
use vca_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CHAT_API_KEY_ENV, CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::logging::log_config_loaded;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `VCA_SERVER_PORT`)
    ///
    /// The chat API key additionally falls back to `GROQ_API_KEY` when no
    /// source supplied one.
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            // Try to find default config file
            if let Some(default_path) = Self::find_default_config_path() {
                if default_path.exists() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Add environment variables
        // Uses underscore as separator for nested keys (e.g., VCA_SERVER_PORT)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        // Extract and deserialize configuration
        let mut app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::configuration_with_source("Failed to extract configuration", e))?;

        // The chat API key is a secret; prefer the dedicated env var over
        // writing it into a config file.
        if app_config.chat.api_key.is_none() {
            if let Ok(key) = env::var(CHAT_API_KEY_ENV) {
                if !key.is_empty() {
                    app_config.chat.api_key = Some(key);
                }
            }
        }

        // Validate configuration
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::configuration_with_source("Failed to serialize config to TOML", e))?;

        std::fs::write(path.as_ref(), toml_string)?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        // Try various common config file locations
        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_chat_config(config)?;
    validate_retrieval_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_chat_config(config: &AppConfig) -> Result<()> {
    if config.chat.max_attempts == 0 {
        return Err(Error::configuration(
            "Generation attempt bound cannot be 0",
        ));
    }
    if config.chat.max_tokens == 0 || config.chat.max_tokens > GENERATION_MAX_TOKENS_CEILING {
        return Err(Error::configuration(format!(
            "Completion token budget must be in 1..={GENERATION_MAX_TOKENS_CEILING}"
        )));
    }
    if !(0.0..=2.0).contains(&config.chat.temperature) {
        return Err(Error::configuration(
            "Sampling temperature must be between 0.0 and 2.0",
        ));
    }
    Ok(())
}

fn validate_retrieval_config(config: &AppConfig) -> Result<()> {
    if config.retrieval.top_k == 0 {
        return Err(Error::configuration(
            "Retrieval top_k cannot be 0; omit retrieval sources to disable lookup",
        ));
    }
    Ok(())
}
