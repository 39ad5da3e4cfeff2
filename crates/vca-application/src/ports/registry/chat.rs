//! Chat Completion Provider Registry
//!
//! Auto-registration system for chat completion providers, mirroring the
//! embedding registry: providers submit entries via linkme distributed
//! slices and are resolved by configured name at startup.

use std::collections::HashMap;
use std::sync::Arc;

use vca_domain::ports::providers::ChatCompletionProvider;

/// Configuration for chat provider creation
#[derive(Debug, Clone, Default)]
pub struct ChatProviderConfig {
    /// Provider name (e.g., "groq", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ChatProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Registry entry for chat completion providers
pub struct ChatProviderEntry {
    /// Unique provider name (e.g., "groq", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instances
    pub factory: fn(&ChatProviderConfig) -> Result<Arc<dyn ChatCompletionProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static CHAT_PROVIDERS: [ChatProviderEntry] = [..];

/// Resolve chat provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn ChatCompletionProvider>)` - Created provider instance
/// * `Err(String)` - Provider not found or creation failed
pub fn resolve_chat_provider(
    config: &ChatProviderConfig,
) -> Result<Arc<dyn ChatCompletionProvider>, String> {
    for entry in CHAT_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CHAT_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown chat provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered chat providers as (name, description) pairs
pub fn list_chat_providers() -> Vec<(&'static str, &'static str)> {
    CHAT_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
