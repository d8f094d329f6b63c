//! Client configuration loading.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vasari_error::{ConfigError, VasariError, VasariResult};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_KEY";

/// Default chat completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Configuration for a completion client.
///
/// The API key is never stored in config files; it comes from the
/// [`API_KEY_VAR`] environment variable or an explicit `with_api_key`
/// override. Everything else can be set per deployment in a small TOML
/// file:
///
/// ```toml
/// model = "gpt-4"
/// timeout_secs = 30
/// max_retries = 3
/// ```
///
/// # Examples
///
/// ```
/// use vasari_models::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_api_key("sk-test")
///     .with_model("gpt-4o-mini");
/// assert_eq!(config.model(), "gpt-4o-mini");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct ClientConfig {
    /// API key for bearer authentication
    #[serde(skip)]
    api_key: String,
    /// Model identifier sent with every request
    model: String,
    /// Chat completions endpoint URL
    base_url: String,
    /// Per-call deadline in seconds
    timeout_secs: u64,
    /// Attempts per call, counting the first
    max_retries: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

impl ClientConfig {
    /// Read the API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the variable is unset or empty, so a
    /// missing credential fails at startup rather than on the first call.
    pub fn api_key_from_env() -> VasariResult<String> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(VasariError::from(ConfigError::new(format!(
                "{} environment variable not set",
                API_KEY_VAR
            )))),
        }
    }

    /// Default configuration with the API key taken from the environment.
    pub fn from_env() -> VasariResult<Self> {
        Ok(Self::default().with_api_key(Self::api_key_from_env()?))
    }

    /// Load configuration from a TOML file.
    ///
    /// Missing fields keep their defaults. The file cannot supply the API
    /// key; resolve it separately.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> VasariResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            VasariError::from(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        toml::from_str(&content).map_err(|e| {
            VasariError::from(ConfigError::new(format!("Failed to parse config: {}", e)))
        })
    }
}
