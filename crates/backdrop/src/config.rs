//! Process configuration.
//!
//! Values come from an optional TOML file, overridden by `BACKDROP__`
//! environment variables (`BACKDROP__SERVER__PORT=8080`). Every field except
//! the Gemini API key has a default.

use backdrop_core::{PersonGeneration, SafetyFilterLevel};
use backdrop_error::{BackdropResult, ConfigError};
use backdrop_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use backdrop_prompts::PromptPreset;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "backdrop.toml";

/// Prefix of overriding environment variables.
pub const ENV_PREFIX: &str = "BACKDROP";

/// Conventional variable consulted when `gemini.api_key` is not set.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackdropConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerSettings,
    /// Gemini API access
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Parameters sent with every generation
    #[serde(default)]
    pub generation: GenerationSettings,
    /// Output location
    #[serde(default)]
    pub storage: StorageSettings,
    /// Book cover composited into every background
    #[serde(default)]
    pub reference: ReferenceSettings,
    /// Prompt catalog selection
    #[serde(default)]
    pub prompts: PromptSettings,
}

impl BackdropConfig {
    /// Loads configuration from `path` (or [`DEFAULT_CONFIG_FILE`]) and the
    /// environment.
    ///
    /// An explicit `path` must exist; the default file is optional. When no
    /// API key is configured, [`GEMINI_API_KEY_VAR`] is consulted.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file is missing or malformed, or a
    /// value has the wrong type.
    #[instrument(skip(path), fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> BackdropResult<Self> {
        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let raw = ::config::Config::builder()
            .add_source(
                ::config::File::new(&file.to_string_lossy(), ::config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to load configuration from {}: {}",
                    file.display(),
                    e
                ))
            })?;

        let config = Self::deserialize_from(raw)?
            .with_api_key_fallback(std::env::var(GEMINI_API_KEY_VAR).ok());
        debug!(
            model = %config.gemini.model,
            output_dir = %config.storage.output_dir.display(),
            preset = %config.prompts.preset,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text alone, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` on malformed TOML or mistyped values.
    pub fn from_toml_str(source: &str) -> BackdropResult<Self> {
        let raw = ::config::Config::builder()
            .add_source(::config::File::from_str(source, ::config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Self::deserialize_from(raw)
    }

    fn deserialize_from(raw: ::config::Config) -> BackdropResult<Self> {
        Ok(raw
            .try_deserialize::<Self>()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?)
    }

    /// Fills in the API key from `fallback` when none is configured.
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        if self.gemini.api_key.is_none() {
            self.gemini.api_key = fallback.filter(|key| !key.trim().is_empty());
        }
        self
    }

    /// Gemini client configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if no API key is configured.
    pub fn gemini_config(&self) -> BackdropResult<GeminiConfig> {
        let api_key = self
            .gemini
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "Missing Gemini API key: set gemini.api_key, {}__GEMINI__API_KEY or {}",
                    ENV_PREFIX, GEMINI_API_KEY_VAR
                ))
            })?;

        Ok(GeminiConfig::builder()
            .api_key(api_key)
            .model(self.gemini.model.clone())
            .base_url(self.gemini.base_url.clone())
            .timeout_secs(self.gemini.timeout_secs)
            .build()
            .expect("Valid GeminiConfig"))
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    /// Address the server binds.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `host` is not an IP address.
    pub fn socket_addr(&self) -> BackdropResult<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Invalid server address {}:{}: {}",
                    self.host, self.port, e
                ))
            })?)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5050
}

/// Gemini API settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// API key; never defaulted
    #[serde(default)]
    pub api_key: Option<String>,
    /// Image model
    #[serde(default = "default_model")]
    pub model: String,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    180
}

/// Policies sent with every generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Safety threshold
    #[serde(default)]
    pub safety_filter_level: SafetyFilterLevel,
    /// Person generation policy
    #[serde(default)]
    pub person_generation: PersonGeneration,
}

/// Where generated backgrounds are written and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Output directory, created on first write
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// URL prefix outputs are served under
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            url_prefix: default_url_prefix(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_url_prefix() -> String {
    "/outputs".to_string()
}

/// Book cover used by `/api/generate`, `/api/generate-all` and the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSettings {
    /// Cover image path; no default
    #[serde(default)]
    pub cover_path: Option<PathBuf>,
}

/// Prompt catalog selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSettings {
    /// Built-in prompt set
    #[serde(default)]
    pub preset: PromptPreset,
    /// TOML catalog replacing the preset
    #[serde(default)]
    pub file: Option<PathBuf>,
}
