//! Gemini client configuration.

use derive_getters::Getters;

/// Image model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini image client.
///
/// There is no default API key; it must come from configuration.
#[derive(Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// API base URL, without a trailing `/models`
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Request timeout in seconds
    #[builder(default = "180")]
    timeout_secs: u64,
}

impl GeminiConfig {
    /// Creates a new builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
