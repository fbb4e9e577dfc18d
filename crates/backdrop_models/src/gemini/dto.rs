//! Data transfer objects for the Gemini `generateContent` API.

use backdrop_error::EmptyGenerationError;
use serde::{Deserialize, Serialize};

/// Conversation turn used in both requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A text or inline media part. Exactly one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Base64 media content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// Creates an inline media part.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64 inline payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Top-level `generateContent` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation, oldest turn first
    pub contents: Vec<Content>,
    /// Output configuration
    pub generation_config: GenerationConfig,
    /// Content policy thresholds
    pub safety_settings: Vec<SafetySetting>,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested output modalities
    pub response_modalities: Vec<String>,
    /// Image output settings
    pub image_config: ImageConfig,
}

/// Image output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio, e.g. "4:5"
    pub aspect_ratio: String,
    /// Person generation policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_generation: Option<String>,
}

/// Threshold for one harm category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    /// Harm category
    pub category: String,
    /// Blocking threshold
    pub threshold: String,
}

/// Top-level `generateContent` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates; absent when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Present when the prompt itself was rejected
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One generated candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped, e.g. "STOP" or "IMAGE_SAFETY"
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Returns the first inline image across all candidates.
    ///
    /// # Errors
    ///
    /// Returns an `EmptyGenerationError` when no candidate carries an image,
    /// mentioning the block or finish reason when the service gave one.
    pub fn first_image(&self) -> Result<&InlineData, EmptyGenerationError> {
        let image = self
            .candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.inline_data.as_ref())
            .find(|data| data.mime_type.starts_with("image/") && !data.data.is_empty());

        match image {
            Some(data) => Ok(data),
            None => Err(EmptyGenerationError::new(self.empty_reason())),
        }
    }

    fn empty_reason(&self) -> String {
        let block_reason = self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref());
        let finish_reason = self
            .candidates
            .iter()
            .filter_map(|candidate| candidate.finish_reason.as_deref())
            .find(|reason| *reason != "STOP");

        match (block_reason, finish_reason) {
            (Some(reason), _) => format!("No image generated (prompt blocked: {})", reason),
            (None, Some(reason)) => format!("No image generated (finish reason: {})", reason),
            (None, None) => "No image generated".to_string(),
        }
    }

    /// Concatenated text parts, useful when the model answers in prose instead of an image.
    pub fn text(&self) -> Option<String> {
        let text: Vec<&str> = self
            .candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text.join("\n"))
        }
    }
}
