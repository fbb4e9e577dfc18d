//! JSON request and response bodies.
//!
//! Field names are camelCase on the wire.

use backdrop_core::{BatchReport, FALLBACK_KEY, OutcomeStatus, SlideOutcome, SlideRequest};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_key() -> String {
    FALLBACK_KEY.to_string()
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Prompt catalog key
    #[serde(default = "default_key")]
    trope_id: String,
    /// Zero-based slide position
    #[serde(default)]
    slide_index: usize,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            trope_id: default_key(),
            slide_index: 0,
        }
    }
}

impl From<GenerateRequest> for SlideRequest {
    fn from(request: GenerateRequest) -> Self {
        SlideRequest::new(request.trope_id, request.slide_index)
    }
}

/// Successful body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Always true
    pub success: bool,
    /// URL of the stored background
    pub image_url: String,
    /// Requested trope key
    pub trope_id: String,
    /// Requested slide position
    pub slide_index: usize,
}

/// Body of `POST /api/generate-all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BatchRequest {
    /// Trope keys, one per slide, in carousel order
    #[serde(default)]
    tropes: Vec<String>,
}

/// One entry of a batch response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideResult {
    /// Whether the slide was generated and stored
    pub success: bool,
    /// Requested trope key
    pub trope_id: String,
    /// Position in the batch
    pub slide_index: usize,
    /// Present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SlideOutcome> for SlideResult {
    fn from(outcome: &SlideOutcome) -> Self {
        let (image_url, error) = match outcome.status() {
            OutcomeStatus::Generated { image_url } => (Some(image_url.clone()), None),
            OutcomeStatus::Failed { error } => (None, Some(error.clone())),
        };
        Self {
            success: outcome.is_success(),
            trope_id: outcome.trope_id().clone(),
            slide_index: *outcome.slide_index(),
            image_url,
            error,
        }
    }
}

/// Body of `POST /api/generate-all`, always returned with 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Per-slide results in request order
    pub results: Vec<SlideResult>,
    /// Number of requested slides
    pub total: usize,
    /// Number of results with `success: true`
    pub successful: usize,
}

impl From<&BatchReport> for BatchResponse {
    fn from(report: &BatchReport) -> Self {
        Self {
            results: report.outcomes().iter().map(SlideResult::from).collect(),
            total: *report.total(),
            successful: report.successful(),
        }
    }
}

/// Body of `POST /api/generate-background`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Prompt catalog key
    #[serde(default = "default_key")]
    slide_type: String,
    /// Base64 cover image, optionally a `data:` URL
    #[serde(default)]
    cover_data: Option<String>,
}

impl Default for UploadRequest {
    fn default() -> Self {
        Self {
            slide_type: default_key(),
            cover_data: None,
        }
    }
}

/// Successful body of `POST /api/generate-background`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Always true
    pub success: bool,
    /// Base64 PNG of the generated background
    pub image_data: String,
    /// Requested slide type
    pub slide_type: String,
}
