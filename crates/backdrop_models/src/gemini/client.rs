//! Gemini image generation client.

use crate::gemini::{GeminiConfig, GeminiSession, GenerateContentResponse};
use async_trait::async_trait;
use backdrop_core::{GeneratedImage, GenerationParams, ReferenceImage};
use backdrop_error::{BackdropResult, ServiceError, ServiceErrorKind};
use backdrop_interface::ImageBackend;
use backdrop_media::normalize_png;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, instrument};

/// Gemini image model behind the [`ImageBackend`] seam.
///
/// Holds no conversation state of its own, so one client can serve any number
/// of concurrent requests; isolation comes from the per-call [`GeminiSession`].
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiImageClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` if the HTTP client cannot be built.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> BackdropResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ServiceError::new(ServiceErrorKind::ClientCreation(e.to_string())))?;

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            "Created Gemini image client"
        );

        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl ImageBackend for GeminiImageClient {
    type Session = GeminiSession;

    fn new_session(&self) -> GeminiSession {
        let session = GeminiSession::new();
        debug!(session_id = %session.id(), "Started clean Gemini session");
        session
    }

    #[instrument(
        skip(self, session, prompt, reference, params),
        fields(model = %self.config.model(), session_id = %session.id())
    )]
    async fn generate(
        &self,
        session: GeminiSession,
        prompt: &str,
        reference: ReferenceImage,
        params: &GenerationParams,
    ) -> BackdropResult<GeneratedImage> {
        let start = Instant::now();
        let request = session.into_request(prompt, reference, params);

        debug!(
            turns = request.contents.len(),
            aspect_ratio = %request.generation_config.image_config.aspect_ratio,
            "Sending generation request"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ServiceError::new(ServiceErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Gemini API error");
            return Err(ServiceError::new(ServiceErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ServiceError::new(ServiceErrorKind::ResponseParsing(e.to_string()))
        })?;

        let inline = body.first_image().inspect_err(|e| {
            error!(reason = %e.message, text = ?body.text(), "Gemini returned no image");
        })?;

        let raw = STANDARD
            .decode(&inline.data)
            .map_err(|e| ServiceError::new(ServiceErrorKind::Base64Decode(e.to_string())))?;
        let png = normalize_png(&raw)?;

        debug!(
            width = png.width,
            height = png.height,
            bytes = png.bytes.len(),
            duration_ms = start.elapsed().as_millis(),
            "Received generated image"
        );

        Ok(GeneratedImage::new(png.bytes, png.width, png.height))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
