//! Image generation backend trait.

use async_trait::async_trait;
use backdrop_core::{GeneratedImage, GenerationParams, ReferenceImage};
use backdrop_error::BackdropResult;

/// An external image generation capability.
///
/// Generation runs inside a session. Image services keep conversational
/// context between calls, so every independent slide must start from a fresh
/// session obtained with [`new_session`](ImageBackend::new_session).
/// [`generate`](ImageBackend::generate) takes the session by value, which
/// makes reusing a session across slides a compile error rather than a
/// convention.
///
/// Implementations must be safe to share between concurrent HTTP requests.
/// Any state tied to a conversation belongs in [`Self::Session`], never in
/// the backend itself.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Conversation state for exactly one generation call.
    type Session: Send;

    /// Returns a clean session with no prior prompts or images.
    ///
    /// Always succeeds and has no side effects on other sessions.
    fn new_session(&self) -> Self::Session;

    /// Generates one image from `prompt`, compositing `reference` into it.
    ///
    /// Returns PNG bytes on success. An answer without any image is an
    /// `EmptyGeneration` error, distinct from a `Service` error. No retries
    /// happen here.
    async fn generate(
        &self,
        session: Self::Session,
        prompt: &str,
        reference: ReferenceImage,
        params: &GenerationParams,
    ) -> BackdropResult<GeneratedImage>;

    /// Returns the provider name.
    fn provider_name(&self) -> &'static str;

    /// Returns the model identifier.
    fn model_name(&self) -> &str;
}
