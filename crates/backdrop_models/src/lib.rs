//! Image generation provider integrations for Backdrop.
//!
//! Currently a single provider: Gemini image models over the
//! `generateContent` REST endpoint.

mod gemini;

pub use gemini::{
    Candidate, Content, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder,
    GeminiImageClient, GeminiSession, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, ImageConfig, InlineData, Part, PromptFeedback, SafetySetting,
};
