//! Gemini image generation.

mod client;
mod config;
mod dto;
mod session;

pub use client::GeminiImageClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part, PromptFeedback, SafetySetting,
};
pub use session::GeminiSession;
