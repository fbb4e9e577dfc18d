//! Gemini conversation sessions.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerationConfig, ImageConfig, Part, SafetySetting,
};
use backdrop_core::{GenerationParams, ReferenceImage};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use uuid::Uuid;

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Conversation state for one generation call.
///
/// Gemini is stateless over REST; the conversation is whatever history the
/// request carries. A session starts empty and is consumed when its request
/// is built, so no prompt or image from one slide can leak into another.
#[derive(Debug)]
pub struct GeminiSession {
    id: Uuid,
    history: Vec<Content>,
}

impl GeminiSession {
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
        }
    }

    /// Unique identifier, for logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of turns carried by this session.
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Appends the prompt and reference as a user turn and builds the request.
    pub fn into_request(
        mut self,
        prompt: &str,
        reference: ReferenceImage,
        params: &GenerationParams,
    ) -> GenerateContentRequest {
        let mime_type = reference.mime_type();
        let data = STANDARD.encode(reference.into_png());

        self.history.push(Content {
            role: Some("user".to_string()),
            parts: vec![Part::text(prompt), Part::inline(mime_type, data)],
        });

        let threshold = params.safety_filter_level().api_threshold();
        let safety_settings = HARM_CATEGORIES
            .iter()
            .map(|category| SafetySetting {
                category: category.to_string(),
                threshold: threshold.to_string(),
            })
            .collect();

        GenerateContentRequest {
            contents: self.history,
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: params.aspect_ratio().to_string(),
                    person_generation: Some(params.person_generation().api_value().to_string()),
                },
            },
            safety_settings,
        }
    }
}
