use backdrop_core::{GenerationParams, PersonGeneration, ReferenceImage, SafetyFilterLevel};
use backdrop_interface::ImageBackend;
use backdrop_models::{DEFAULT_MODEL, GeminiConfig, GeminiImageClient, GenerateContentResponse};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;

fn test_client() -> GeminiImageClient {
    let config = GeminiConfig::builder()
        .api_key("test-key")
        .base_url("http://localhost:9/v1beta/")
        .build()
        .expect("Valid GeminiConfig");
    GeminiImageClient::new(config).expect("client")
}

fn reference() -> ReferenceImage {
    ReferenceImage::new(vec![0x89, b'P', b'N', b'G'], 1, 1)
}

#[test]
fn test_config_defaults_and_endpoint() {
    let client = test_client();
    let config = client.config();
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(*config.timeout_secs(), 180);
    assert_eq!(
        config.endpoint(),
        "http://localhost:9/v1beta/models/gemini-3-pro-image-preview:generateContent"
    );
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), DEFAULT_MODEL);
}

#[test]
fn test_config_debug_redacts_key() {
    let config = GeminiConfig::builder()
        .api_key("super-secret")
        .build()
        .expect("Valid GeminiConfig");
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn test_config_requires_api_key() {
    assert!(GeminiConfig::builder().build().is_err());
}

#[test]
fn test_fresh_session_request_carries_single_turn() {
    let client = test_client();
    let session = client.new_session();
    assert_eq!(session.turns(), 0);

    let request = session.into_request("Dark gradient", reference(), &GenerationParams::default());
    let value = serde_json::to_value(&request).expect("serialize request");

    let contents = value["contents"].as_array().expect("contents");
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[0]["parts"][0]["text"], "Dark gradient");
    assert_eq!(contents[0]["parts"][1]["inlineData"]["mimeType"], "image/png");
    assert_eq!(
        contents[0]["parts"][1]["inlineData"]["data"],
        STANDARD.encode([0x89, b'P', b'N', b'G'])
    );

    assert_eq!(value["generationConfig"]["responseModalities"], json!(["IMAGE"]));
    assert_eq!(value["generationConfig"]["imageConfig"]["aspectRatio"], "4:5");
    assert_eq!(
        value["generationConfig"]["imageConfig"]["personGeneration"],
        "ALLOW_ALL"
    );

    let safety = value["safetySettings"].as_array().expect("safety settings");
    assert_eq!(safety.len(), 4);
    assert!(safety.iter().all(|s| s["threshold"] == "BLOCK_ONLY_HIGH"));
}

#[test]
fn test_sessions_are_distinct() {
    let client = test_client();
    let first = client.new_session();
    let second = client.new_session();
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_policy_parameters_flow_into_request() {
    let params = GenerationParams::new(SafetyFilterLevel::BlockNone, PersonGeneration::DontAllow);
    let request = test_client()
        .new_session()
        .into_request("p", reference(), &params);

    assert!(
        request
            .safety_settings
            .iter()
            .all(|s| s.threshold == "BLOCK_NONE")
    );
    assert_eq!(
        request.generation_config.image_config.person_generation.as_deref(),
        Some("DONT_ALLOW")
    );
}

#[test]
fn test_first_image_found_after_text_part() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "Here is your background." },
                    { "inlineData": { "mimeType": "image/jpeg", "data": "AAAA" } }
                ]
            },
            "finishReason": "STOP"
        }]
    }))
    .expect("parse response");

    let image = response.first_image().expect("image present");
    assert_eq!(image.mime_type, "image/jpeg");
    assert_eq!(image.data, "AAAA");
    assert_eq!(response.text().as_deref(), Some("Here is your background."));
}

#[test]
fn test_empty_candidates_are_empty_generation() {
    let response: GenerateContentResponse =
        serde_json::from_value(json!({ "candidates": [] })).expect("parse response");
    let err = response.first_image().expect_err("no image");
    assert_eq!(err.message, "No image generated");
}

#[test]
fn test_text_only_answer_is_empty_generation() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "I cannot draw that." }] },
            "finishReason": "IMAGE_SAFETY"
        }]
    }))
    .expect("parse response");

    let err = response.first_image().expect_err("no image");
    assert_eq!(err.message, "No image generated (finish reason: IMAGE_SAFETY)");
}

#[test]
fn test_blocked_prompt_reports_reason() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "promptFeedback": { "blockReason": "SAFETY" }
    }))
    .expect("parse response");

    let err = response.first_image().expect_err("blocked");
    assert!(err.message.starts_with("No image generated"));
    assert!(err.message.contains("SAFETY"));
}
