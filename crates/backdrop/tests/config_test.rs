use backdrop::{
    BackdropConfig, BackdropErrorKind, PersonGeneration, PromptPreset, SafetyFilterLevel,
    build_generator, prompt_catalog,
};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_defaults_without_file_contents() {
    let config = BackdropConfig::from_toml_str("").expect("empty config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 5050);
    assert_eq!(config.gemini.api_key, None);
    assert_eq!(config.gemini.model, "gemini-3-pro-image-preview");
    assert_eq!(config.gemini.timeout_secs, 180);
    assert_eq!(
        config.generation.safety_filter_level,
        SafetyFilterLevel::BlockOnlyHigh
    );
    assert_eq!(config.generation.person_generation, PersonGeneration::AllowAll);
    assert_eq!(config.storage.output_dir, PathBuf::from("outputs"));
    assert_eq!(config.storage.url_prefix, "/outputs");
    assert_eq!(config.reference.cover_path, None);
    assert_eq!(config.prompts.preset, PromptPreset::Tropes);
    assert_eq!(config.prompts.file, None);
}

#[test]
fn test_full_configuration() {
    let config = BackdropConfig::from_toml_str(
        r#"
[server]
host = "127.0.0.1"
port = 8080

[gemini]
api_key = "test-key"
model = "gemini-2.5-flash-image"
timeout_secs = 60

[generation]
safety_filter_level = "block_medium_and_above"
person_generation = "dont_allow"

[storage]
output_dir = "/tmp/backdrop"
url_prefix = "/media"

[reference]
cover_path = "covers/book.png"

[prompts]
preset = "slide_types"
"#,
    )
    .expect("valid config");

    assert_eq!(
        config.server.socket_addr().expect("address").to_string(),
        "127.0.0.1:8080"
    );
    assert_eq!(config.gemini.model, "gemini-2.5-flash-image");
    assert_eq!(
        config.generation.safety_filter_level,
        SafetyFilterLevel::BlockMediumAndAbove
    );
    assert_eq!(config.generation.person_generation, PersonGeneration::DontAllow);
    assert_eq!(config.storage.url_prefix, "/media");
    assert_eq!(
        config.reference.cover_path,
        Some(PathBuf::from("covers/book.png"))
    );
    assert_eq!(config.prompts.preset, PromptPreset::SlideTypes);

    let gemini = config.gemini_config().expect("gemini config");
    assert_eq!(gemini.api_key(), "test-key");
    assert_eq!(gemini.timeout_secs(), &60);
    assert!(gemini.endpoint().ends_with("/models/gemini-2.5-flash-image:generateContent"));
}

#[test]
fn test_missing_api_key_is_config_error() {
    let config = BackdropConfig::from_toml_str("").expect("empty config");

    let err = config.gemini_config().expect_err("no api key");
    assert!(matches!(err.kind(), BackdropErrorKind::Config(_)));
    assert!(err.summary().contains("GEMINI_API_KEY"));

    let err = build_generator(&config).expect_err("generator without api key");
    assert!(matches!(err.kind(), BackdropErrorKind::Config(_)));
}

#[test]
fn test_api_key_fallback_only_fills_missing_key() {
    let config = BackdropConfig::from_toml_str("")
        .expect("empty config")
        .with_api_key_fallback(Some("from-env".to_string()));
    assert_eq!(config.gemini.api_key.as_deref(), Some("from-env"));

    let config = BackdropConfig::from_toml_str("[gemini]\napi_key = \"from-file\"\n")
        .expect("config")
        .with_api_key_fallback(Some("from-env".to_string()));
    assert_eq!(config.gemini.api_key.as_deref(), Some("from-file"));

    let config = BackdropConfig::from_toml_str("")
        .expect("empty config")
        .with_api_key_fallback(Some("   ".to_string()));
    assert_eq!(config.gemini.api_key, None);
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = BackdropConfig::from_toml_str("[generation]\nsafety_filter_level = \"strict\"\n")
        .expect_err("unknown safety level");
    assert!(matches!(err.kind(), BackdropErrorKind::Config(_)));

    let err = BackdropConfig::from_toml_str("[server]\nport = \"many\"\n")
        .expect_err("non-numeric port");
    assert!(matches!(err.kind(), BackdropErrorKind::Config(_)));
}

#[test]
fn test_host_name_is_not_a_socket_address() {
    let config = BackdropConfig::from_toml_str("[server]\nhost = \"localhost\"\n").expect("config");
    let err = config.server.socket_addr().expect_err("not an ip");
    assert!(matches!(err.kind(), BackdropErrorKind::Config(_)));
}

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[gemini]\napi_key = \"file-key\"\n\n[server]\nport = 6060").expect("write");

    let config = BackdropConfig::load(Some(file.path())).expect("loaded");
    assert_eq!(config.gemini.api_key.as_deref(), Some("file-key"));
    assert_eq!(config.server.port, 6060);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = BackdropConfig::load(Some(dir.path().join("absent.toml").as_path()))
        .expect_err("missing file");
    assert!(matches!(err.kind(), BackdropErrorKind::Config(_)));
}

#[test]
fn test_prompt_catalog_from_file_replaces_preset() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prompts.toml");
    std::fs::write(
        &path,
        "[prompts]\ndefault = \"plain backdrop\"\nsale = \"sale backdrop\"\n",
    )
    .expect("write catalog");

    let config = BackdropConfig::from_toml_str(&format!(
        "[prompts]\npreset = \"slide_types\"\nfile = {:?}\n",
        path.display().to_string()
    ))
    .expect("config");

    let catalog = prompt_catalog(&config.prompts).expect("catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.lookup("sale"), "sale backdrop");
    assert_eq!(catalog.lookup("hook"), "plain backdrop");
}

#[test]
fn test_build_generator_wires_configuration() {
    let config = BackdropConfig::from_toml_str(
        r#"
[gemini]
api_key = "test-key"

[generation]
person_generation = "allow_adult"

[reference]
cover_path = "cover.png"

[prompts]
preset = "slide_types"
"#,
    )
    .expect("config");

    let generator = build_generator(&config).expect("generator");

    assert!(generator.catalog().contains("cta"));
    assert_eq!(
        *generator.params().person_generation(),
        PersonGeneration::AllowAdult
    );
    assert_eq!(*generator.params().aspect_ratio(), "4:5");
    assert!(generator.reference().is_some());
    assert_eq!(generator.store().url_for("slide_1_cta.png"), "/outputs/slide_1_cta.png");
}

#[test]
fn test_debug_output_redacts_api_key() {
    let config = BackdropConfig::from_toml_str("[gemini]\napi_key = \"super-secret\"\n")
        .expect("config");
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
