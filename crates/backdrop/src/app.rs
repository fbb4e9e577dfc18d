//! Wiring configuration into a generator.

use crate::config::{BackdropConfig, PromptSettings};
use backdrop_core::{GenerationParams, ReferenceSource};
use backdrop_error::BackdropResult;
use backdrop_generation::CarouselGenerator;
use backdrop_models::GeminiImageClient;
use backdrop_prompts::PromptCatalog;
use backdrop_storage::FilesystemStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Generator over the Gemini client and the filesystem store.
pub type GeminiGenerator = CarouselGenerator<GeminiImageClient, FilesystemStore>;

/// Prompt catalog selected by `settings`: the file if one is set, otherwise
/// the preset.
///
/// # Errors
///
/// Returns a `ConfigError` if the catalog file cannot be read or is invalid.
pub fn prompt_catalog(settings: &PromptSettings) -> BackdropResult<PromptCatalog> {
    match &settings.file {
        Some(path) => PromptCatalog::from_file(path),
        None => Ok(PromptCatalog::builtin(settings.preset)),
    }
}

/// Builds a generator from configuration.
///
/// A missing cover is not an error here: uploads still work, while
/// generation from the configured cover fails per request.
///
/// # Errors
///
/// Returns a `ConfigError` without an API key or with an invalid prompt
/// catalog, or a `ServiceError` if the HTTP client cannot be built.
pub fn build_generator(config: &BackdropConfig) -> BackdropResult<GeminiGenerator> {
    let catalog = prompt_catalog(&config.prompts)?;
    let backend = GeminiImageClient::new(config.gemini_config()?)?;
    let store = FilesystemStore::new(
        config.storage.output_dir.clone(),
        config.storage.url_prefix.clone(),
    );
    let params = GenerationParams::new(
        config.generation.safety_filter_level,
        config.generation.person_generation,
    );

    info!(
        model = %config.gemini.model,
        prompts = catalog.len(),
        output_dir = %config.storage.output_dir.display(),
        "Generator ready"
    );

    let generator = CarouselGenerator::new(backend, store, Arc::new(catalog)).with_params(params);
    Ok(match &config.reference.cover_path {
        Some(path) => generator.with_reference(ReferenceSource::Path(path.clone())),
        None => {
            warn!("No reference.cover_path configured; only uploads will succeed");
            generator
        }
    })
}
