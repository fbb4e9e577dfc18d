//! Backdrop: carousel backgrounds composed around a book cover.
//!
//! Each slide of a social media carousel gets a background generated by a
//! Gemini image model from a trope-specific prompt, with the book cover
//! composited in. This crate ties the workspace together: it loads
//! [`BackdropConfig`], wires a [`CarouselGenerator`] over the Gemini client
//! and the filesystem store, and re-exports the public API of every
//! component crate.
//!
//! # Example
//!
//! ```no_run
//! use backdrop::{BackdropConfig, SlideRequest, build_generator};
//!
//! # async fn run() -> backdrop::BackdropResult<()> {
//! let config = BackdropConfig::load(None)?;
//! let generator = build_generator(&config)?;
//! let stored = generator.run_single(&SlideRequest::new("A4", 0)).await?;
//! println!("{}", stored.url());
//! # Ok(())
//! # }
//! ```

mod app;
mod config;

pub use app::{GeminiGenerator, build_generator, prompt_catalog};
pub use config::{
    BackdropConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX, GEMINI_API_KEY_VAR, GeminiSettings,
    GenerationSettings, PromptSettings, ReferenceSettings, ServerSettings, StorageSettings,
};

pub use backdrop_core::*;
pub use backdrop_error::*;
pub use backdrop_generation::CarouselGenerator;
pub use backdrop_interface::{ImageBackend, ImageStore};
pub use backdrop_media::{ReferencePreparer, decode_base64, normalize_png};
pub use backdrop_models::{GeminiConfig, GeminiImageClient, GeminiSession};
pub use backdrop_prompts::{PromptCatalog, PromptPreset};
pub use backdrop_server::{AppState, BatchResponse, SlideResult, create_router, serve};
pub use backdrop_storage::{FilesystemStore, output_file_name};
