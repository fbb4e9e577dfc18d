//! Test utilities for API tests.

use async_trait::async_trait;
use backdrop_core::{GeneratedImage, GenerationParams, ReferenceImage, ReferenceSource};
use backdrop_error::{BackdropResult, EmptyGenerationError};
use backdrop_generation::CarouselGenerator;
use backdrop_interface::ImageBackend;
use backdrop_prompts::{PromptCatalog, PromptPreset};
use backdrop_server::AppState;
use axum::Router;
use backdrop_storage::FilesystemStore;
use image::{ImageFormat, Rgb, RgbImage};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Backend that returns no image for selected prompts.
#[derive(Debug, Clone, Default)]
pub struct StubBackend {
    empty_for: Arc<HashSet<String>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers without an image whenever the prompt equals one of `prompts`.
    pub fn empty_for(prompts: impl IntoIterator<Item = String>) -> Self {
        Self {
            empty_for: Arc::new(prompts.into_iter().collect()),
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl ImageBackend for StubBackend {
    type Session = ();

    fn new_session(&self) -> Self::Session {}

    async fn generate(
        &self,
        _session: (),
        prompt: &str,
        _reference: ReferenceImage,
        _params: &GenerationParams,
    ) -> BackdropResult<GeneratedImage> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());
        if self.empty_for.contains(prompt) {
            return Err(EmptyGenerationError::new("No image generated").into());
        }
        Ok(GeneratedImage::new(png_bytes(4, 5), 4, 5))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-image"
    }
}

/// Handler state over a filesystem store rooted at `dir`.
#[allow(dead_code)]
pub fn app_state(
    backend: StubBackend,
    dir: &Path,
    cover: Option<ReferenceSource>,
) -> AppState<StubBackend, FilesystemStore> {
    let generator = CarouselGenerator::new(
        backend,
        FilesystemStore::new(dir, "/outputs"),
        Arc::new(PromptCatalog::builtin(PromptPreset::Tropes)),
    );
    let generator = match cover {
        Some(cover) => generator.with_reference(cover),
        None => generator,
    };
    AppState::new(generator)
}

/// A real PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([20, 120, 200]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode png fixture");
    buffer.into_inner()
}

/// Serves `router` on an ephemeral local port and returns its base URL.
#[allow(dead_code)]
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{}", addr)
}
