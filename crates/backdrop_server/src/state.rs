//! Shared handler state.

use backdrop_generation::CarouselGenerator;
use backdrop_interface::{ImageBackend, ImageStore};
use std::sync::Arc;

/// State shared by every request handler.
///
/// The generator holds no per-request state, so concurrent requests share
/// one instance.
pub struct AppState<B: ImageBackend, S: ImageStore> {
    generator: Arc<CarouselGenerator<B, S>>,
}

impl<B: ImageBackend, S: ImageStore> AppState<B, S> {
    /// Wraps a configured generator.
    pub fn new(generator: CarouselGenerator<B, S>) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Returns the generator.
    pub fn generator(&self) -> &CarouselGenerator<B, S> {
        &self.generator
    }
}

// Derived Clone would require B: Clone and S: Clone.
impl<B: ImageBackend, S: ImageStore> Clone for AppState<B, S> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}
