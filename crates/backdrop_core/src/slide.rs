//! Slide requests.

use derive_getters::Getters;

/// One slide to generate: which trope to render and where it sits in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct SlideRequest {
    /// Prompt catalog key, e.g. "A4" or "cta"
    #[new(into)]
    trope_id: String,
    /// Zero-based position in the carousel
    slide_index: usize,
}

impl SlideRequest {
    /// One-based slide number used in output names and logs.
    pub fn slide_number(&self) -> usize {
        self.slide_index + 1
    }
}
