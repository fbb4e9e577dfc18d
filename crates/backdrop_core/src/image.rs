//! Generated and stored images.

use derive_getters::Getters;
use std::path::PathBuf;

/// A generated background, already re-encoded as PNG.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct GeneratedImage {
    /// PNG-encoded bytes
    png: Vec<u8>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl GeneratedImage {
    /// Consumes the image, returning the PNG bytes.
    pub fn into_png(self) -> Vec<u8> {
        self.png
    }
}

/// Where a persisted background ended up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct StoredImage {
    /// Output file name, e.g. `slide_1_A4.png`
    #[new(into)]
    file_name: String,
    /// Full filesystem path
    path: PathBuf,
    /// URL the file is served under, e.g. `/outputs/slide_1_A4.png`
    #[new(into)]
    url: String,
}
