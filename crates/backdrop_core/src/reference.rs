//! Reference cover images.

use derive_getters::Getters;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the reference cover comes from.
///
/// Cloning is cheap, so the orchestrator can re-prepare the same cover for
/// every call in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    /// Image file on disk
    Path(PathBuf),
    /// Raw encoded image bytes
    Bytes(Arc<[u8]>),
    /// Base64-encoded image bytes, as uploaded by clients
    Base64(String),
}

impl ReferenceSource {
    /// Short description for logs that never includes image data.
    pub fn describe(&self) -> String {
        match self {
            ReferenceSource::Path(path) => format!("path:{}", path.display()),
            ReferenceSource::Bytes(bytes) => format!("bytes:{}", bytes.len()),
            ReferenceSource::Base64(data) => format!("base64:{}", data.len()),
        }
    }
}

impl From<PathBuf> for ReferenceSource {
    fn from(path: PathBuf) -> Self {
        ReferenceSource::Path(path)
    }
}

impl From<Vec<u8>> for ReferenceSource {
    fn from(bytes: Vec<u8>) -> Self {
        ReferenceSource::Bytes(bytes.into())
    }
}

/// A decoded cover, normalized to PNG.
///
/// Deliberately not `Clone`: each generation call owns the handle it was
/// given and consumes it.
#[derive(Debug, PartialEq, Eq, Getters)]
pub struct ReferenceImage {
    /// PNG-encoded bytes
    png: Vec<u8>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl ReferenceImage {
    /// Wraps PNG bytes with their decoded dimensions.
    pub fn new(png: Vec<u8>, width: u32, height: u32) -> Self {
        Self { png, width, height }
    }

    /// MIME type of the payload.
    pub fn mime_type(&self) -> &'static str {
        "image/png"
    }

    /// Consumes the handle, returning the PNG bytes.
    pub fn into_png(self) -> Vec<u8> {
        self.png
    }
}
