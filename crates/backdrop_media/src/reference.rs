//! Reference cover preparation.

use crate::png::{decode_base64, normalize_png};
use backdrop_core::{ReferenceImage, ReferenceSource};
use backdrop_error::{BackdropResult, DecodeError};
use tracing::{debug, instrument};

/// Turns a cover source into the PNG handle the image backend consumes.
///
/// Works entirely in memory; nothing is written to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePreparer;

impl ReferencePreparer {
    /// Creates a preparer.
    pub fn new() -> Self {
        Self
    }

    /// Reads, decodes and re-encodes `source` as PNG.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` if the source cannot be read or is not a valid
    /// image.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub async fn prepare(&self, source: &ReferenceSource) -> BackdropResult<ReferenceImage> {
        let raw = match source {
            ReferenceSource::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                DecodeError::new(format!(
                    "Failed to read reference image {}: {}",
                    path.display(),
                    e
                ))
            })?,
            ReferenceSource::Bytes(bytes) => bytes.to_vec(),
            ReferenceSource::Base64(data) => decode_base64(data)?,
        };

        let normalized = normalize_png(&raw)?;
        debug!(
            width = normalized.width,
            height = normalized.height,
            bytes = normalized.bytes.len(),
            "Prepared reference image"
        );

        Ok(ReferenceImage::new(
            normalized.bytes,
            normalized.width,
            normalized.height,
        ))
    }
}
