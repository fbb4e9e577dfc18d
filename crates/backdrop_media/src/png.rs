//! PNG normalization.

use backdrop_error::DecodeError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use std::io::Cursor;

/// PNG bytes together with their pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPng {
    /// PNG-encoded bytes
    pub bytes: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Decodes any supported image format and re-encodes it as PNG.
///
/// # Errors
///
/// Returns a `DecodeError` if `bytes` is not a decodable image.
///
/// # Examples
///
/// ```
/// use backdrop_media::normalize_png;
///
/// assert!(normalize_png(b"definitely not an image").is_err());
/// ```
pub fn normalize_png(bytes: &[u8]) -> Result<NormalizedPng, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::new("Image data is empty"));
    }

    let image = image::load_from_memory(bytes)
        .map_err(|e| DecodeError::new(format!("Invalid image data: {}", e)))?;

    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|e| DecodeError::new(format!("Failed to encode PNG: {}", e)))?;

    Ok(NormalizedPng {
        bytes: encoded.into_inner(),
        width: image.width(),
        height: image.height(),
    })
}

/// Decodes a base64 payload, tolerating a `data:<mime>;base64,` prefix.
///
/// # Errors
///
/// Returns a `DecodeError` if the payload is not valid base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>, DecodeError> {
    let payload = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|e| DecodeError::new(format!("Invalid base64 image data: {}", e)))
}
