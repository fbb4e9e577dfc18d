//! Image handling for Backdrop.
//!
//! The image service only accepts a handful of formats and the output store
//! expects one, so everything crossing those boundaries is normalized to PNG
//! here.

mod png;
mod reference;

pub use png::{NormalizedPng, decode_base64, normalize_png};
pub use reference::ReferencePreparer;
