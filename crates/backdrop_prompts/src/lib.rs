//! Trope prompt catalog.
//!
//! Maps a slide trope key to the long-form prompt sent to the image service.
//! Prompts are data: each one spells out where text will be overlaid, where
//! and how large the book is placed, the palette and the output format.
//! Changing a word changes the rendered carousel.

mod catalog;
mod preset;

pub use catalog::PromptCatalog;
pub use preset::PromptPreset;
