//! Core data types for the Backdrop carousel background generator.
//!
//! This crate provides the values that flow between the prompt catalog, the
//! image backend, the output store and the batch orchestrator.

mod image;
mod outcome;
mod params;
mod prompt;
mod reference;
mod slide;

pub use image::{GeneratedImage, StoredImage};
pub use outcome::{BatchReport, OutcomeStatus, SlideOutcome};
pub use params::{ASPECT_RATIO, GenerationParams, PersonGeneration, SafetyFilterLevel};
pub use prompt::{FALLBACK_KEY, PromptEntry};
pub use reference::{ReferenceImage, ReferenceSource};
pub use slide::SlideRequest;
