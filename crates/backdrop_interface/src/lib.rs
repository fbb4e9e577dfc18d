//! Trait definitions for the Backdrop carousel background generator.
//!
//! The orchestrator only talks to the outside world through these seams, so
//! tests can swap in scripted backends and stores.

mod backend;
mod store;

pub use backend::ImageBackend;
pub use store::ImageStore;
