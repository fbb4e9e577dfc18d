//! HTTP API for the Backdrop carousel background generator.
//!
//! Exposes single-slide and batch generation, per-request cover uploads and
//! the stored outputs over axum.

mod api;
mod dto;
mod state;

pub use api::{
    create_router, generate_all, generate_background, generate_single, health_check, serve,
    serve_output,
};
pub use dto::{
    BatchRequest, BatchResponse, GenerateRequest, GenerateResponse, SlideResult, UploadRequest,
    UploadResponse,
};
pub use state::AppState;
