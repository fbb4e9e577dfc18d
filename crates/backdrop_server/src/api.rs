//! Routes and handlers.

use crate::dto::{
    BatchRequest, BatchResponse, GenerateRequest, GenerateResponse, UploadRequest, UploadResponse,
};
use crate::state::AppState;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use backdrop_core::{ReferenceSource, SlideRequest};
use backdrop_error::{BackdropError, BackdropErrorKind, ValidationError, WriteErrorKind};
use backdrop_interface::{ImageBackend, ImageStore};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::net::SocketAddr;
use tracing::{error, info, instrument, warn};

/// Creates the API router.
///
/// Stored outputs are served under `output_prefix`, which must match the
/// store's URL prefix.
pub fn create_router<B, S>(state: AppState<B, S>, output_prefix: &str) -> Router
where
    B: ImageBackend + 'static,
    S: ImageStore + 'static,
{
    let outputs_route = format!("{}/:filename", output_prefix.trim_end_matches('/'));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(generate_single::<B, S>))
        .route("/api/generate-all", post(generate_all::<B, S>))
        .route("/api/generate-background", post(generate_background::<B, S>))
        .route(&outputs_route, get(serve_output::<B, S>))
        .with_state(state)
}

/// Binds `addr` and serves `router` until the process exits.
pub async fn serve(router: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Backdrop server listening");
    axum::serve(listener, router).await
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({ "success": false, "error": message.into() })),
    )
        .into_response()
}

/// Parses a JSON body. An empty body means every field takes its default.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ValidationError::new(format!("Invalid request body: {}", e)))
}

fn rejected(err: ValidationError) -> Response {
    let err = BackdropError::from(err);
    warn!(error = %err, "Rejected request");
    failure(StatusCode::BAD_REQUEST, err.summary())
}

/// Health check endpoint.
#[instrument(skip_all)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// `POST /api/generate`: one slide with the configured cover.
///
/// A body that does not parse is a 400; any generation failure is a 500.
#[instrument(skip_all)]
pub async fn generate_single<B, S>(
    State(state): State<AppState<B, S>>,
    body: Bytes,
) -> Response
where
    B: ImageBackend + 'static,
    S: ImageStore + 'static,
{
    let request = match parse_body::<GenerateRequest>(&body) {
        Ok(request) => request,
        Err(e) => return rejected(e),
    };
    let trope_id = request.trope_id().clone();
    let slide_index = *request.slide_index();

    match state
        .generator()
        .run_single(&SlideRequest::from(request))
        .await
    {
        Ok(stored) => (
            StatusCode::OK,
            Json(GenerateResponse {
                success: true,
                image_url: stored.url().clone(),
                trope_id,
                slide_index,
            }),
        )
            .into_response(),
        Err(e) => failure(StatusCode::INTERNAL_SERVER_ERROR, e.summary()),
    }
}

/// `POST /api/generate-all`: every trope in order.
///
/// Always 200; individual failures are reported inside `results`. A body
/// that does not parse yields an empty report without generating anything.
#[instrument(skip_all)]
pub async fn generate_all<B, S>(
    State(state): State<AppState<B, S>>,
    body: Bytes,
) -> Response
where
    B: ImageBackend + 'static,
    S: ImageStore + 'static,
{
    let request = match parse_body::<BatchRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected batch body, returning empty report");
            BatchRequest::default()
        }
    };
    let report = state.generator().run_batch(request.tropes().as_slice()).await;
    (StatusCode::OK, Json(BatchResponse::from(&report))).into_response()
}

/// `POST /api/generate-background`: one background from an uploaded cover.
///
/// Nothing is stored; the PNG comes back base64 encoded.
#[instrument(skip_all)]
pub async fn generate_background<B, S>(
    State(state): State<AppState<B, S>>,
    body: Bytes,
) -> Response
where
    B: ImageBackend + 'static,
    S: ImageStore + 'static,
{
    let request = match parse_body::<UploadRequest>(&body) {
        Ok(request) => request,
        Err(e) => return rejected(e),
    };

    let cover_data = match request.cover_data() {
        Some(data) if !data.trim().is_empty() => data.clone(),
        _ => return rejected(ValidationError::new("Missing coverData")),
    };

    let slide_type = request.slide_type().clone();
    match state
        .generator()
        .render(&slide_type, &ReferenceSource::Base64(cover_data))
        .await
    {
        Ok(image) => (
            StatusCode::OK,
            Json(UploadResponse {
                success: true,
                image_data: STANDARD.encode(image.png()),
                slide_type,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, slide_type = %slide_type, "Upload generation failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, e.summary())
        }
    }
}

/// `GET {output_prefix}/{filename}`: a stored background.
#[instrument(skip(state))]
pub async fn serve_output<B, S>(
    State(state): State<AppState<B, S>>,
    Path(filename): Path<String>,
) -> Response
where
    B: ImageBackend + 'static,
    S: ImageStore + 'static,
{
    match state.generator().store().load(&filename).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => {
            let status = match e.kind() {
                BackdropErrorKind::Write(write) => match write.kind {
                    WriteErrorKind::InvalidName(_) => StatusCode::BAD_REQUEST,
                    WriteErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                },
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                error!(error = %e, "Failed to serve output");
            }
            failure(status, e.summary())
        }
    }
}
