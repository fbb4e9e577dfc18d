//! HTTP server command handler.

use backdrop::{AppState, BackdropConfig, build_generator, create_router, serve};
use tracing::info;

/// Handle the `serve` command
pub async fn handle_serve_command(config: &BackdropConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let generator = build_generator(config)?;

    info!(
        output_dir = %config.storage.output_dir.display(),
        cover = ?config.reference.cover_path,
        "Starting Backdrop server"
    );

    let router = create_router(AppState::new(generator), &config.storage.url_prefix);
    serve(router, addr).await?;
    Ok(())
}
