//! Generation command handlers.

use backdrop::{BackdropConfig, BatchResponse, SlideRequest, build_generator};

/// Handle the `generate` command
pub async fn handle_generate_command(
    config: &BackdropConfig,
    trope: &str,
    index: usize,
) -> anyhow::Result<()> {
    let generator = build_generator(config)?;
    let stored = generator
        .run_single(&SlideRequest::new(trope, index))
        .await?;

    println!("{}", stored.path().display());
    Ok(())
}

/// Handle the `batch` command
///
/// Prints the same JSON the `/api/generate-all` endpoint returns.
pub async fn handle_batch_command(config: &BackdropConfig, tropes: &[String]) -> anyhow::Result<()> {
    let generator = build_generator(config)?;
    let report = generator.run_batch(tropes).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&BatchResponse::from(&report))?
    );
    Ok(())
}
