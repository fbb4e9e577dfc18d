//! Backdrop command-line interface.

mod cli;

use backdrop::BackdropConfig;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!(config_file = ?cli.config, "Loading configuration");
    let config = BackdropConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => cli::handle_serve_command(&config).await?,
        Commands::Generate { trope, index } => {
            cli::handle_generate_command(&config, &trope, index).await?
        }
        Commands::Batch { tropes } => cli::handle_batch_command(&config, &tropes).await?,
        Commands::Prompts { preset } => cli::handle_prompts_command(&config, preset)?,
    }

    Ok(())
}
