//! Command-line arguments.

use backdrop::{FALLBACK_KEY, PromptPreset};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Carousel backgrounds composed around a book cover.
#[derive(Parser, Debug)]
#[command(name = "backdrop")]
#[command(about = "Generate carousel backgrounds with Gemini image models")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (default: backdrop.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Generate one slide with the configured cover
    Generate {
        /// Prompt catalog key
        #[arg(short, long, default_value = FALLBACK_KEY)]
        trope: String,

        /// Zero-based slide position
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },

    /// Generate one slide per key, in order
    Batch {
        /// Prompt catalog keys
        #[arg(required = true)]
        tropes: Vec<String>,
    },

    /// List prompt catalog keys
    Prompts {
        /// Built-in set to list instead of the configured catalog
        #[arg(short, long)]
        preset: Option<PromptPreset>,
    },
}
