//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the backdrop binary.

mod commands;
mod generate;
mod prompts;
mod serve;

pub use commands::{Cli, Commands};
pub use generate::{handle_batch_command, handle_generate_command};
pub use prompts::handle_prompts_command;
pub use serve::handle_serve_command;
