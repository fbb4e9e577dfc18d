//! Prompt listing command handler.

use backdrop::{BackdropConfig, PromptCatalog, PromptPreset, prompt_catalog};

/// Handle the `prompts` command
pub fn handle_prompts_command(
    config: &BackdropConfig,
    preset: Option<PromptPreset>,
) -> anyhow::Result<()> {
    let catalog = match preset {
        Some(preset) => PromptCatalog::builtin(preset),
        None => prompt_catalog(&config.prompts)?,
    };

    for entry in catalog.entries() {
        if entry.is_fallback() {
            println!("{} (fallback)", entry.category_key());
        } else {
            println!("{}", entry.category_key());
        }
    }
    Ok(())
}
