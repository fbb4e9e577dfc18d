//! Built-in prompt sets.

use serde::{Deserialize, Serialize};

const TROPES_TOML: &str = include_str!("../prompts/tropes.toml");
const SLIDE_TYPES_TOML: &str = include_str!("../prompts/slide_types.toml");

/// Prompt sets shipped with the crate.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PromptPreset {
    /// Book-specific tropes `A4`, `B1`, `C1`, `C3`, `E1`, `G1`
    #[default]
    Tropes,
    /// Generic slide types `hook`, `audience`, `about`, `author`, `specs`, `cta`
    SlideTypes,
}

impl PromptPreset {
    /// Embedded TOML source for this preset.
    pub(crate) fn source(&self) -> &'static str {
        match self {
            PromptPreset::Tropes => TROPES_TOML,
            PromptPreset::SlideTypes => SLIDE_TYPES_TOML,
        }
    }
}
