//! Prompt catalog entries.

use derive_getters::Getters;

/// Catalog key whose prompt is used for every unrecognized trope.
pub const FALLBACK_KEY: &str = "default";

/// A single trope prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct PromptEntry {
    /// Trope key
    #[new(into)]
    category_key: String,
    /// Natural-language generation prompt
    #[new(into)]
    prompt_text: String,
}

impl PromptEntry {
    /// Whether this entry is the catalog fallback.
    pub fn is_fallback(&self) -> bool {
        self.category_key == FALLBACK_KEY
    }
}
