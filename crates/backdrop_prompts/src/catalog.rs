//! Immutable prompt catalog.

use crate::PromptPreset;
use backdrop_core::{FALLBACK_KEY, PromptEntry};
use backdrop_error::{BackdropResult, ConfigError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

/// On-disk catalog layout: a single `[prompts]` table.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    prompts: BTreeMap<String, String>,
}

/// Read-only mapping from trope key to prompt, with a guaranteed fallback.
///
/// Built once at startup and handed to the orchestrator. There is no way to
/// mutate an entry after construction.
///
/// # Examples
///
/// ```
/// use backdrop_prompts::{PromptCatalog, PromptPreset};
///
/// let catalog = PromptCatalog::builtin(PromptPreset::SlideTypes);
/// assert!(catalog.lookup("cta").contains("call-to-action"));
/// assert_eq!(catalog.lookup("no-such-slide"), catalog.fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCatalog {
    prompts: BTreeMap<String, String>,
}

impl PromptCatalog {
    /// Builds a catalog from entries.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if no `default` entry is present or any prompt
    /// is blank.
    pub fn new(entries: impl IntoIterator<Item = PromptEntry>) -> BackdropResult<Self> {
        let prompts = entries
            .into_iter()
            .map(|entry| (entry.category_key().clone(), entry.prompt_text().clone()))
            .collect();
        Self::validated(prompts)
    }

    /// Loads one of the built-in prompt sets.
    pub fn builtin(preset: PromptPreset) -> Self {
        Self::from_toml_str(preset.source()).expect("Valid built-in prompt catalog")
    }

    /// Parses a catalog from TOML with a `[prompts]` table.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` on malformed TOML, a missing `default` entry,
    /// or a blank prompt.
    pub fn from_toml_str(source: &str) -> BackdropResult<Self> {
        let file: CatalogFile = toml::from_str(source)
            .map_err(|e| ConfigError::new(format!("Failed to parse prompt catalog: {}", e)))?;
        Self::validated(file.prompts)
    }

    /// Loads a catalog from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> BackdropResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read prompt catalog {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        debug!(entries = catalog.len(), "Loaded prompt catalog");
        Ok(catalog)
    }

    fn validated(prompts: BTreeMap<String, String>) -> BackdropResult<Self> {
        if !prompts.contains_key(FALLBACK_KEY) {
            return Err(ConfigError::new(format!(
                "Prompt catalog has no '{}' entry",
                FALLBACK_KEY
            ))
            .into());
        }
        if let Some((key, _)) = prompts.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(ConfigError::new(format!("Prompt '{}' is empty", key)).into());
        }
        Ok(Self { prompts })
    }

    /// Returns the prompt for `key`, or the fallback prompt if `key` is unknown.
    pub fn lookup(&self, key: &str) -> &str {
        self.prompts
            .get(key)
            .unwrap_or_else(|| self.fallback_entry())
            .as_str()
    }

    /// Returns the fallback prompt.
    pub fn fallback(&self) -> &str {
        self.fallback_entry().as_str()
    }

    fn fallback_entry(&self) -> &String {
        // Presence of the fallback is checked on construction.
        &self.prompts[FALLBACK_KEY]
    }

    /// Whether `key` has its own prompt.
    pub fn contains(&self, key: &str) -> bool {
        self.prompts.contains_key(key)
    }

    /// All trope keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.prompts.keys().map(String::as_str)
    }

    /// All entries, in key order.
    pub fn entries(&self) -> impl Iterator<Item = PromptEntry> + '_ {
        self.prompts
            .iter()
            .map(|(key, text)| PromptEntry::new(key.as_str(), text.as_str()))
    }

    /// Number of entries, including the fallback.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Always false: a valid catalog holds at least the fallback.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin(PromptPreset::default())
    }
}
