//! Fixed generation parameters.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Aspect ratio of every carousel background (1080x1350).
pub const ASPECT_RATIO: &str = "4:5";

/// Content safety threshold applied to every generation.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SafetyFilterLevel {
    /// Block low probability harm and above
    BlockLowAndAbove,
    /// Block medium probability harm and above
    BlockMediumAndAbove,
    /// Only block high probability harm
    #[default]
    BlockOnlyHigh,
    /// Do not block
    BlockNone,
}

impl SafetyFilterLevel {
    /// Threshold name used by the Gemini API.
    pub fn api_threshold(&self) -> &'static str {
        match self {
            SafetyFilterLevel::BlockLowAndAbove => "BLOCK_LOW_AND_ABOVE",
            SafetyFilterLevel::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
            SafetyFilterLevel::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
            SafetyFilterLevel::BlockNone => "BLOCK_NONE",
        }
    }
}

/// Whether generated images may depict people.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PersonGeneration {
    /// No people
    DontAllow,
    /// Adults only
    AllowAdult,
    /// No restriction
    #[default]
    AllowAll,
}

impl PersonGeneration {
    /// Value name used by the Gemini API.
    pub fn api_value(&self) -> &'static str {
        match self {
            PersonGeneration::DontAllow => "DONT_ALLOW",
            PersonGeneration::AllowAdult => "ALLOW_ADULT",
            PersonGeneration::AllowAll => "ALLOW_ALL",
        }
    }
}

/// Parameters sent with every generation call.
///
/// Fixed for the lifetime of the process so every slide in a carousel is
/// rendered the same way. Requests cannot override them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct GenerationParams {
    /// Output aspect ratio, always [`ASPECT_RATIO`]
    #[getter(skip)]
    aspect_ratio: &'static str,
    /// Safety threshold
    safety_filter_level: SafetyFilterLevel,
    /// Person generation policy
    person_generation: PersonGeneration,
}

impl GenerationParams {
    /// Output aspect ratio, always [`ASPECT_RATIO`]
    pub fn aspect_ratio(&self) -> &&'static str {
        &self.aspect_ratio
    }

    /// Creates parameters with the fixed aspect ratio.
    pub fn new(safety_filter_level: SafetyFilterLevel, person_generation: PersonGeneration) -> Self {
        Self {
            aspect_ratio: ASPECT_RATIO,
            safety_filter_level,
            person_generation,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(SafetyFilterLevel::default(), PersonGeneration::default())
    }
}
