//! User-tweakable settings with TOML file support.
//!
//! Playback timing, accepted input, random array generation and the bar
//! palette are consolidated here. The library never reads these files
//! itself: the binary loads an [`Options`] and hands each section to the
//! component that takes it at construction.

mod colors;

use std::path::Path;

pub use colors::ColorOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SortscopeError;
use crate::playback::PlaybackConfig;
use crate::validation::ArrayBounds;

/// Random input generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Random", inline)]
#[serde(default)]
pub struct RandomOptions {
    /// Elements in a generated array (clamped to the input bounds).
    #[schemars(title = "Length", range(min = 1, max = 50))]
    pub length: usize,
    /// Fixed seed for reproducible arrays; fresh entropy when absent.
    #[schemars(title = "Seed")]
    pub seed: Option<u64>,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            length: 25,
            seed: None,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Tick rate, interpolation and speed range.
    pub playback: PlaybackConfig,
    /// Accepted array length and value range.
    pub input: ArrayBounds,
    /// Random array generation.
    pub random: RandomOptions,
    /// Bar palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SortscopeError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SortscopeError> {
        let content =
            std::fs::read_to_string(path).map_err(SortscopeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SortscopeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SortscopeError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), SortscopeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SortscopeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SortscopeError::Io)?;
        }
        std::fs::write(path, content).map_err(SortscopeError::Io)
    }
}
