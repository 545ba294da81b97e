//! YAML configuration file support for termlink.
//!
//! One file configures every stage of the engine: inflection rules for the
//! dictionary build, word boundaries for the pattern index, and the markup
//! vocabulary plus redirect thresholds for the renderer. Every section is
//! optional and falls back to the defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # termlink engine configuration
//! version: "1.0"
//! name: "vragenlijst"
//!
//! dictionary:
//!   inflection:
//!     enabled: true
//!     suffixes: ["s", "en", "'s", "n"]
//!     double_final_consonant: true
//!     doubling_max_chars: 5
//!
//! index:
//!   extra_word_chars: ["-", "_"]
//!
//! markup:
//!   explanation_label: "Toelichting"
//!   examples_label: "Voorbeelden"
//!   redirect:
//!     max_short_chars: 3
//!     min_length_ratio: 0.5
//! ```

use std::fs;
use std::path::Path;

use annotate::MarkupConfig;
use dictionary::DictionaryConfig;
use index::IndexConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub dictionary: DictionaryConfig,

    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub markup: MarkupConfig,
}

impl EngineConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the version and every section.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.dictionary
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        if let Some(ch) = self
            .index
            .extra_word_chars
            .iter()
            .find(|ch| ch.is_whitespace())
        {
            return Err(ConfigLoadError::Validation(format!(
                "index.extra_word_chars must not contain whitespace, got {ch:?}"
            )));
        }

        self.markup
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            dictionary: DictionaryConfig::default(),
            index: IndexConfig::default(),
            markup: MarkupConfig::default(),
        }
    }
}
