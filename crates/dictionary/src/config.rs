//! Configuration types for dictionary construction.
//!
//! [`DictionaryConfig`] currently only carries the [`InflectionConfig`], which
//! controls the mechanical inflected forms generated for every canonical term.
//! Both types are serde-friendly so they can be embedded in a YAML engine
//! configuration.
//!
//! # Examples
//!
//! ```rust
//! use dictionary::{DictionaryConfig, InflectionConfig};
//!
//! let config = DictionaryConfig::default();
//! assert!(config.inflection.enabled);
//! assert_eq!(config.inflection.suffixes, vec!["s", "en", "'s", "n"]);
//!
//! // Only exact terms and declared variants, no generated forms.
//! let strict = DictionaryConfig {
//!     inflection: InflectionConfig {
//!         enabled: false,
//!         ..Default::default()
//!     },
//! };
//! assert!(strict.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;

/// Configuration for [`TermDictionary::build`](crate::TermDictionary::build).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Rules for generated inflected forms.
    #[serde(default)]
    pub inflection: InflectionConfig,
}

impl DictionaryConfig {
    /// Validate the configuration before it is used for a build.
    pub fn validate(&self) -> Result<(), DictionaryError> {
        self.inflection.validate()
    }
}

/// Mechanical inflection rules.
///
/// For every canonical term ending in a letter the dictionary registers the
/// term followed by each entry of `suffixes`. When `double_final_consonant`
/// is set, short terms ending in a single vowel followed by a consonant also
/// get the doubled plural (`kat` → `katten`).
///
/// ```json
/// {
///   "enabled": true,
///   "suffixes": ["s", "en", "'s", "n"],
///   "double_final_consonant": true,
///   "doubling_max_chars": 5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InflectionConfig {
    /// Master switch for generated forms. Explicit inflections declared in the
    /// source are registered regardless.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Suffixes appended verbatim to the canonical term, in registration order.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,

    /// Emit `term + last consonant + "en"` for short vowel+consonant endings.
    #[serde(default = "default_enabled")]
    pub double_final_consonant: bool,

    /// Longest canonical term (in characters) eligible for consonant doubling.
    #[serde(default = "default_doubling_max_chars")]
    pub doubling_max_chars: usize,
}

impl InflectionConfig {
    pub(crate) fn validate(&self) -> Result<(), DictionaryError> {
        if let Some(pos) = self.suffixes.iter().position(|s| s.trim().is_empty()) {
            return Err(DictionaryError::InvalidConfig(format!(
                "inflection.suffixes[{pos}] must not be blank"
            )));
        }
        if self.double_final_consonant && self.doubling_max_chars < 2 {
            return Err(DictionaryError::InvalidConfig(
                "inflection.doubling_max_chars must be >= 2".into(),
            ));
        }
        Ok(())
    }
}

impl Default for InflectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suffixes: default_suffixes(),
            double_final_consonant: true,
            doubling_max_chars: default_doubling_max_chars(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_suffixes() -> Vec<String> {
    ["s", "en", "'s", "n"].iter().map(|s| s.to_string()).collect()
}

fn default_doubling_max_chars() -> usize {
    5
}
