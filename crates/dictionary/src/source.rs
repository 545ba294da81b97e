//! Serialized form of the definitions file.
//!
//! The source is deliberately lenient: every field of a definition is
//! optional at the serde level so that missing required fields surface as
//! [`DictionaryError::MissingField`] with the offending index, and malformed
//! variant entries can be skipped instead of failing the whole parse.
//! Unknown top-level keys (`schema_version`, `owners`, `metadata`, ...) are
//! ignored.
//!
//! ```yaml
//! definitions:
//!   - id: verwerking
//!     term: Verwerking
//!     definition: Elke bewerking van persoonsgegevens.
//!     explanation: Ook het enkel opslaan telt als verwerking.
//!     examples: [Verzamelen, Vastleggen]
//!     inflections: [verwerkingen]
//! alternative_spellings:
//!   - text: e-mail
//!     refers_to: email
//! alternative_terms:
//!   - text: PIA
//!     refers_to: gegevensbeschermingseffectbeoordeling
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;

/// Top-level definitions document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefinitionSource {
    /// Canonical terms in declaration order.
    #[serde(default)]
    pub definitions: Vec<RawDefinition>,

    /// Alternative spellings, each pointing at a canonical term id.
    #[serde(default)]
    pub alternative_spellings: Vec<RawVariant>,

    /// Alternative terms (synonyms), each pointing at a canonical term id.
    #[serde(default)]
    pub alternative_terms: Vec<RawVariant>,
}

/// One canonical definition as written in the source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDefinition {
    /// Identifier referenced by variants. Derived from `term` when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub examples: Option<Examples>,
    #[serde(default)]
    pub category: Option<String>,
    /// Explicit inflected forms; registered before generated ones.
    #[serde(default)]
    pub inflections: Vec<String>,
}

impl RawDefinition {
    /// Convenience constructor for the two required fields.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            definition: Some(definition.into()),
            ..Default::default()
        }
    }
}

/// A declared variant: alternative spelling or alternative term.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawVariant {
    #[serde(default, alias = "term")]
    pub text: Option<String>,
    /// Id of the canonical term this variant stands for.
    #[serde(default)]
    pub refers_to: Option<String>,
}

impl RawVariant {
    pub fn new(text: impl Into<String>, refers_to: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            refers_to: Some(refers_to.into()),
        }
    }
}

/// Usage examples: either free prose or a list of short items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Examples {
    Text(String),
    List(Vec<String>),
}

impl Examples {
    /// True when there is nothing worth rendering.
    pub fn is_empty(&self) -> bool {
        match self {
            Examples::Text(text) => text.trim().is_empty(),
            Examples::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

impl DefinitionSource {
    /// Parse a YAML definitions document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DictionaryError> {
        serde_yaml::from_str(yaml).map_err(|e| DictionaryError::SourceParse(e.to_string()))
    }

    /// Parse a JSON definitions document.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(json).map_err(|e| DictionaryError::SourceParse(e.to_string()))
    }

    /// Load a definitions file. `.yaml` and `.yml` are parsed as YAML,
    /// anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DictionaryError::SourceRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }
}
