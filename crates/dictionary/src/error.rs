//! Error types produced by the dictionary crate.
//!
//! Every variant is fatal for the load that produced it: callers should treat
//! the whole dictionary as unavailable rather than continue with partial data.
//! Problems with individual variant entries are *not* errors; they are logged
//! and skipped while the build continues.
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`MissingField`](DictionaryError::MissingField) | Validation | A definition lacks `term` or `definition` |
//! | [`DuplicateTerm`](DictionaryError::DuplicateTerm) | Validation | Two canonical terms are equal ignoring case |
//! | [`DuplicateId`](DictionaryError::DuplicateId) | Validation | Two canonical terms share an identifier |
//! | [`InvalidConfig`](DictionaryError::InvalidConfig) | Configuration | Inflection rules are unusable |
//! | [`SourceRead`](DictionaryError::SourceRead) | I/O | The definitions file could not be read |
//! | [`SourceParse`](DictionaryError::SourceParse) | Format | The definitions file is not valid YAML/JSON |
use thiserror::Error;

/// Errors that abort dictionary construction.
///
/// The enum is cloneable and comparable so tests can match on exact values.
/// It is marked `#[non_exhaustive]`; include a catch-all arm when matching.
///
/// # Example
///
/// ```rust
/// use dictionary::DictionaryError;
///
/// let err = DictionaryError::MissingField { index: 2, field: "term" };
/// assert_eq!(err.to_string(), "definition #2 is missing required field `term`");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DictionaryError {
    /// A definition entry has no usable `term` or `definition`.
    ///
    /// `index` is the zero-based position of the entry in the source's
    /// `definitions` list. Blank strings count as missing.
    #[error("definition #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// Two canonical terms collide under case-insensitive comparison.
    #[error("canonical term `{term}` collides with `{existing}` (case-insensitive)")]
    DuplicateTerm { term: String, existing: String },

    /// Two canonical terms declare (or derive) the same identifier.
    #[error("identifier `{id}` is used by both `{existing}` and `{term}`")]
    DuplicateId {
        id: String,
        term: String,
        existing: String,
    },

    /// The dictionary configuration cannot be used.
    #[error("invalid dictionary configuration: {0}")]
    InvalidConfig(String),

    /// The definitions file could not be read.
    #[error("failed to read definitions from {path}: {message}")]
    SourceRead { path: String, message: String },

    /// The definitions document is not valid YAML or JSON, or has the wrong shape.
    #[error("failed to parse definitions: {0}")]
    SourceParse(String),
}

impl DictionaryError {
    /// Returns true when the error comes from the content of the definitions
    /// rather than from reading or parsing the file.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DictionaryError::MissingField { .. }
                | DictionaryError::DuplicateTerm { .. }
                | DictionaryError::DuplicateId { .. }
        )
    }
}
