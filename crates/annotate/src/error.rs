use thiserror::Error;

/// Errors raised while setting up an [`Annotator`](crate::Annotator).
///
/// Annotating text itself never fails; only an unusable markup configuration
/// is rejected, once, at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnnotateError {
    /// A class name, label or redirect threshold cannot be used.
    #[error("invalid markup configuration: {0}")]
    InvalidMarkup(String),
}
