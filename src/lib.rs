//! Workspace umbrella crate for termlink, the definition annotation engine.
//!
//! This crate stitches the dictionary, pattern index, match resolver and
//! renderer together so callers can go from a definitions file to annotated
//! HTML with a single API entry point:
//!
//! ```
//! use termlink::{annotate, load_dictionary, DefinitionSource};
//!
//! let source = DefinitionSource::from_yaml_str(r#"
//! definitions:
//!   - term: verwerking
//!     definition: Elke bewerking van persoonsgegevens.
//! "#).unwrap();
//! let glossary = load_dictionary(&source).unwrap();
//!
//! let html = annotate("Een verwerking, en nog een verwerking.", &glossary, None);
//! assert_eq!(html.matches("Elke bewerking").count(), 1);
//! ```

pub mod config;

pub use annotate::{
    AnnotateError, AnnotateMetrics, AnnotationScope, Annotator, MarkupConfig, RedirectPolicy,
    escape_html, set_annotate_metrics, strip_annotations, strip_annotations_with,
};
pub use config::{ConfigLoadError, EngineConfig};
pub use dictionary::{
    BuildStats, DefinitionSource, DictionaryConfig, DictionaryError, Entry, EntryId, EntryKind,
    Examples, InflectionConfig, RawDefinition, RawVariant, TermDictionary, TermRecord,
    VariantKind, VariantRecord, create_id, fold_case, generate_forms,
};
pub use index::{IndexConfig, MatchCandidate, PatternIndex};
pub use matcher::{ResolvedMatch, resolve};

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{Level, info, warn};

/// Errors that can occur while loading a glossary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossaryError {
    Dictionary(DictionaryError),
    Markup(AnnotateError),
}

impl fmt::Display for GlossaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossaryError::Dictionary(err) => write!(f, "dictionary failure: {err}"),
            GlossaryError::Markup(err) => write!(f, "annotator setup failure: {err}"),
        }
    }
}

impl Error for GlossaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GlossaryError::Dictionary(err) => Some(err),
            GlossaryError::Markup(err) => Some(err),
        }
    }
}

impl From<DictionaryError> for GlossaryError {
    fn from(value: DictionaryError) -> Self {
        GlossaryError::Dictionary(value)
    }
}

impl From<AnnotateError> for GlossaryError {
    fn from(value: AnnotateError) -> Self {
        GlossaryError::Markup(value)
    }
}

/// A loaded dictionary together with its ready-to-use annotator.
///
/// Immutable once built. Share it behind an `Arc` across threads and swap
/// the whole value to reload definitions.
#[derive(Debug, Clone)]
pub struct Glossary {
    annotator: Annotator,
}

impl Glossary {
    /// Build the dictionary and index from an already parsed source.
    pub fn from_source(source: &DefinitionSource, cfg: &EngineConfig) -> Result<Self, GlossaryError> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "glossary.load",
            definitions = source.definitions.len()
        );
        let _guard = span.enter();

        let dictionary = TermDictionary::build(source, &cfg.dictionary)?;
        let annotator = Annotator::new(
            Arc::new(dictionary),
            cfg.markup.clone(),
            cfg.index.clone(),
        )
        .inspect_err(|err| warn!(error = %err, "glossary_load_failure"))?;

        info!(
            terms = annotator.dictionary().len(),
            patterns = annotator.index().len(),
            elapsed_micros = start.elapsed().as_micros(),
            "glossary_loaded"
        );
        Ok(Self { annotator })
    }

    /// Read a YAML or JSON definitions file and build the glossary.
    pub fn from_file<P: AsRef<Path>>(path: P, cfg: &EngineConfig) -> Result<Self, GlossaryError> {
        let source = DefinitionSource::from_file(path.as_ref())?;
        Self::from_source(&source, cfg)
    }

    pub fn dictionary(&self) -> &TermDictionary {
        self.annotator.dictionary()
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    /// Annotate `text` with a fresh scope.
    pub fn annotate(&self, text: &str) -> String {
        self.annotator.annotate(text)
    }

    /// Annotate `text`, sharing first-occurrence state through `scope`.
    pub fn annotate_with_scope(&self, text: &str, scope: &mut AnnotationScope) -> String {
        self.annotator.annotate_with_scope(text, scope)
    }

    /// Remove this glossary's markup from `html`.
    pub fn strip(&self, html: &str) -> String {
        strip_annotations_with(html, self.annotator.markup())
    }
}

/// Load a glossary with the default engine configuration.
pub fn load_dictionary(source: &DefinitionSource) -> Result<Glossary, DictionaryError> {
    // The default markup always validates, so only dictionary errors remain.
    match Glossary::from_source(source, &EngineConfig::default()) {
        Ok(glossary) => Ok(glossary),
        Err(GlossaryError::Dictionary(err)) => Err(err),
        Err(GlossaryError::Markup(err)) => Err(DictionaryError::InvalidConfig(err.to_string())),
    }
}

/// Load a glossary with explicit configuration for every stage.
pub fn load_dictionary_with_config(
    source: &DefinitionSource,
    cfg: &EngineConfig,
) -> Result<Glossary, GlossaryError> {
    Glossary::from_source(source, cfg)
}

/// Annotate `text` against `glossary`.
///
/// Without a scope every call starts fresh; pass the same scope to several
/// calls to annotate each canonical term only once across all of them.
pub fn annotate(text: &str, glossary: &Glossary, scope: Option<&mut AnnotationScope>) -> String {
    match scope {
        Some(scope) => glossary.annotate_with_scope(text, scope),
        None => glossary.annotate(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> DefinitionSource {
        DefinitionSource {
            definitions: vec![
                RawDefinition::new("risico", "Kans maal impact."),
                RawDefinition::new("maatregel", "Iets wat het risico verkleint."),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn annotate_without_scope_is_fresh_each_call() {
        let glossary = load_dictionary(&source()).expect("load");
        let a = annotate("risico", &glossary, None);
        let b = annotate("risico", &glossary, None);
        assert_eq!(a, b);
        assert_ne!(a, "risico");
    }

    #[test]
    fn annotate_with_scope_chains_fields() {
        let glossary = load_dictionary(&source()).expect("load");
        let mut scope = AnnotationScope::new();
        let first = annotate("Een risico.", &glossary, Some(&mut scope));
        let second = annotate("Nog een risico en een maatregel.", &glossary, Some(&mut scope));
        assert!(first.contains("Kans maal impact."));
        assert!(!second.contains("Kans maal impact."));
        assert!(second.contains("Iets wat het risico verkleint."));
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn invalid_markup_surfaces_as_glossary_error() {
        let cfg = EngineConfig {
            markup: MarkupConfig {
                text_class: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = load_dictionary_with_config(&source(), &cfg);
        assert!(matches!(result, Err(GlossaryError::Markup(_))));
    }

    #[test]
    fn glossary_strip_uses_its_markup() {
        let cfg = EngineConfig {
            markup: MarkupConfig {
                container_class: "gl".into(),
                text_class: "gl-text".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let glossary = load_dictionary_with_config(&source(), &cfg).expect("load");
        let text = "Elk risico vraagt een maatregel.";
        assert_eq!(glossary.strip(&glossary.annotate(text)), text);
    }

    #[test]
    fn glossary_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Glossary>();
    }
}
