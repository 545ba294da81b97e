//! # termlink Annotation Renderer
//!
//! Turns free text into HTML in which glossary terms carry their definition.
//!
//! ## Pipeline
//!
//! 1. The [`Annotator`] indexes every literal of a
//!    [`TermDictionary`](dictionary::TermDictionary) once.
//! 2. Per call, the pattern index reports candidates and the resolver picks
//!    the leftmost-longest, non-overlapping ones.
//! 3. Each resolved match is rendered:
//!    - short variants (see [`RedirectPolicy`]) become a cross-reference to
//!      their canonical term, every time they occur;
//!    - otherwise the first occurrence of a canonical term within the
//!      [`AnnotationScope`] gets the full definition markup;
//!    - later occurrences stay literal.
//! 4. Text between matches is copied through unchanged.
//!
//! [`strip_annotations`] reverses the rendering.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use annotate::{strip_annotations, Annotator};
//! use dictionary::{DefinitionSource, DictionaryConfig, RawDefinition, TermDictionary};
//!
//! let source = DefinitionSource {
//!     definitions: vec![RawDefinition::new("risico", "Kans maal impact.")],
//!     ..Default::default()
//! };
//! let dict = TermDictionary::build(&source, &DictionaryConfig::default()).unwrap();
//! let annotator = Annotator::with_defaults(Arc::new(dict));
//!
//! let html = annotator.annotate("Elk risico telt, ook een klein risico.");
//! assert_eq!(html.matches("Kans maal impact.").count(), 1);
//! assert_eq!(strip_annotations(&html), "Elk risico telt, ook een klein risico.");
//! ```

mod annotator;
mod error;
mod markup;
mod metrics;
mod scope;
mod strip;

pub use crate::annotator::Annotator;
pub use crate::error::AnnotateError;
pub use crate::markup::{escape_html, MarkupConfig, RedirectPolicy};
pub use crate::metrics::{set_annotate_metrics, AnnotateMetrics};
pub use crate::scope::AnnotationScope;
pub use crate::strip::{strip_annotations, strip_annotations_with};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use dictionary::{DefinitionSource, DictionaryConfig, RawDefinition, TermDictionary};

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(usize, usize, usize)>>,
    }

    impl AnnotateMetrics for Recorder {
        fn record_annotation(
            &self,
            _latency: Duration,
            matches: usize,
            annotated: usize,
            redirected: usize,
        ) {
            self.calls
                .lock()
                .unwrap()
                .push((matches, annotated, redirected));
        }
    }

    #[test]
    fn annotator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Annotator>();
    }

    #[test]
    fn metrics_recorder_sees_counts() {
        let source = DefinitionSource {
            definitions: vec![RawDefinition::new("zorgplicht", "Plicht tot zorg.")],
            ..Default::default()
        };
        let dict = TermDictionary::build(&source, &DictionaryConfig::default()).unwrap();
        let annotator = Annotator::with_defaults(Arc::new(dict));

        let recorder = Arc::new(Recorder::default());
        set_annotate_metrics(Some(recorder.clone() as Arc<dyn AnnotateMetrics>));
        annotator.annotate("zorgplicht, zorgplicht, zorgplicht");
        set_annotate_metrics(None);

        let calls = recorder.calls.lock().unwrap();
        assert!(calls.contains(&(3, 1, 0)));
    }

    #[test]
    fn strip_reverses_annotate() {
        let source = DefinitionSource {
            definitions: vec![
                RawDefinition::new("persoon", "Mens."),
                RawDefinition::new("verwerking", "Elke <i>bewerking</i>."),
            ],
            ..Default::default()
        };
        let dict = TermDictionary::build(&source, &DictionaryConfig::default()).unwrap();
        let annotator = Annotator::with_defaults(Arc::new(dict));

        let text = "Verwerking door een persoon; personen en verwerkingen <b>ook</b>.";
        let html = annotator.annotate(text);
        assert_ne!(html, text);
        assert_eq!(strip_annotations_with(&html, annotator.markup()), text);
    }
}
