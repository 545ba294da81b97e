use std::sync::Arc;
use std::time::Instant;

use dictionary::{EntryId, TermDictionary};
use index::{IndexConfig, PatternIndex};
use matcher::{resolve, ResolvedMatch};
use tracing::debug;

use crate::error::AnnotateError;
use crate::markup::{render_definition, render_reference, MarkupConfig};
use crate::metrics::metrics_recorder;
use crate::scope::AnnotationScope;

/// Annotates free text with the definitions of a [`TermDictionary`].
///
/// The pattern index is built once in [`Annotator::new`]; afterwards the
/// annotator is immutable and can be shared across threads behind an `Arc`.
/// Every call brings its own [`AnnotationScope`].
#[derive(Debug, Clone)]
pub struct Annotator {
    dictionary: Arc<TermDictionary>,
    index: PatternIndex<EntryId>,
    markup: MarkupConfig,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    annotated: usize,
    redirected: usize,
    literal: usize,
}

impl Annotator {
    /// Validate `markup` and index every entry of `dictionary` in
    /// registration order.
    pub fn new(
        dictionary: Arc<TermDictionary>,
        markup: MarkupConfig,
        index_cfg: IndexConfig,
    ) -> Result<Self, AnnotateError> {
        markup.validate()?;
        Ok(Self::build(dictionary, markup, index_cfg))
    }

    /// Annotator with the default markup vocabulary and word boundaries.
    pub fn with_defaults(dictionary: Arc<TermDictionary>) -> Self {
        Self::build(dictionary, MarkupConfig::default(), IndexConfig::default())
    }

    fn build(dictionary: Arc<TermDictionary>, markup: MarkupConfig, index_cfg: IndexConfig) -> Self {
        let index = PatternIndex::from_entries(
            index_cfg,
            dictionary.entries().map(|(id, entry)| (entry.text(), id)),
        );
        debug!(
            entries = index.len(),
            nodes = index.node_count(),
            "pattern_index_built"
        );
        Self {
            dictionary,
            index,
            markup,
        }
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    pub fn index(&self) -> &PatternIndex<EntryId> {
        &self.index
    }

    pub fn markup(&self) -> &MarkupConfig {
        &self.markup
    }

    /// Resolved, non-overlapping matches of dictionary entries in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Vec<ResolvedMatch<'t, EntryId>> {
        resolve(self.index.find_matches(text))
    }

    /// Annotate `text` with a fresh scope.
    pub fn annotate(&self, text: &str) -> String {
        let mut scope = AnnotationScope::new();
        self.annotate_with_scope(text, &mut scope)
    }

    /// Annotate `text`, treating canonical terms already in `scope` as seen.
    ///
    /// Full definitions are added for the first occurrence of each canonical
    /// term not yet in `scope`, and those terms are added to it. Short
    /// variants become cross-references on every occurrence and leave the
    /// scope alone. Everything else, including text between matches, is
    /// copied through unchanged.
    pub fn annotate_with_scope(&self, text: &str, scope: &mut AnnotationScope) -> String {
        if text.is_empty() {
            return String::new();
        }
        let start = Instant::now();

        let resolved = self.find(text);
        let mut tally = Tally::default();
        let mut out = String::with_capacity(text.len() + resolved.len() * 256);
        let mut cursor = 0;
        for m in &resolved {
            out.push_str(&text[cursor..m.start]);
            self.render_match(m, scope, &mut out, &mut tally);
            cursor = m.end;
        }
        out.push_str(&text[cursor..]);

        debug!(
            chars = text.len(),
            matches = resolved.len(),
            annotated = tally.annotated,
            redirected = tally.redirected,
            literal = tally.literal,
            "field_annotated"
        );
        if let Some(metrics) = metrics_recorder() {
            metrics.record_annotation(
                start.elapsed(),
                resolved.len(),
                tally.annotated,
                tally.redirected,
            );
        }
        out
    }

    fn render_match(
        &self,
        m: &ResolvedMatch<'_, EntryId>,
        scope: &mut AnnotationScope,
        out: &mut String,
        tally: &mut Tally,
    ) {
        let Some(entry) = self.dictionary.entry(m.payload) else {
            debug!(text = m.text, entry = m.payload.index(), "entry_missing_literal");
            out.push_str(m.text);
            tally.literal += 1;
            return;
        };
        let Some(term) = self.dictionary.term_by_key(entry.canonical_key()) else {
            debug!(
                text = m.text,
                canonical = entry.canonical_key(),
                "canonical_missing_literal"
            );
            out.push_str(m.text);
            tally.literal += 1;
            return;
        };

        let kind = entry.kind();
        if kind.is_variant()
            && self
                .markup
                .redirect
                .is_redirectable(m.text.chars().count(), term.term.chars().count())
        {
            render_reference(&self.markup, m.text, term, out);
            tally.redirected += 1;
            return;
        }

        if scope.mark(term.key()) {
            render_definition(&self.markup, m.text, term, kind.variant_kind(), out);
            tally.annotated += 1;
        } else {
            out.push_str(m.text);
            tally.literal += 1;
        }
    }
}
