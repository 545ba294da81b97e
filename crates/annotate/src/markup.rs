//! Markup vocabulary and the two renderings of a match.
//!
//! Every class name and visible label lives in [`MarkupConfig`], so the
//! presentation contract with the front-end can be changed from a
//! configuration file without touching the renderer. The defaults are the
//! stable vocabulary front-ends already style:
//!
//! ```text
//! <span class="aiv-definition">{literal}<span class="aiv-definition-text">
//!   [<span class="aiv-definition-variant">{note} {canonical}</span>]
//!   <span class="aiv-definition-body">{definition}</span>
//!   [<span class="aiv-definition-explanation"><strong>Toelichting</strong> {explanation}</span>]
//!   [<span class="aiv-definition-examples"><strong>Voorbeelden</strong> {examples}</span>]
//! </span></span>
//! ```
//!
//! The renderer emits this without whitespace between elements. Attribute
//! values are HTML-escaped; definition prose is inserted verbatim because
//! authors may put their own inline markup in it.

use dictionary::{Examples, TermRecord, VariantKind};
use serde::{Deserialize, Serialize};

use crate::error::AnnotateError;

/// Class names and labels used by the renderer and the stripper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkupConfig {
    /// Outer span wrapping the visible literal and the hidden definition.
    #[serde(default = "default_container_class")]
    pub container_class: String,
    /// Definition block nested inside the container.
    #[serde(default = "default_text_class")]
    pub text_class: String,
    #[serde(default = "default_body_class")]
    pub body_class: String,
    #[serde(default = "default_explanation_class")]
    pub explanation_class: String,
    #[serde(default = "default_examples_class")]
    pub examples_class: String,
    /// One span per item when examples are given as a list.
    #[serde(default = "default_example_item_class")]
    pub example_item_class: String,
    #[serde(default = "default_variant_note_class")]
    pub variant_note_class: String,
    /// Lightweight cross-reference emitted for short variants.
    #[serde(default = "default_reference_class")]
    pub reference_class: String,

    #[serde(default = "default_explanation_label")]
    pub explanation_label: String,
    #[serde(default = "default_examples_label")]
    pub examples_label: String,
    /// Note text preceding the canonical term for an alternative spelling.
    #[serde(default = "default_alternative_spelling_note")]
    pub alternative_spelling_note: String,
    /// Note text preceding the canonical term for an alternative term.
    #[serde(default = "default_alternative_term_note")]
    pub alternative_term_note: String,
    /// Tooltip prefix on cross-references, followed by the canonical term.
    #[serde(default = "default_reference_tooltip")]
    pub reference_tooltip: String,

    #[serde(default)]
    pub redirect: RedirectPolicy,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            container_class: default_container_class(),
            text_class: default_text_class(),
            body_class: default_body_class(),
            explanation_class: default_explanation_class(),
            examples_class: default_examples_class(),
            example_item_class: default_example_item_class(),
            variant_note_class: default_variant_note_class(),
            reference_class: default_reference_class(),
            explanation_label: default_explanation_label(),
            examples_label: default_examples_label(),
            alternative_spelling_note: default_alternative_spelling_note(),
            alternative_term_note: default_alternative_term_note(),
            reference_tooltip: default_reference_tooltip(),
            redirect: RedirectPolicy::default(),
        }
    }
}

impl MarkupConfig {
    /// Reject class names the stripper could not recognise again and
    /// thresholds outside their domain.
    pub fn validate(&self) -> Result<(), AnnotateError> {
        let classes = [
            ("container_class", &self.container_class),
            ("text_class", &self.text_class),
            ("body_class", &self.body_class),
            ("explanation_class", &self.explanation_class),
            ("examples_class", &self.examples_class),
            ("example_item_class", &self.example_item_class),
            ("variant_note_class", &self.variant_note_class),
            ("reference_class", &self.reference_class),
        ];
        for (field, class) in classes {
            if class.is_empty() {
                return Err(AnnotateError::InvalidMarkup(format!("{field} must not be empty")));
            }
            if class
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
            {
                return Err(AnnotateError::InvalidMarkup(format!(
                    "{field} `{class}` must be a single class name"
                )));
            }
        }

        // The stripper tells blocks apart by class alone.
        let structural = [
            &self.container_class,
            &self.text_class,
            &self.reference_class,
        ];
        if structural[0] == structural[1]
            || structural[0] == structural[2]
            || structural[1] == structural[2]
        {
            return Err(AnnotateError::InvalidMarkup(
                "container_class, text_class and reference_class must differ".into(),
            ));
        }

        self.redirect.validate()
    }

    pub(crate) fn note_for(&self, kind: VariantKind) -> Option<&str> {
        match kind {
            VariantKind::AlternativeSpelling => Some(&self.alternative_spelling_note),
            VariantKind::AlternativeTerm => Some(&self.alternative_term_note),
            VariantKind::InflectedForm => None,
        }
    }
}

/// When a variant match gets a cross-reference instead of a full definition.
///
/// A variant is redirected when the matched text is at most
/// `max_short_chars` characters long, or shorter than `min_length_ratio`
/// times the canonical term. Canonical matches are never redirected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RedirectPolicy {
    #[serde(default = "default_max_short_chars")]
    pub max_short_chars: usize,
    #[serde(default = "default_min_length_ratio")]
    pub min_length_ratio: f64,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self {
            max_short_chars: default_max_short_chars(),
            min_length_ratio: default_min_length_ratio(),
        }
    }
}

impl RedirectPolicy {
    /// Whether a variant match of `matched_chars` characters pointing at a
    /// canonical term of `canonical_chars` characters is redirected.
    pub fn is_redirectable(&self, matched_chars: usize, canonical_chars: usize) -> bool {
        matched_chars <= self.max_short_chars
            || (matched_chars as f64) < self.min_length_ratio * canonical_chars as f64
    }

    pub fn validate(&self) -> Result<(), AnnotateError> {
        if !(0.0..=1.0).contains(&self.min_length_ratio) {
            return Err(AnnotateError::InvalidMarkup(format!(
                "redirect.min_length_ratio must be within 0.0..=1.0, got {}",
                self.min_length_ratio
            )));
        }
        Ok(())
    }
}

fn default_container_class() -> String {
    "aiv-definition".into()
}

fn default_text_class() -> String {
    "aiv-definition-text".into()
}

fn default_body_class() -> String {
    "aiv-definition-body".into()
}

fn default_explanation_class() -> String {
    "aiv-definition-explanation".into()
}

fn default_examples_class() -> String {
    "aiv-definition-examples".into()
}

fn default_example_item_class() -> String {
    "aiv-definition-example".into()
}

fn default_variant_note_class() -> String {
    "aiv-definition-variant".into()
}

fn default_reference_class() -> String {
    "aiv-definition-ref".into()
}

fn default_explanation_label() -> String {
    "Toelichting".into()
}

fn default_examples_label() -> String {
    "Voorbeelden".into()
}

fn default_alternative_spelling_note() -> String {
    "Alternatieve schrijfwijze van".into()
}

fn default_alternative_term_note() -> String {
    "Alternatieve term voor".into()
}

fn default_reference_tooltip() -> String {
    "Verwijst naar:".into()
}

const fn default_max_short_chars() -> usize {
    3
}

const fn default_min_length_ratio() -> f64 {
    0.5
}

/// Full definition markup for `literal`, appended to `out`.
pub(crate) fn render_definition(
    cfg: &MarkupConfig,
    literal: &str,
    term: &TermRecord,
    variant: Option<VariantKind>,
    out: &mut String,
) {
    open_span(out, &cfg.container_class);
    out.push_str(literal);
    open_span(out, &cfg.text_class);

    if let Some(note) = variant.and_then(|kind| cfg.note_for(kind)) {
        open_span(out, &cfg.variant_note_class);
        push_escaped(out, note);
        out.push(' ');
        push_escaped(out, &term.term);
        out.push_str("</span>");
    }

    open_span(out, &cfg.body_class);
    out.push_str(&term.definition);
    out.push_str("</span>");

    if let Some(explanation) = &term.explanation {
        open_span(out, &cfg.explanation_class);
        push_label(out, &cfg.explanation_label);
        out.push(' ');
        out.push_str(explanation);
        out.push_str("</span>");
    }

    if let Some(examples) = &term.examples {
        open_span(out, &cfg.examples_class);
        push_label(out, &cfg.examples_label);
        match examples {
            Examples::Text(text) => {
                out.push(' ');
                out.push_str(text);
            }
            Examples::List(items) => {
                for item in items.iter().filter(|item| !item.trim().is_empty()) {
                    open_span(out, &cfg.example_item_class);
                    out.push_str(item);
                    out.push_str("</span>");
                }
            }
        }
        out.push_str("</span>");
    }

    out.push_str("</span></span>");
}

/// Cross-reference markup for `literal`, appended to `out`.
pub(crate) fn render_reference(cfg: &MarkupConfig, literal: &str, term: &TermRecord, out: &mut String) {
    out.push_str("<span class=\"");
    out.push_str(&cfg.reference_class);
    out.push_str("\" title=\"");
    push_escaped(out, &cfg.reference_tooltip);
    out.push(' ');
    push_escaped(out, &term.term);
    out.push_str("\" data-term=\"");
    push_escaped(out, &term.term);
    out.push_str("\">");
    out.push_str(literal);
    out.push_str("</span>");
}

fn open_span(out: &mut String, class: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
}

fn push_label(out: &mut String, label: &str) {
    out.push_str("<strong>");
    push_escaped(out, label);
    out.push_str("</strong>");
}

/// Minimal HTML escaping for attribute values and generated labels.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
