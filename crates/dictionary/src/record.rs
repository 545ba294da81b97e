use serde::{Deserialize, Serialize};

use crate::source::Examples;

/// Canonical unit of meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermRecord {
    /// Identifier referenced by declared variants.
    pub id: String,
    /// Display form with its original casing.
    pub term: String,
    pub definition: String,
    pub explanation: Option<String>,
    pub examples: Option<Examples>,
    pub category: Option<String>,
    pub(crate) key: String,
}

impl TermRecord {
    /// Case-folded form of [`term`](Self::term), used as the scope and lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// How a variant relates to its canonical term.
///
/// The declaration order doubles as precedence: when two sources of variants
/// disagree about a literal, the earlier kind wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    AlternativeSpelling,
    AlternativeTerm,
    InflectedForm,
}

/// A string that resolves to a canonical term without being its display form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantRecord {
    /// The variant as declared or generated, original casing.
    pub text: String,
    /// Key of the canonical term (see [`TermRecord::key`]).
    pub canonical: String,
    pub kind: VariantKind,
}

/// Classification tag carried by every registered entry.
///
/// Ordered: `Canonical` sorts before every variant kind, and variant kinds sort
/// in [`VariantKind`] order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Canonical,
    Variant(VariantKind),
}

impl EntryKind {
    pub fn is_variant(self) -> bool {
        matches!(self, EntryKind::Variant(_))
    }

    pub fn variant_kind(self) -> Option<VariantKind> {
        match self {
            EntryKind::Canonical => None,
            EntryKind::Variant(kind) => Some(kind),
        }
    }
}

/// Stable handle of a registered entry; its value is the registration ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub(crate) u32);

impl EntryId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Slot {
    Term(usize),
    Variant(usize),
}

/// Borrowed view of a registered entry: either a canonical term or a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'d> {
    Term(&'d TermRecord),
    Variant(&'d VariantRecord),
}

impl<'d> Entry<'d> {
    /// The literal that was registered in the pattern index.
    pub fn text(&self) -> &'d str {
        match self {
            Entry::Term(term) => &term.term,
            Entry::Variant(variant) => &variant.text,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Term(_) => EntryKind::Canonical,
            Entry::Variant(variant) => EntryKind::Variant(variant.kind),
        }
    }

    /// Key of the canonical term this entry resolves to.
    pub fn canonical_key(&self) -> &'d str {
        match self {
            Entry::Term(term) => &term.key,
            Entry::Variant(variant) => &variant.canonical,
        }
    }
}

/// Per-character Unicode lowercase.
///
/// Applied character by character (no context-sensitive rules) so that keys
/// built here agree with the pattern index, which folds document text one
/// character at a time.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
