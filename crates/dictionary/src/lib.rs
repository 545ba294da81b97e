//! termlink term dictionary.
//!
//! This crate turns a definitions source (the glossary of a questionnaire)
//! into a read-only [`TermDictionary`]: canonical terms plus every string that
//! should resolve to one of them.
//!
//! ## What we do
//!
//! - Validate canonical definitions (a `term` and a `definition` are required,
//!   terms are unique ignoring case, ids are unique)
//! - Link declared alternative spellings and alternative terms to their
//!   canonical term by id
//! - Generate mechanical inflected forms (`s`, `en`, `'s`, `n`, consonant
//!   doubling) and register explicit ones from the source
//! - Keep a single registration order, so collisions and downstream
//!   tie-breaks are deterministic
//!
//! ## Errors vs warnings
//!
//! Problems with canonical definitions abort the build with a
//! [`DictionaryError`]. Problems with individual variants (unknown reference,
//! blank text, a literal already taken) are logged through `tracing` and the
//! variant is skipped.
//!
//! ## Example
//!
//! ```
//! use dictionary::{DefinitionSource, DictionaryConfig, EntryKind, RawDefinition, RawVariant, TermDictionary};
//!
//! let source = DefinitionSource {
//!     definitions: vec![RawDefinition::new("Verwerking", "Elke bewerking van persoonsgegevens.")],
//!     alternative_terms: vec![RawVariant::new("gegevensverwerking", "verwerking")],
//!     ..Default::default()
//! };
//!
//! let dict = TermDictionary::build(&source, &DictionaryConfig::default()).unwrap();
//! assert_eq!(dict.len(), 1);
//! assert!(dict.term("VERWERKING").is_some());
//!
//! let kinds: Vec<EntryKind> = dict.entries().map(|(_, entry)| entry.kind()).collect();
//! assert_eq!(kinds[0], EntryKind::Canonical);
//! ```

mod config;
mod dictionary;
mod error;
mod id;
mod inflect;
mod record;
mod source;

pub use crate::config::{DictionaryConfig, InflectionConfig};
pub use crate::dictionary::{BuildStats, TermDictionary};
pub use crate::error::DictionaryError;
pub use crate::id::create_id;
pub use crate::inflect::generate_forms;
pub use crate::record::{
    fold_case, Entry, EntryId, EntryKind, TermRecord, VariantKind, VariantRecord,
};
pub use crate::source::{DefinitionSource, Examples, RawDefinition, RawVariant};
