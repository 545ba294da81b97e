use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn, Level};

use crate::config::DictionaryConfig;
use crate::error::DictionaryError;
use crate::id::create_id;
use crate::inflect::generate_forms;
use crate::record::{
    fold_case, Entry, EntryId, Slot, TermRecord, VariantKind, VariantRecord,
};
use crate::source::{DefinitionSource, RawDefinition, RawVariant};

/// Counters reported after a build.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BuildStats {
    pub terms: usize,
    pub variants: usize,
    /// Variant entries skipped because of unresolved references, blank text
    /// or collisions.
    pub dropped: usize,
}

/// Read-only dictionary of canonical terms and their variants.
///
/// Built once with [`TermDictionary::build`]; there is no way to mutate it
/// afterwards. Entries are kept in registration order, which is also the
/// order in which they should be fed to the pattern index.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    terms: Vec<TermRecord>,
    variants: Vec<VariantRecord>,
    entries: Vec<Slot>,
    by_key: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    dropped: usize,
}

impl TermDictionary {
    /// Build a dictionary from a parsed definitions source.
    ///
    /// Registration order: canonical terms, alternative spellings, alternative
    /// terms, explicit inflections, generated inflections. When two entries
    /// fold to the same literal, the first one registered keeps it.
    pub fn build(
        source: &DefinitionSource,
        cfg: &DictionaryConfig,
    ) -> Result<Self, DictionaryError> {
        let start = Instant::now();
        cfg.validate()?;

        let span = tracing::span!(
            Level::INFO,
            "dictionary.build",
            definitions = source.definitions.len()
        );
        let _guard = span.enter();

        let mut builder = Builder::default();

        for (index, raw) in source.definitions.iter().enumerate() {
            if let Err(err) = builder.add_canonical(index, raw) {
                warn!(error = %err, index, "dictionary_build_failure");
                return Err(err);
            }
        }

        for raw in &source.alternative_spellings {
            builder.add_declared(raw, VariantKind::AlternativeSpelling);
        }
        for raw in &source.alternative_terms {
            builder.add_declared(raw, VariantKind::AlternativeTerm);
        }

        for (index, raw) in source.definitions.iter().enumerate() {
            let canonical = builder.terms[index].key.clone();
            for form in &raw.inflections {
                builder.add_variant(form, &canonical, VariantKind::InflectedForm, false);
            }
        }

        if cfg.inflection.enabled {
            let canonical_terms: Vec<(String, String)> = builder
                .terms
                .iter()
                .map(|t| (t.term.clone(), t.key.clone()))
                .collect();
            for (term, key) in canonical_terms {
                for form in generate_forms(&term, &cfg.inflection) {
                    builder.add_variant(&form, &key, VariantKind::InflectedForm, true);
                }
            }
        }

        let dictionary = builder.finish();
        let stats = dictionary.stats();
        info!(
            terms = stats.terms,
            variants = stats.variants,
            dropped = stats.dropped,
            elapsed_micros = start.elapsed().as_micros(),
            "dictionary_built"
        );
        Ok(dictionary)
    }

    /// Canonical term by display form, compared case-insensitively.
    pub fn term(&self, term: &str) -> Option<&TermRecord> {
        self.by_key.get(&fold_case(term)).map(|&i| &self.terms[i])
    }

    /// Canonical term by an already folded key, as stored on entries.
    pub fn term_by_key(&self, key: &str) -> Option<&TermRecord> {
        self.by_key.get(key).map(|&i| &self.terms[i])
    }

    pub fn term_by_id(&self, id: &str) -> Option<&TermRecord> {
        self.by_id.get(id).map(|&i| &self.terms[i])
    }

    /// Canonical terms in declaration order.
    pub fn terms(&self) -> &[TermRecord] {
        &self.terms
    }

    /// Registered variants in registration order.
    pub fn variants(&self) -> &[VariantRecord] {
        &self.variants
    }

    pub fn entry(&self, id: EntryId) -> Option<Entry<'_>> {
        self.entries.get(id.index()).map(|slot| self.resolve(*slot))
    }

    /// Every registered entry with its id, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, Entry<'_>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, slot)| (EntryId(i as u32), self.resolve(*slot)))
    }

    /// The canonical term an entry resolves to.
    pub fn canonical_of(&self, id: EntryId) -> Option<&TermRecord> {
        self.entry(id)
            .and_then(|entry| self.term_by_key(entry.canonical_key()))
    }

    /// Number of canonical terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn stats(&self) -> BuildStats {
        BuildStats {
            terms: self.terms.len(),
            variants: self.variants.len(),
            dropped: self.dropped,
        }
    }

    fn resolve(&self, slot: Slot) -> Entry<'_> {
        match slot {
            Slot::Term(i) => Entry::Term(&self.terms[i]),
            Slot::Variant(i) => Entry::Variant(&self.variants[i]),
        }
    }
}

#[derive(Default)]
struct Builder {
    terms: Vec<TermRecord>,
    variants: Vec<VariantRecord>,
    entries: Vec<Slot>,
    by_key: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    /// Folded literal → index into `entries`.
    registered: HashMap<String, usize>,
    dropped: usize,
}

impl Builder {
    fn add_canonical(&mut self, index: usize, raw: &RawDefinition) -> Result<(), DictionaryError> {
        let term = required(raw.term.as_deref(), index, "term")?;
        let definition = required(raw.definition.as_deref(), index, "definition")?;

        let key = fold_case(term);
        if let Some(&existing) = self.by_key.get(&key) {
            return Err(DictionaryError::DuplicateTerm {
                term: term.to_string(),
                existing: self.terms[existing].term.clone(),
            });
        }

        let id = match raw.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => {
                let derived = create_id(term);
                if derived.is_empty() {
                    key.clone()
                } else {
                    derived
                }
            }
        };
        if let Some(&existing) = self.by_id.get(&id) {
            return Err(DictionaryError::DuplicateId {
                id,
                term: term.to_string(),
                existing: self.terms[existing].term.clone(),
            });
        }

        let slot = self.terms.len();
        self.terms.push(TermRecord {
            id: id.clone(),
            term: term.to_string(),
            definition: definition.to_string(),
            explanation: non_blank(raw.explanation.as_deref()),
            examples: raw.examples.clone().filter(|e| !e.is_empty()),
            category: non_blank(raw.category.as_deref()),
            key: key.clone(),
        });
        self.by_key.insert(key.clone(), slot);
        self.by_id.insert(id, slot);
        self.registered.insert(key, self.entries.len());
        self.entries.push(Slot::Term(slot));
        Ok(())
    }

    fn add_declared(&mut self, raw: &RawVariant, kind: VariantKind) {
        let Some(text) = raw.text.as_deref() else {
            warn!(kind = ?kind, refers_to = ?raw.refers_to, "variant_missing_text");
            self.dropped += 1;
            return;
        };
        let target = raw
            .refers_to
            .as_deref()
            .map(str::trim)
            .and_then(|id| self.by_id.get(id).copied());
        let Some(target) = target else {
            warn!(
                text,
                kind = ?kind,
                refers_to = ?raw.refers_to,
                "variant_reference_unresolved"
            );
            self.dropped += 1;
            return;
        };
        let canonical = self.terms[target].key.clone();
        self.add_variant(text, &canonical, kind, false);
    }

    /// Register a variant literal unless its folded form is already taken.
    fn add_variant(&mut self, text: &str, canonical: &str, kind: VariantKind, generated: bool) {
        let text = text.trim();
        if text.is_empty() {
            warn!(canonical, kind = ?kind, "variant_blank_dropped");
            self.dropped += 1;
            return;
        }

        let key = fold_case(text);
        if let Some(&existing) = self.registered.get(&key) {
            let (existing_text, existing_canonical) = match self.entries[existing] {
                Slot::Term(i) => (self.terms[i].term.as_str(), self.terms[i].key.as_str()),
                Slot::Variant(i) => (
                    self.variants[i].text.as_str(),
                    self.variants[i].canonical.as_str(),
                ),
            };
            if generated && existing_canonical == canonical {
                // Generated form that the source already declared for this term.
                debug!(text, canonical, "generated_form_already_registered");
            } else {
                warn!(
                    text,
                    kind = ?kind,
                    canonical,
                    existing = existing_text,
                    existing_canonical,
                    "variant_collision_dropped"
                );
            }
            self.dropped += 1;
            return;
        }

        let slot = self.variants.len();
        self.variants.push(VariantRecord {
            text: text.to_string(),
            canonical: canonical.to_string(),
            kind,
        });
        self.registered.insert(key, self.entries.len());
        self.entries.push(Slot::Variant(slot));
    }

    fn finish(self) -> TermDictionary {
        TermDictionary {
            terms: self.terms,
            variants: self.variants,
            entries: self.entries,
            by_key: self.by_key,
            by_id: self.by_id,
            dropped: self.dropped,
        }
    }
}

fn required<'a>(
    value: Option<&'a str>,
    index: usize,
    field: &'static str,
) -> Result<&'a str, DictionaryError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(DictionaryError::MissingField { index, field })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InflectionConfig;
    use crate::record::EntryKind;

    fn no_inflections() -> DictionaryConfig {
        DictionaryConfig {
            inflection: InflectionConfig {
                enabled: false,
                ..Default::default()
            },
        }
    }

    fn source(defs: Vec<RawDefinition>) -> DefinitionSource {
        DefinitionSource {
            definitions: defs,
            ..Default::default()
        }
    }

    #[test]
    fn missing_term_is_fatal() {
        let src = source(vec![
            RawDefinition::new("Risico", "Kans maal impact."),
            RawDefinition {
                definition: Some("zonder term".into()),
                ..Default::default()
            },
        ]);
        let err = TermDictionary::build(&src, &no_inflections()).unwrap_err();
        assert_eq!(err, DictionaryError::MissingField { index: 1, field: "term" });
    }

    #[test]
    fn blank_definition_is_fatal() {
        let src = source(vec![RawDefinition::new("Risico", "   ")]);
        let err = TermDictionary::build(&src, &no_inflections()).unwrap_err();
        assert_eq!(
            err,
            DictionaryError::MissingField {
                index: 0,
                field: "definition"
            }
        );
    }

    #[test]
    fn case_insensitive_duplicate_is_fatal() {
        let src = source(vec![
            RawDefinition::new("Verwerking", "A"),
            RawDefinition::new("verwerking", "B"),
        ]);
        let err = TermDictionary::build(&src, &no_inflections()).unwrap_err();
        assert_eq!(
            err,
            DictionaryError::DuplicateTerm {
                term: "verwerking".into(),
                existing: "Verwerking".into()
            }
        );
    }

    #[test]
    fn duplicate_id_is_fatal() {
        let mut second = RawDefinition::new("Dataverwerking", "B");
        second.id = Some("verwerking".into());
        let src = source(vec![RawDefinition::new("Verwerking", "A"), second]);
        let err = TermDictionary::build(&src, &no_inflections()).unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateId { ref id, .. } if id == "verwerking"));
    }

    #[test]
    fn ids_default_to_normalised_term() {
        let src = source(vec![RawDefinition::new("Bijzondere persoonsgegevens", "A")]);
        let dict = TermDictionary::build(&src, &no_inflections()).unwrap();
        assert!(dict.term_by_id("bijzondere_persoonsgegevens").is_some());
        assert_eq!(
            dict.term("BIJZONDERE PERSOONSGEGEVENS").map(|t| t.term.as_str()),
            Some("Bijzondere persoonsgegevens")
        );
    }

    #[test]
    fn unresolved_variant_is_skipped() {
        let src = DefinitionSource {
            definitions: vec![RawDefinition::new("Email", "Elektronische post.")],
            alternative_spellings: vec![
                RawVariant::new("e-mail", "email"),
                RawVariant::new("emial", "does_not_exist"),
                RawVariant {
                    text: None,
                    refers_to: Some("email".into()),
                },
            ],
            ..Default::default()
        };
        let dict = TermDictionary::build(&src, &no_inflections()).unwrap();
        assert_eq!(dict.variants().len(), 1);
        assert_eq!(dict.variants()[0].text, "e-mail");
        assert_eq!(dict.variants()[0].canonical, "email");
        assert_eq!(dict.stats().dropped, 2);
    }

    #[test]
    fn earliest_registration_wins_on_collision() {
        let src = DefinitionSource {
            definitions: vec![
                RawDefinition::new("Betrokkene", "A"),
                RawDefinition::new("Persoon", "B"),
            ],
            alternative_spellings: vec![RawVariant::new("betrokken persoon", "betrokkene")],
            alternative_terms: vec![
                RawVariant::new("Betrokken Persoon", "persoon"),
                RawVariant::new("PERSOON", "betrokkene"),
            ],
        };
        let dict = TermDictionary::build(&src, &no_inflections()).unwrap();

        let kept: Vec<(&str, &str, VariantKind)> = dict
            .variants()
            .iter()
            .map(|v| (v.text.as_str(), v.canonical.as_str(), v.kind))
            .collect();
        assert_eq!(
            kept,
            vec![("betrokken persoon", "betrokkene", VariantKind::AlternativeSpelling)]
        );
        assert_eq!(dict.stats().dropped, 2);
    }

    #[test]
    fn explicit_inflections_precede_generated_ones() {
        let mut kat = RawDefinition::new("kat", "Een huisdier.");
        kat.inflections = vec!["katten".into()];
        let src = source(vec![kat]);
        let dict = TermDictionary::build(&src, &DictionaryConfig::default()).unwrap();

        let texts: Vec<&str> = dict.variants().iter().map(|v| v.text.as_str()).collect();
        assert_eq!(texts, vec!["katten", "kats", "katen", "kat's", "katn"]);
        // The generated "katten" duplicate is counted as dropped.
        assert_eq!(dict.stats().dropped, 1);
    }

    #[test]
    fn generated_forms_never_shadow_other_terms() {
        let src = source(vec![
            RawDefinition::new("persoon", "A"),
            RawDefinition::new("persoons", "B"),
        ]);
        let dict = TermDictionary::build(&src, &DictionaryConfig::default()).unwrap();
        let entry = dict
            .entries()
            .find(|(_, e)| e.text() == "persoons")
            .map(|(_, e)| e.kind());
        assert_eq!(entry, Some(EntryKind::Canonical));
    }

    #[test]
    fn entries_follow_registration_order() {
        let src = DefinitionSource {
            definitions: vec![RawDefinition::new("Gegevensbeschermingseffectbeoordeling", "D")],
            alternative_terms: vec![RawVariant::new(
                "DPIA",
                "gegevensbeschermingseffectbeoordeling",
            )],
            ..Default::default()
        };
        let dict = TermDictionary::build(&src, &DictionaryConfig::default()).unwrap();
        let kinds: Vec<EntryKind> = dict.entries().map(|(_, e)| e.kind()).collect();
        assert_eq!(kinds[0], EntryKind::Canonical);
        assert_eq!(kinds[1], EntryKind::Variant(VariantKind::AlternativeTerm));
        assert!(kinds[2..]
            .iter()
            .all(|k| *k == EntryKind::Variant(VariantKind::InflectedForm)));

        let (dpia, _) = dict.entries().nth(1).unwrap();
        assert_eq!(
            dict.canonical_of(dpia).map(|t| t.term.as_str()),
            Some("Gegevensbeschermingseffectbeoordeling")
        );
    }

    #[test]
    fn optional_fields_are_trimmed_or_dropped() {
        let mut raw = RawDefinition::new("Risico", "Kans maal impact.");
        raw.explanation = Some("  ".into());
        raw.category = Some(" 03. Risico's ".into());
        let dict = TermDictionary::build(&source(vec![raw]), &no_inflections()).unwrap();
        let term = dict.term("risico").unwrap();
        assert!(term.explanation.is_none());
        assert_eq!(term.category.as_deref(), Some("03. Risico's"));
    }

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let cfg = DictionaryConfig {
            inflection: InflectionConfig {
                suffixes: vec![String::new()],
                ..Default::default()
            },
        };
        let err = TermDictionary::build(&DefinitionSource::default(), &cfg).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidConfig(_)));
    }
}
