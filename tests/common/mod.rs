//! Shared fixtures for the termlink integration tests.

#![allow(dead_code)]

use termlink::{load_dictionary, DefinitionSource, Glossary};

/// A small privacy glossary exercising every kind of entry.
pub const GLOSSARY_YAML: &str = r#"
definitions:
  - id: verwerking
    term: Verwerking
    definition: Een bewerking of geheel van bewerkingen met betrekking tot persoonsgegevens.
    explanation: Ook het enkel opslaan of inzien geldt als verwerking.
    examples:
      - Het verzamelen van e-mailadressen
      - Het wissen van een dossier
  - id: persoonsgegeven
    term: persoonsgegeven
    definition: Alle informatie over een geïdentificeerde of identificeerbare natuurlijke persoon.
  - id: persoon
    term: persoon
    definition: Een natuurlijk persoon.
  - id: dpia
    term: gegevensbeschermingseffectbeoordeling
    definition: Een beoordeling van het effect van de beoogde verwerking op de bescherming van persoonsgegevens.
    examples: Een DPIA voor een nieuw klantportaal.
  - id: risico
    term: risico
    definition: Een scenario dat een gebeurtenis en de gevolgen daarvan beschrijft.
  - id: e-mailadres
    term: e-mailadres
    definition: Adres waarop iemand elektronische post ontvangt.
alternative_spellings:
  - text: emailadres
    refers_to: e-mailadres
  - text: GEB
    refers_to: dpia
alternative_terms:
  - text: DPIA
    refers_to: dpia
  - text: gegevensverwerking
    refers_to: verwerking
"#;

/// Sample questionnaire answers, one per field.
pub const FIELDS: &[&str] = &[
    "Beschrijf de verwerking en de betrokken persoonsgegevens.",
    "Is er een DPIA uitgevoerd? Zo nee, waarom is de DPIA niet nodig?",
    "Welk risico loopt een persoon bij een datalek? Noem elk risico.",
    "Stuur de risicoanalyse naar het emailadres van de functionaris.",
    "Geen enkele glossariumterm in deze zin.",
    "",
];

pub fn source() -> DefinitionSource {
    DefinitionSource::from_yaml_str(GLOSSARY_YAML).expect("fixture parses")
}

pub fn glossary() -> Glossary {
    load_dictionary(&source()).expect("fixture loads")
}

/// Number of full definition blocks in `html`.
pub fn full_annotations(html: &str) -> usize {
    html.matches("<span class=\"aiv-definition\">").count()
}

/// Number of cross-references in `html`.
pub fn cross_references(html: &str) -> usize {
    html.matches("<span class=\"aiv-definition-ref\"").count()
}
