//! Mechanical inflection rules.
//!
//! No morphology: forms are produced by appending fixed suffixes, plus one
//! consonant-doubling rule for short words. Generated forms that do not occur
//! in real text are harmless; they simply never match.

use crate::config::InflectionConfig;

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Generated inflected forms of `term`, in rule order and without duplicates.
///
/// Terms that do not end in a letter (abbreviations in brackets, codes such
/// as `art. 35`) get no generated forms.
pub fn generate_forms(term: &str, cfg: &InflectionConfig) -> Vec<String> {
    if !cfg.enabled || !term.chars().last().is_some_and(char::is_alphabetic) {
        return Vec::new();
    }

    let mut forms: Vec<String> = Vec::with_capacity(cfg.suffixes.len() + 1);
    for suffix in &cfg.suffixes {
        let form = format!("{term}{suffix}");
        if !forms.contains(&form) {
            forms.push(form);
        }
    }

    if cfg.double_final_consonant {
        if let Some(form) = doubled_form(term, cfg.doubling_max_chars) {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
    }

    forms
}

/// `kat` → `katten`: a single vowel followed by a single consonant at the end
/// of a short, single-word term.
fn doubled_form(term: &str, max_chars: usize) -> Option<String> {
    let chars: Vec<char> = term.chars().collect();
    let n = chars.len();
    if n < 2 || n > max_chars || chars.iter().any(|c| !c.is_alphabetic()) {
        return None;
    }

    let last = chars[n - 1];
    if is_vowel(last) || !is_vowel(chars[n - 2]) {
        return None;
    }
    if n >= 3 && is_vowel(chars[n - 3]) {
        return None;
    }

    Some(format!("{term}{last}en"))
}

fn is_vowel(ch: char) -> bool {
    ch.to_lowercase().all(|c| VOWELS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> InflectionConfig {
        InflectionConfig::default()
    }

    #[test]
    fn suffix_forms_in_rule_order() {
        assert_eq!(
            generate_forms("risico", &defaults()),
            vec!["risicos", "risicoen", "risico's", "risicon"]
        );
    }

    #[test]
    fn short_vowel_consonant_doubles() {
        let forms = generate_forms("kat", &defaults());
        assert_eq!(forms.last().map(String::as_str), Some("katten"));
    }

    #[test]
    fn long_vowel_does_not_double() {
        let forms = generate_forms("boom", &defaults());
        assert!(!forms.iter().any(|f| f == "boommen"));
    }

    #[test]
    fn long_terms_do_not_double() {
        let forms = generate_forms("formulier", &defaults());
        assert!(!forms.iter().any(|f| f == "formulierren"));
    }

    #[test]
    fn multi_word_terms_do_not_double() {
        assert!(doubled_form("al at", 5).is_none());
    }

    #[test]
    fn capitalised_terms_double_with_original_case() {
        assert_eq!(doubled_form("Pad", 5).as_deref(), Some("Padden"));
    }

    #[test]
    fn non_letter_ending_gets_nothing() {
        assert!(generate_forms("AVG (GDPR)", &defaults()).is_empty());
        assert!(generate_forms("art. 35", &defaults()).is_empty());
    }

    #[test]
    fn disabled_config_generates_nothing() {
        let cfg = InflectionConfig {
            enabled: false,
            ..defaults()
        };
        assert!(generate_forms("kat", &cfg).is_empty());
    }
}
