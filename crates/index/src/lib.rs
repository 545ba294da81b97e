//! # termlink Pattern Index
//!
//! A case-insensitive multi-pattern matcher over dictionary literals, built
//! as a prefix tree stored in an arena of indexed nodes.
//!
//! ## Core Features
//!
//! - **Single scan**: [`PatternIndex::find_matches`] reports every registered
//!   literal that occurs in a document, including candidates that overlap or
//!   share a start offset (`persoon` and `persoonsgegeven`).
//! - **Word boundaries**: a match must start at the beginning of the document
//!   or after a non-word character, and end at the end of the document or
//!   before one. Word characters are alphanumerics, combining marks and
//!   [`IndexConfig::extra_word_chars`] (`-` and `_` by default, so
//!   hyphenated compounds are never split).
//! - **Case-insensitive, case-preserving**: keys and document characters are
//!   lowercased per character; candidates carry the document's own slice.
//! - **Generic payload**: the index stores any `Copy` payload at terminal
//!   nodes, so it knows nothing about dictionaries.
//!
//! Worst-case cost of a scan is O(document length × longest key), which is
//! fine for questionnaire-sized fields.
//!
//! ## Example Usage
//!
//! ```
//! use index::{IndexConfig, PatternIndex};
//!
//! let mut index = PatternIndex::new(IndexConfig::default());
//! index.add_term("persoon", 0u32);
//! index.add_term("Persoonsgegeven", 1u32);
//!
//! let found = index.find_matches("Elk persoonsgegeven telt.");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].payload, 1);
//! assert_eq!(found[0].text, "persoonsgegeven");
//! ```

mod config;
mod trie;

pub use crate::config::IndexConfig;
pub use crate::trie::{MatchCandidate, PatternIndex};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternIndex<u32>>();
    }

    #[test]
    fn config_deserializes_word_chars() {
        let cfg: IndexConfig = serde_json::from_str(r#"{ "extra_word_chars": ["-", "_"] }"#)
            .expect("valid config");
        assert!(cfg.is_word_char('_'));
        assert!(cfg.is_word_char('é'));
        assert!(!cfg.is_word_char(' '));
    }

    #[test]
    fn missing_word_chars_fall_back_to_hyphen_and_underscore() {
        let cfg: IndexConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(cfg, IndexConfig::default());
        assert_eq!(cfg.extra_word_chars, vec!['-', '_']);
    }
}
