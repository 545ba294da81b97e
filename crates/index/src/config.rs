use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;

/// Word-boundary settings for the pattern index.
///
/// A match may only start after, and end before, a character that is not a
/// word character. Alphanumeric characters and combining marks are always
/// word characters; `extra_word_chars` extends that set.
///
/// The default adds `-` and `_`, so `risico-analyse` is one word and yields
/// no match for `risico`. Hyphenated keys such as `e-mail` match as a unit,
/// because the hyphen is part of the key itself.
///
/// ```rust
/// use index::IndexConfig;
///
/// assert!(IndexConfig::default().is_word_char('-'));
/// let loose = IndexConfig { extra_word_chars: Vec::new() };
/// assert!(!loose.is_word_char('-'));
/// assert!(loose.is_word_char('\u{301}'));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexConfig {
    #[serde(default = "default_extra_word_chars")]
    pub extra_word_chars: Vec<char>,
}

fn default_extra_word_chars() -> Vec<char> {
    vec!['-', '_']
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extra_word_chars: default_extra_word_chars(),
        }
    }
}

impl IndexConfig {
    pub fn is_word_char(&self, ch: char) -> bool {
        // A trailing accent in decomposed text belongs to the letter before it.
        ch.is_alphanumeric() || is_combining_mark(ch) || self.extra_word_chars.contains(&ch)
    }
}
