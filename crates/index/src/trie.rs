use tracing::trace;

use crate::config::IndexConfig;

const ROOT: usize = 0;

/// One trie node. Children are kept sorted by character for binary search.
#[derive(Debug, Clone, Default)]
struct Node {
    children: Vec<(char, u32)>,
    terminal: Option<u32>,
}

#[derive(Debug, Clone)]
struct Terminal<P> {
    payload: P,
    text: String,
}

/// A dictionary literal found in a document.
///
/// Offsets are UTF-8 byte offsets into the scanned document; `end` is
/// exclusive and `text == &document[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate<'t, P> {
    /// Matched slice of the document, in the document's casing.
    pub text: &'t str,
    pub payload: P,
    pub start: usize,
    pub end: usize,
    /// Registration ordinal of the matched key; lower registered earlier.
    pub ordinal: usize,
}

impl<P> MatchCandidate<'_, P> {
    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Case-insensitive prefix tree over dictionary literals.
///
/// Nodes live in a single arena (`Vec<Node>`) and refer to each other by
/// index. Each terminal node stores the payload registered for its key along
/// with the original-cased literal.
///
/// Built once, then only read: `find_matches` takes `&self` and the index is
/// `Send + Sync` whenever `P` is.
#[derive(Debug, Clone)]
pub struct PatternIndex<P> {
    nodes: Vec<Node>,
    terminals: Vec<Terminal<P>>,
    config: IndexConfig,
}

impl<P: Copy> PatternIndex<P> {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            nodes: vec![Node::default()],
            terminals: Vec::new(),
            config,
        }
    }

    /// Build an index from `(literal, payload)` pairs in registration order.
    pub fn from_entries<'a, I>(config: IndexConfig, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, P)>,
    {
        let mut index = Self::new(config);
        for (text, payload) in entries {
            index.add_term(text, payload);
        }
        index
    }

    /// Insert the case-folded characters of `text` and store `payload` at the
    /// terminal node.
    ///
    /// Returns `false` when `text` is empty or its folded form is already
    /// registered; the earlier payload is kept in that case.
    pub fn add_term(&mut self, text: &str, payload: P) -> bool {
        if text.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for folded in text.chars().flat_map(char::to_lowercase) {
            node = self.child_or_insert(node, folded);
        }

        if let Some(existing) = self.nodes[node].terminal {
            trace!(
                text,
                existing = %self.terminals[existing as usize].text,
                "pattern_already_registered"
            );
            return false;
        }

        let ordinal = self.terminals.len() as u32;
        self.terminals.push(Terminal {
            payload,
            text: text.to_string(),
        });
        self.nodes[node].terminal = Some(ordinal);
        true
    }

    /// Every registered literal occurring in `document` on word boundaries.
    ///
    /// For each start offset that begins the document or follows a non-word
    /// character, the trie is walked over the case-folded document text;
    /// every terminal reached whose end is the document end or is followed by
    /// a non-word character yields a candidate. Overlapping candidates,
    /// including several at the same start, are all reported, ordered by
    /// start then end.
    pub fn find_matches<'t>(&self, document: &'t str) -> Vec<MatchCandidate<'t, P>> {
        let mut candidates = Vec::new();
        if document.is_empty() || self.terminals.is_empty() {
            return candidates;
        }

        let mut previous: Option<char> = None;
        for (start, ch) in document.char_indices() {
            let at_boundary = previous.is_none_or(|p| !self.config.is_word_char(p));
            previous = Some(ch);
            if at_boundary {
                self.walk_from(document, start, &mut candidates);
            }
        }

        candidates
    }

    /// Exact lookup of a literal, case-insensitively.
    pub fn get(&self, text: &str) -> Option<P> {
        let mut node = ROOT;
        for folded in text.chars().flat_map(char::to_lowercase) {
            node = self.child(node, folded)?;
        }
        self.nodes[node]
            .terminal
            .map(|t| self.terminals[t as usize].payload)
    }

    /// Original-cased literal registered under `ordinal`.
    pub fn original_text(&self, ordinal: usize) -> Option<&str> {
        self.terminals.get(ordinal).map(|t| t.text.as_str())
    }

    /// Number of registered literals.
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    fn walk_from<'t>(
        &self,
        document: &'t str,
        start: usize,
        candidates: &mut Vec<MatchCandidate<'t, P>>,
    ) {
        let rest = &document[start..];
        let mut node = ROOT;

        for (offset, ch) in rest.char_indices() {
            // A terminal is only reachable once the whole folded expansion of
            // a document character has been consumed.
            for folded in ch.to_lowercase() {
                match self.child(node, folded) {
                    Some(next) => node = next,
                    None => return,
                }
            }

            let Some(ordinal) = self.nodes[node].terminal else {
                continue;
            };
            let end = start + offset + ch.len_utf8();
            let ends_on_boundary = document[end..]
                .chars()
                .next()
                .is_none_or(|next| !self.config.is_word_char(next));
            if ends_on_boundary {
                candidates.push(MatchCandidate {
                    text: &document[start..end],
                    payload: self.terminals[ordinal as usize].payload,
                    start,
                    end,
                    ordinal: ordinal as usize,
                });
            }
        }
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        let children = &self.nodes[node].children;
        children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| children[pos].1 as usize)
    }

    fn child_or_insert(&mut self, node: usize, ch: char) -> usize {
        match self.nodes[node]
            .children
            .binary_search_by_key(&ch, |&(c, _)| c)
        {
            Ok(pos) => self.nodes[node].children[pos].1 as usize,
            Err(pos) => {
                let next = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node].children.insert(pos, (ch, next as u32));
                next
            }
        }
    }
}

impl<P: Copy> Default for PatternIndex<P> {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}
