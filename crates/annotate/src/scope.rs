use std::collections::HashSet;

/// Canonical term keys already fully annotated in one unit of text.
///
/// [`Annotator::annotate`](crate::Annotator::annotate) uses a fresh scope per
/// call. Callers that want "first occurrence" to span several fields (all
/// questions of one form, say) keep a single scope and pass it to
/// [`Annotator::annotate_with_scope`](crate::Annotator::annotate_with_scope)
/// for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationScope {
    seen: HashSet<String>,
}

impl AnnotationScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Record `key`; returns `true` if it was not in the scope yet.
    pub fn mark(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Keys in the scope, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.seen.iter().map(String::as_str)
    }
}
