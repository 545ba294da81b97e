use std::cmp::Reverse;

use index::MatchCandidate;

/// A match selected by [`resolve`]: no two resolved matches share a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMatch<'t, P> {
    pub text: &'t str,
    pub payload: P,
    pub start: usize,
    pub end: usize,
}

impl<'t, P> From<MatchCandidate<'t, P>> for ResolvedMatch<'t, P> {
    fn from(candidate: MatchCandidate<'t, P>) -> Self {
        Self {
            text: candidate.text,
            payload: candidate.payload,
            start: candidate.start,
            end: candidate.end,
        }
    }
}

/// Reduce raw candidates to an ordered, non-overlapping selection.
///
/// Start offsets are processed in ascending order. At each start that is not
/// inside an already chosen span, the longest candidate wins; equal lengths
/// go to the lowest registration ordinal. Every candidate starting inside the
/// chosen span is discarded, so overlap is settled greedily in favour of the
/// earliest, then longest, match.
pub fn resolve<'t, P: Copy>(mut candidates: Vec<MatchCandidate<'t, P>>) -> Vec<ResolvedMatch<'t, P>> {
    candidates.retain(|c| !c.is_empty());
    candidates.sort_unstable_by_key(|c| (c.start, Reverse(c.len()), c.ordinal));

    let mut resolved: Vec<ResolvedMatch<'t, P>> = Vec::with_capacity(candidates.len());
    let mut covered_until = 0;
    for candidate in candidates {
        if candidate.start < covered_until {
            continue;
        }
        covered_until = candidate.end;
        resolved.push(candidate.into());
    }
    resolved
}
