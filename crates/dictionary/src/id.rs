/// Derive a stable identifier from a display term.
///
/// Lowercases the term, turns every character outside `[a-z0-9]` into a
/// separator, collapses separator runs into a single `_` and trims them from
/// both ends.
///
/// ```rust
/// use dictionary::create_id;
///
/// assert_eq!(create_id("Data Protection Impact Assessment (DPIA)"),
///            "data_protection_impact_assessment_dpia");
/// assert_eq!(create_id("  Bijzondere   persoonsgegevens "), "bijzondere_persoonsgegevens");
/// ```
pub fn create_id(term: &str) -> String {
    let mut id = String::with_capacity(term.len());
    let mut pending_separator = false;

    for ch in term.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !id.is_empty() {
                id.push('_');
            }
            pending_separator = false;
            id.push(ch);
        } else {
            pending_separator = true;
        }
    }

    id
}
