//! Removal of definition markup.
//!
//! Front-ends that export or diff answers need the plain text back. The
//! stripper drops every definition block (with all nested content), unwraps
//! definition and cross-reference spans, and copies everything else through,
//! including spans that belong to the document itself.

use crate::markup::MarkupConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    /// Our wrapper: its closing tag is dropped too.
    Unwrapped,
    /// A span we did not create: kept, and so is its closing tag.
    Kept,
}

/// Strip markup produced with the default vocabulary.
pub fn strip_annotations(html: &str) -> String {
    strip_annotations_with(html, &MarkupConfig::default())
}

/// Strip markup produced with `markup`.
///
/// `strip_annotations_with(&annotator.annotate(t), annotator.markup()) == t`
/// for any `t` that does not already contain spans with these classes.
pub fn strip_annotations_with(html: &str, markup: &MarkupConfig) -> String {
    let mut out = String::with_capacity(html.len());
    let mut stack: Vec<Open> = Vec::new();
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        rest = &rest[lt..];

        match tag_len(rest) {
            Some(len) if is_close_span(rest) => {
                match stack.pop() {
                    Some(Open::Unwrapped) => {}
                    Some(Open::Kept) | None => out.push_str(&rest[..len]),
                }
                rest = &rest[len..];
            }
            Some(len) if is_open_span(rest) => {
                let tag = &rest[..len];
                rest = &rest[len..];
                match first_class(tag) {
                    Some(class) if class == markup.text_class => {
                        rest = skip_block(rest);
                    }
                    Some(class)
                        if class == markup.container_class || class == markup.reference_class =>
                    {
                        stack.push(Open::Unwrapped);
                    }
                    _ => {
                        out.push_str(tag);
                        stack.push(Open::Kept);
                    }
                }
            }
            _ => {
                out.push('<');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_open_span(s: &str) -> bool {
    s.strip_prefix("<span")
        .and_then(|after| after.chars().next())
        .is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
}

fn is_close_span(s: &str) -> bool {
    s.strip_prefix("</span")
        .and_then(|after| after.chars().next())
        .is_some_and(|c| c == '>' || c.is_whitespace())
}

/// Length of the tag starting at `s[0] == '<'`, through its `>`.
///
/// `None` when another `<` comes first: the bracket is text, not a tag.
fn tag_len(s: &str) -> Option<usize> {
    let end = s[1..].find(['<', '>'])? + 1;
    (s.as_bytes()[end] == b'>').then_some(end + 1)
}

fn first_class(tag: &str) -> Option<&str> {
    let start = tag.find("class=\"")? + "class=\"".len();
    let value = &tag[start..];
    let end = value.find('"')?;
    value[..end].split_whitespace().next()
}

/// Skip past the `</span>` closing the span whose opening tag was just
/// consumed. Returns the remainder after it, or `""` if it never closes.
fn skip_block(s: &str) -> &str {
    let mut depth = 1usize;
    let mut rest = s;
    while let Some(lt) = rest.find('<') {
        rest = &rest[lt..];
        match tag_len(rest) {
            Some(_) if is_open_span(rest) => depth += 1,
            Some(len) if is_close_span(rest) => {
                depth -= 1;
                if depth == 0 {
                    return &rest[len..];
                }
            }
            _ => {}
        }
        rest = &rest[1..];
    }
    ""
}
