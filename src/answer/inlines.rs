//! Inline span parsing
//!
//!     Splits one line (or one table cell) into plain, bold and italic spans. Only two
//!     markers are recognised:
//!
//!         - Bold: `**text**`, text non-empty and free of `*`
//!         - Italic: `_text_`, text non-empty and free of `_`
//!
//!     Markers do not nest. The text inside a bold span is never scanned again for italics,
//!     and a marker without a matching close is left in the surrounding plain text. Empty
//!     runs between adjacent markers are dropped, so the output never holds an empty span.

use crate::answer::ast::{Span, SpanKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Bold or italic delimiter pair, leftmost match first
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*|_[^_]+_").expect("emphasis pattern is valid"));

/// Parse a line into inline spans, preserving order
pub fn parse_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for found in EMPHASIS.find_iter(line) {
        push_plain(&mut spans, &line[cursor..found.start()]);
        spans.push(delimited_span(found.as_str()));
        cursor = found.end();
    }
    push_plain(&mut spans, &line[cursor..]);

    spans
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::plain(text));
    }
}

/// Strip the delimiters off a matched token
fn delimited_span(token: &str) -> Span {
    // Markers are ASCII, so the byte offsets are char boundaries.
    if let Some(inner) = token
        .strip_prefix("**")
        .and_then(|rest| rest.strip_suffix("**"))
    {
        Span::new(SpanKind::Bold, inner)
    } else {
        Span::new(SpanKind::Italic, &token[1..token.len() - 1])
    }
}
