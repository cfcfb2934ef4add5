//! Inline span element
//!
//!     A span is one run of text with a single formatting kind. Spans come out of the
//!     inline parser in source order and never nest: the text of a bold span is kept
//!     verbatim, even if it contains italic markers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Formatting applied to a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Unformatted text, kept verbatim
    Plain,
    /// Text that was wrapped in `**...**`
    Bold,
    /// Text that was wrapped in `_..._`
    Italic,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanKind::Plain => write!(f, "plain"),
            SpanKind::Bold => write!(f, "bold"),
            SpanKind::Italic => write!(f, "italic"),
        }
    }
}

/// A run of text with one formatting kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, text)
    }
}

/// Concatenate span texts, dropping formatting
pub fn flatten(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_kind_display() {
        assert_eq!(format!("{}", SpanKind::Plain), "plain");
        assert_eq!(format!("{}", SpanKind::Bold), "bold");
        assert_eq!(format!("{}", SpanKind::Italic), "italic");
    }

    #[test]
    fn test_flatten_drops_formatting() {
        let spans = vec![Span::plain("Total "), Span::bold("42"), Span::italic(" kWh")];
        assert_eq!(flatten(&spans), "Total 42 kWh");
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten(&[]), "");
    }
}
