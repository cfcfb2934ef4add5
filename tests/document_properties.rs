//! Property-based tests for document assembly
//!
//! These tests ensure that assembly is total over arbitrary text, never invents content,
//! and is a pure function of its input.

use answer_render::answer::ast::{Block, SpanKind};
use answer_render::answer::reveal::{reveal, Revealer};
use answer_render::{assemble_document, parse_spans};
use proptest::prelude::*;

/// Generate answer-like text: headings, callouts, bullets, table rows, delimiters, prose
fn answer_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            // Markdown headings
            "#{2,5} [A-Za-z *_]{0,20}",
            // Callout-looking lines
            "[A-Z][a-z ]{0,15}[:：]",
            // Bullets with emphasis
            "[-*] [a-z]{0,8}(\\*\\*[a-z]{1,5}\\*\\*|_[a-z]{1,5}_)?[a-z ]{0,8}",
            // Table rows, some malformed
            "\\|?( ?[A-Za-z0-9]{0,6} ?\\|){1,4}[a-z]{0,3}",
            // Section delimiters
            "-{2,5}",
            // Prose
            "[A-Za-z0-9 .,:!?]{0,30}",
            // Blank or whitespace
            "[ \t]{0,3}",
        ],
        0..20,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Arbitrary text, including non-ASCII and control characters
fn any_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![answer_text_strategy(), any::<String>(), "\\PC{0,80}"]
}

/// Whether `needle` appears in `haystack` in order, not necessarily contiguously
fn is_subsequence(needle: impl Iterator<Item = char>, haystack: &str) -> bool {
    let mut haystack = haystack.chars();
    needle.into_iter().all(|c| haystack.any(|h| h == c))
}

fn non_whitespace(block: &Block) -> Vec<char> {
    block
        .plain_text()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

proptest! {
    #[test]
    fn test_assembly_is_total(text in any_text_strategy()) {
        let doc = assemble_document(&text);
        for section in &doc.sections {
            prop_assert!(!section.is_empty());
        }
    }

    #[test]
    fn test_no_content_is_invented(text in any_text_strategy()) {
        let doc = assemble_document(&text);
        let produced: Vec<char> = doc
            .blocks()
            .flat_map(|(_, block)| non_whitespace(block))
            .collect();
        prop_assert!(
            is_subsequence(produced.iter().copied(), &text),
            "document text {:?} is not a subsequence of {:?}",
            produced.iter().collect::<String>(),
            text
        );
    }

    #[test]
    fn test_assembly_is_idempotent(text in any_text_strategy()) {
        prop_assert_eq!(assemble_document(&text), assemble_document(&text));
    }

    #[test]
    fn test_blocks_never_blank(text in answer_text_strategy()) {
        let doc = assemble_document(&text);
        for (_, block) in doc.blocks() {
            match block {
                Block::Paragraph { text } | Block::CalloutHeading { text, .. } => {
                    prop_assert!(!text.trim().is_empty());
                }
                Block::Table(table) => {
                    prop_assert!(table.column_count >= 2);
                    for row in &table.rows {
                        prop_assert_eq!(row.len(), table.column_count);
                    }
                }
                Block::Heading { level, .. } => prop_assert!((2..=4).contains(level)),
                Block::Bullet { .. } => {}
            }
        }
    }

    #[test]
    fn test_unmarked_text_is_one_plain_span(text in "[^*_]+") {
        let spans = parse_spans(&text);
        prop_assert_eq!(spans.len(), 1);
        prop_assert_eq!(spans[0].kind, SpanKind::Plain);
        prop_assert_eq!(&spans[0].text, &text);
    }

    #[test]
    fn test_spans_are_never_empty(text in "[a-z *_]{0,40}") {
        for span in parse_spans(&text) {
            prop_assert!(!span.text.is_empty());
        }
    }

    #[test]
    fn test_reveal_emits_every_prefix_once(text in "\\PC{0,40}") {
        let snapshots: Vec<&str> = reveal(&text).collect();
        prop_assert_eq!(snapshots.len(), text.chars().count());
        for pair in snapshots.windows(2) {
            prop_assert!(pair[1].starts_with(pair[0]));
            prop_assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
        }
        if let Some(last) = snapshots.last() {
            prop_assert_eq!(*last, text.as_str());
        }
    }

    #[test]
    fn test_revealer_matches_reveal(text in "\\PC{0,40}") {
        let mut revealer = Revealer::new(text.clone());
        let mut ticked = Vec::new();
        while let Some(snapshot) = revealer.tick() {
            ticked.push(snapshot.to_string());
        }
        let expected: Vec<String> = reveal(&text).map(str::to_string).collect();
        prop_assert_eq!(ticked, expected);
        prop_assert!(revealer.is_complete());
        prop_assert_eq!(revealer.tick(), None);
    }
}
